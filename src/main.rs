use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use mazelib::{
    coordinates::{Direction, Point},
    session::MazeSession,
};

const USAGE: &str = "Maze map driver

Usage:
    maze_driver -h | --help
    maze_driver <maze-file> [--pause=<seconds>] [--query-x=<x> --query-y=<y>]

Options:
    -h --help            Show this screen.
    --pause=<seconds>    Seconds to pause each time a mark is drawn [default: 0].
    --query-x=<x>        x coordinate of a square to describe.
    --query-y=<y>        y coordinate of a square to describe.

Coordinates start at (0, 0) in the bottom left square of the maze.
";
#[derive(Debug, Deserialize)]
struct DriverArgs {
    arg_maze_file: String,
    flag_pause: f64,
    flag_query_x: Option<i32>,
    flag_query_y: Option<i32>,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::mazelib::errors::Error, ::mazelib::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: DriverArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let mut session = MazeSession::new();
    session.set_pause_time(args.flag_pause)?;
    info!("pause time per mark {:?}", session.pause_time());

    session.read_maze_map(&args.arg_maze_file)
        .chain_err(|| format!("Failed to load maze map {}", args.arg_maze_file))?;

    let (width, height) = session.dimensions()?;
    println!("maze: {} wide, {} tall", width.0, height.0);
    println!("start: {}", session.get_start_position()?);
    print!("{}", session.maze()?);

    if let (Some(x), Some(y)) = (args.flag_query_x, args.flag_query_y) {
        describe_square(&session, Point::new(x, y))?;
    }

    Ok(())
}

fn describe_square(session: &MazeSession, pt: Point) -> Result<()> {

    if session.outside_maze(pt)? {
        println!("{} is outside the maze", pt);
        return Ok(());
    }

    let walls = session.maze()?.walls_at(pt)?;
    println!("{} walls: [{}]", pt, direction_names(&walls.walled_directions()));
    println!("{} open: [{}]", pt, direction_names(&walls.open_directions()));
    Ok(())
}

fn direction_names(dirs: &[Direction]) -> String {
    dirs.iter()
        .map(|dir| dir.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
