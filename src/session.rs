//! The maze a traversal works on.
//!
//! A `MazeSession` owns the single active maze plus the pause time used by code that draws marks.
//! It starts empty; `read_maze_map` installs a maze, replacing the previous one only when the new
//! map is read and parsed without error. Every maze query made before a maze is installed fails
//! with `ErrorKind::UnloadedState`.

use std::path::Path;
use std::time::Duration;

use log::{info, warn};

use crate::coordinates::{self, Direction, Point};
use crate::errors::*;
use crate::maze::Maze;
use crate::pacing::PauseTime;
use crate::parser;
use crate::units::{Height, Width};


#[derive(Debug, Default)]
pub struct MazeSession {
    maze: Option<Maze>,
    pause_time: PauseTime,
}

impl MazeSession {
    pub fn new() -> MazeSession {
        MazeSession::default()
    }

    /// Read the maze map file at `path` and make it the active maze.
    ///
    /// On failure any previously loaded maze stays active and unchanged.
    pub fn read_maze_map<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Maze> {
        let path = path.as_ref();
        match parser::read_maze_file(path) {
            Ok(maze) => {
                info!("loaded {}x{} maze from {}", maze.width().0, maze.height().0, path.display());
                Ok(self.install_maze(maze))
            }
            Err(e) => {
                if self.is_loaded() {
                    warn!("keeping the previous maze, failed to load {}: {}", path.display(), e);
                }
                Err(e)
            }
        }
    }

    /// Make an already parsed maze the active maze.
    pub fn install_maze(&mut self, maze: Maze) -> &mut Maze {
        self.maze.insert(maze)
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.maze.is_some()
    }

    pub fn maze(&self) -> Result<&Maze> {
        self.maze.as_ref().ok_or_else(|| ErrorKind::UnloadedState.into())
    }

    pub fn maze_mut(&mut self) -> Result<&mut Maze> {
        self.maze.as_mut().ok_or_else(|| ErrorKind::UnloadedState.into())
    }

    pub fn dimensions(&self) -> Result<(Width, Height)> {
        let maze = self.maze()?;
        Ok((maze.width(), maze.height()))
    }

    pub fn get_start_position(&self) -> Result<Point> {
        Ok(self.maze()?.start())
    }

    pub fn outside_maze(&self, pt: Point) -> Result<bool> {
        Ok(self.maze()?.is_outside(pt))
    }

    /// Is there a wall on the `dir` side of `pt`? Points outside the maze are walled on all sides.
    pub fn wall_exists(&self, pt: Point, dir: Direction) -> Result<bool> {
        Ok(self.maze()?.wall_exists(pt, dir))
    }

    pub fn mark_square(&mut self, pt: Point) -> Result<()> {
        self.maze_mut()?.mark_square(pt)
    }

    pub fn unmark_square(&mut self, pt: Point) -> Result<()> {
        self.maze_mut()?.unmark_square(pt)
    }

    pub fn is_marked(&self, pt: Point) -> Result<bool> {
        self.maze()?.is_marked(pt)
    }

    /// `coordinates::adjacent_point`, usable without a loaded maze.
    #[inline]
    pub fn adjacent_point(&self, pt: Point, dir: Direction) -> Point {
        coordinates::adjacent_point(pt, dir)
    }

    pub fn set_pause_time(&mut self, seconds: f64) -> Result<()> {
        self.pause_time = PauseTime::from_seconds(seconds)?;
        Ok(())
    }

    #[inline]
    pub fn pause_time(&self) -> Duration {
        self.pause_time.duration()
    }
}


#[cfg(test)]
mod tests {

    use std::path::PathBuf;

    use super::*;

    fn fixture_path(name: &str) -> PathBuf {
        [env!("CARGO_MANIFEST_DIR"), "data", name].iter().collect()
    }

    fn loaded_session() -> MazeSession {
        let mut session = MazeSession::new();
        session.read_maze_map(fixture_path("simple.maze")).expect("fixture maze should load");
        session
    }

    fn is_unloaded<T>(result: Result<T>) -> bool {
        matches!(result, Err(Error(ErrorKind::UnloadedState, _)))
    }

    #[test]
    fn queries_before_loading_fail() {
        let mut session = MazeSession::new();
        let origin = Point::new(0, 0);
        assert!(!session.is_loaded());
        assert!(is_unloaded(session.get_start_position()));
        assert!(is_unloaded(session.outside_maze(origin)));
        assert!(is_unloaded(session.wall_exists(origin, Direction::North)));
        assert!(is_unloaded(session.mark_square(origin)));
        assert!(is_unloaded(session.unmark_square(origin)));
        assert!(is_unloaded(session.is_marked(origin)));
        assert!(is_unloaded(session.dimensions()));
    }

    #[test]
    fn adjacent_point_needs_no_maze() {
        let session = MazeSession::new();
        assert_eq!(session.adjacent_point(Point::new(1, 1), Direction::East), Point::new(2, 1));
    }

    #[test]
    fn start_position_after_loading() {
        let session = loaded_session();
        assert_eq!(session.get_start_position().unwrap(), Point::new(0, 0));
        assert_eq!(session.dimensions().unwrap(), (Width(5), Height(2)));
    }

    #[test]
    fn outside_and_walls() {
        let session = loaded_session();
        assert!(!session.outside_maze(Point::new(4, 1)).unwrap());
        assert!(session.outside_maze(Point::new(5, 1)).unwrap());
        assert!(session.outside_maze(Point::new(0, -1)).unwrap());

        assert!(session.wall_exists(Point::new(0, 0), Direction::West).unwrap());
        assert!(!session.wall_exists(Point::new(0, 0), Direction::North).unwrap());
        assert!(session.wall_exists(Point::new(-1, 0), Direction::East).unwrap());
    }

    #[test]
    fn marking() {
        let mut session = loaded_session();
        let pt = Point::new(2, 1);
        session.mark_square(pt).unwrap();
        assert!(session.is_marked(pt).unwrap());
        session.unmark_square(pt).unwrap();
        assert!(!session.is_marked(pt).unwrap());

        let outside = Point::new(2, 2);
        assert!(matches!(session.mark_square(outside), Err(Error(ErrorKind::OutOfRange(_), _))));
    }

    #[test]
    fn failed_load_keeps_the_previous_maze() {
        let mut session = loaded_session();
        session.mark_square(Point::new(1, 0)).unwrap();

        let missing = session.read_maze_map(fixture_path("no-such-file.maze"));
        assert!(matches!(missing, Err(Error(ErrorKind::FileError(_), _))));

        let two_starts = session.read_maze_map(fixture_path("two_starts.maze"));
        assert!(matches!(two_starts, Err(Error(ErrorKind::FormatError(4, _), _))));

        assert_eq!(session.get_start_position().unwrap(), Point::new(0, 0));
        assert_eq!(session.dimensions().unwrap(), (Width(5), Height(2)));
        assert!(session.is_marked(Point::new(1, 0)).unwrap());
    }

    #[test]
    fn successful_load_replaces_the_maze() {
        let mut session = loaded_session();
        session.mark_square(Point::new(1, 0)).unwrap();

        let maze = session.read_maze_map(fixture_path("corridors.maze")).unwrap();
        assert_eq!(maze.start(), Point::new(0, 2));

        assert_eq!(session.get_start_position().unwrap(), Point::new(0, 2));
        assert!(!session.is_marked(Point::new(1, 0)).unwrap());
    }

    #[test]
    fn installing_a_parsed_maze() {
        let mut session = MazeSession::new();
        let maze = "+-+-+\n| |S|\n+-+-+\n".parse::<Maze>().unwrap();
        session.install_maze(maze);
        assert_eq!(session.get_start_position().unwrap(), Point::new(1, 0));
        assert!(session.wall_exists(Point::new(0, 0), Direction::East).unwrap());
    }

    #[test]
    fn pause_time() {
        let mut session = MazeSession::new();
        assert_eq!(session.pause_time(), Duration::from_secs(0));
        session.set_pause_time(0.5).unwrap();
        assert_eq!(session.pause_time(), Duration::from_millis(500));

        assert!(session.set_pause_time(-1.0).is_err());
        assert_eq!(session.pause_time(), Duration::from_millis(500));
    }
}
