use std::fmt;

use itertools::Itertools;

use crate::coordinates::{Direction, Point};
use crate::maze::Maze;

const CORNER: char = '+';
const HORIZONTAL_WALL: char = '-';
const VERTICAL_WALL: char = '|';
const OPEN: char = ' ';
const START: char = 'S';

/// Writes the maze as a maze map, the same text format that `parser` reads.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        let rows = self.iter_rows().collect::<Vec<Vec<Point>>>();
        let mut lines = Vec::with_capacity(2 * rows.len() + 1);

        for row in rows.iter() {
            lines.push(self.wall_line(row, Direction::North));
            lines.push(self.passage_line(row));
        }
        // The southern boundary, under row 0 which is the last row from `iter_rows`
        if let Some(bottom_row) = rows.last() {
            lines.push(self.wall_line(bottom_row, Direction::South));
        }

        writeln!(f, "{}", lines.iter().join("\n"))
    }
}

impl Maze {
    fn wall_line(&self, row: &[Point], side: Direction) -> String {
        let mut line = String::with_capacity(2 * row.len() + 1);
        line.push(CORNER);
        for &pt in row {
            line.push(if self.wall_exists(pt, side) { HORIZONTAL_WALL } else { OPEN });
            line.push(CORNER);
        }
        line
    }

    fn passage_line(&self, row: &[Point]) -> String {
        let vertical = |present: bool| if present { VERTICAL_WALL } else { OPEN };
        let mut line = String::with_capacity(2 * row.len() + 1);
        for &pt in row {
            line.push(vertical(self.wall_exists(pt, Direction::West)));
            line.push(if pt == self.start() { START } else { OPEN });
        }
        if let Some(&east_most) = row.last() {
            line.push(vertical(self.wall_exists(east_most, Direction::East)));
        }
        line
    }
}


#[cfg(test)]
mod tests {

    use std::fs;

    use crate::parser::{parse_maze, read_maze_file};

    #[test]
    fn writes_the_map_it_was_read_from() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/corridors.maze");
        let text = fs::read_to_string(path).unwrap();
        let maze = read_maze_file(path).unwrap();
        assert_eq!(maze.to_string(), text);
    }

    #[test]
    fn single_square() {
        let maze = parse_maze("+-+\n|S|\n+-+").unwrap();
        assert_eq!(maze.to_string(), "+-+\n|S|\n+-+\n");
    }

    #[test]
    fn written_maze_parses_to_the_same_structure() {
        let maze = parse_maze("\
+-+-+-+
|S    |
+ +-+ +
|   | |
+-+-+-+").unwrap();
        let reparsed = parse_maze(&maze.to_string()).unwrap();
        assert_eq!(reparsed.start(), maze.start());
        for pt in maze.iter() {
            assert_eq!(reparsed.walls_at(pt).unwrap(), maze.walls_at(pt).unwrap());
        }
    }

    #[test]
    fn marks_are_not_written() {
        let mut maze = parse_maze("+-+-+\n|S  |\n+-+-+\n").unwrap();
        maze.mark_square(crate::coordinates::Point::new(1, 0)).unwrap();
        assert_eq!(maze.to_string(), "+-+-+\n|S  |\n+-+-+\n");
    }
}
