use std::convert::From;
use std::fmt;

/// A square position in maze space. (0, 0) is the bottom left square and `y` grows northwards.
///
/// Points are signed so that stepping off the edge of the maze is representable.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from(x_y_pair: (i32, i32)) -> Point {
        Point::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

static ALL_DIRECTIONS: [Direction; 4] = [Direction::North,
                                        Direction::East,
                                        Direction::South,
                                        Direction::West];

impl Direction {
    /// The four compass directions, clockwise from North.
    pub fn all() -> &'static [Direction; 4] {
        &ALL_DIRECTIONS
    }

    /// Unit step `(dx, dy)` taken when moving one square this way.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        };
        write!(f, "{}", name)
    }
}

/// The point one square away from `pt` in direction `dir`.
///
/// There is no bounds checking, the result may be outside of any maze so check it with
/// `Maze::is_outside` before using it as a square.
#[inline]
pub fn adjacent_point(pt: Point, dir: Direction) -> Point {
    let (dx, dy) = dir.offset();
    Point::new(pt.x.wrapping_add(dx), pt.y.wrapping_add(dy))
}
