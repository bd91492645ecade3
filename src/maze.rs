use crate::coordinates::{adjacent_point, Direction, Point};
use crate::errors::*;
use crate::marks::MarkMask;
use crate::maze_iterators::{RowIter, SquareIter};
use crate::units::{Height, Width};
use crate::walls::{DirectionSmallVec, WallSet};


/// A rectangular maze of squares with a wall set per square, a visitation mark per square and a
/// single start square.
///
/// Squares are addressed by `Point`s with (0, 0) at the bottom left. A `Maze` is built by the
/// `parser` module, which guarantees that the walls of adjacent squares agree with each other and
/// that the outer boundary is walled.
#[derive(Debug, Clone)]
pub struct Maze {
    width: Width,
    height: Height,
    walls: Vec<WallSet>,
    marks: MarkMask,
    start: Point,
}

impl Maze {
    /// `walls` are in row major order from the bottom left square.
    pub(crate) fn from_walls(width: Width, height: Height, walls: Vec<WallSet>, start: Point) -> Maze {
        debug_assert_eq!(walls.len(), width.0 * height.0);
        Maze {
            width,
            height,
            walls,
            marks: MarkMask::new(width, height),
            start,
        }
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    /// Number of squares in the maze.
    #[inline]
    pub fn size(&self) -> usize {
        self.width.0 * self.height.0
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Is the point beyond the boundary of the maze?
    #[inline]
    pub fn is_outside(&self, pt: Point) -> bool {
        self.square_index(pt).is_none()
    }

    /// Is there a wall on the `dir` side of the square at `pt`?
    ///
    /// A point outside the maze is treated as fully walled: there is no moving into, out of or
    /// around nowhere, so this is `true` for every direction.
    pub fn wall_exists(&self, pt: Point, dir: Direction) -> bool {
        self.square_index(pt)
            .map_or(true, |index| self.walls[index].contains(dir))
    }

    /// All the walls of the square at `pt`.
    pub fn walls_at(&self, pt: Point) -> Result<WallSet> {
        self.square_index(pt)
            .map(|index| self.walls[index])
            .ok_or_else(|| ErrorKind::OutOfRange(pt).into())
    }

    /// Directions that lead out of the square at `pt` without passing through a wall.
    pub fn open_directions(&self, pt: Point) -> Result<DirectionSmallVec> {
        Ok(self.walls_at(pt)?.open_directions())
    }

    /// Squares reachable in one step from `pt`.
    pub fn passable_neighbours(&self, pt: Point) -> Result<Vec<Point>> {
        let dirs = self.open_directions(pt)?;
        Ok(dirs.iter().map(|&dir| adjacent_point(pt, dir)).collect())
    }

    pub fn mark_square(&mut self, pt: Point) -> Result<()> {
        if self.marks.mark(pt) {
            Ok(())
        } else {
            Err(ErrorKind::OutOfRange(pt).into())
        }
    }

    pub fn unmark_square(&mut self, pt: Point) -> Result<()> {
        if self.marks.unmark(pt) {
            Ok(())
        } else {
            Err(ErrorKind::OutOfRange(pt).into())
        }
    }

    pub fn is_marked(&self, pt: Point) -> Result<bool> {
        if self.is_outside(pt) {
            Err(ErrorKind::OutOfRange(pt).into())
        } else {
            Ok(self.marks.is_marked(pt))
        }
    }

    /// Unmark every square.
    pub fn clear_marks(&mut self) {
        self.marks.clear();
    }

    pub fn marked_count(&self) -> usize {
        self.marks.marked_count()
    }

    #[inline]
    pub fn iter(&self) -> SquareIter {
        SquareIter::new(self.width, self.height)
    }

    #[inline]
    pub fn iter_rows(&self) -> RowIter {
        RowIter::new(self.width, self.height)
    }

    /// Convert a point to an index into the row major wall storage.
    /// Returns None if the point is outside the maze.
    #[inline]
    fn square_index(&self, pt: Point) -> Option<usize> {
        let (Width(w), Height(h)) = (self.width, self.height);
        if pt.x >= 0 && pt.y >= 0 && (pt.x as usize) < w && (pt.y as usize) < h {
            Some(pt.y as usize * w + pt.x as usize)
        } else {
            None
        }
    }
}
