use std::fmt;

use crate::coordinates::Point;
use crate::units::{Height, Width};

/// Iterates every square of a maze in row major order, starting at the bottom left (0, 0).
#[derive(Clone)]
pub struct SquareIter {
    width: usize,
    current_square_number: usize,
    squares_count: usize,
}

impl SquareIter {
    pub(crate) fn new(width: Width, height: Height) -> SquareIter {
        SquareIter {
            width: width.0,
            current_square_number: 0,
            squares_count: width.0 * height.0,
        }
    }
}

impl fmt::Debug for SquareIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "SquareIter :: current_square_number: {:?}, squares_count: {:?}",
               self.current_square_number,
               self.squares_count)
    }
}

impl ExactSizeIterator for SquareIter {} // default impl using size_hint()
impl Iterator for SquareIter {
    type Item = Point;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_square_number < self.squares_count {
            let x = self.current_square_number % self.width;
            let y = self.current_square_number / self.width;
            self.current_square_number += 1;
            Some(Point::new(x as i32, y as i32))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.squares_count - self.current_square_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Iterates the rows of a maze from the northmost row down to row 0, the order they appear in a
/// maze map file. Each row is west to east.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    width: usize,
    rows_remaining: usize,
}

impl RowIter {
    pub(crate) fn new(width: Width, height: Height) -> RowIter {
        RowIter {
            width: width.0,
            rows_remaining: height.0,
        }
    }
}

impl ExactSizeIterator for RowIter {} // default impl using size_hint()
impl Iterator for RowIter {
    type Item = Vec<Point>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.rows_remaining > 0 {
            self.rows_remaining -= 1;
            let y = self.rows_remaining as i32;
            Some((0..self.width).map(|x| Point::new(x as i32, y)).collect())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rows_remaining, Some(self.rows_remaining))
    }
}
