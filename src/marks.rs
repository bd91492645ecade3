use bit_set::BitSet;

use crate::coordinates::Point;
use crate::units::{Height, Width};

/// Visitation marks for every square of a `width` * `height` maze.
///
/// A bit in the set means the square is marked. Marks are scratch state for a traversal, they do
/// not take part in the maze structure.
#[derive(Debug, Clone)]
pub struct MarkMask {
    mask: BitSet,
    width: usize,
    height: usize,
}

impl MarkMask {
    pub fn new(width: Width, height: Height) -> MarkMask {
        let (Width(w), Height(h)) = (width, height);
        MarkMask {
            mask: BitSet::with_capacity(w * h),
            width: w,
            height: h,
        }
    }

    /// Is the given point marked?
    ///
    /// A point outside of the mask's 2d space is never marked.
    pub fn is_marked(&self, pt: Point) -> bool {
        self.bit_index(pt).map_or(false, |bit_index| self.mask.contains(bit_index))
    }

    /// Mark a point, returning false if the point is outside of the mask.
    pub fn mark(&mut self, pt: Point) -> bool {
        if let Some(bit_index) = self.bit_index(pt) {
            self.mask.insert(bit_index);
            true
        } else {
            false
        }
    }

    /// Unmark a point, returning false if the point is outside of the mask.
    pub fn unmark(&mut self, pt: Point) -> bool {
        if let Some(bit_index) = self.bit_index(pt) {
            self.mask.remove(bit_index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.mask.clear();
    }

    pub fn marked_count(&self) -> usize {
        self.mask.len()
    }

    /// Row major bit index of an in bounds point.
    #[inline]
    fn bit_index(&self, pt: Point) -> Option<usize> {
        if pt.x >= 0 && pt.y >= 0 && (pt.x as usize) < self.width && (pt.y as usize) < self.height {
            Some(pt.y as usize * self.width + pt.x as usize)
        } else {
            None
        }
    }
}
