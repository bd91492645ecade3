use std::fmt;

use smallvec::SmallVec;

use crate::coordinates::Direction;

pub type DirectionSmallVec = SmallVec<[Direction; 4]>;

/// The blocked sides of one maze square, one bit per compass direction.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Default)]
pub struct WallSet(u8);

impl WallSet {
    pub fn empty() -> WallSet {
        WallSet(0)
    }

    pub fn all() -> WallSet {
        WallSet(0b1111)
    }

    #[inline(always)]
    fn bit(dir: Direction) -> u8 {
        match dir {
            Direction::North => 0b0001,
            Direction::East => 0b0010,
            Direction::South => 0b0100,
            Direction::West => 0b1000,
        }
    }

    #[inline]
    pub fn contains(self, dir: Direction) -> bool {
        self.0 & WallSet::bit(dir) != 0
    }

    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= WallSet::bit(dir);
    }

    #[inline]
    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !WallSet::bit(dir);
    }

    /// Builder style `insert` only when `present` is set.
    #[inline]
    pub fn with(mut self, dir: Direction, present: bool) -> WallSet {
        if present {
            self.insert(dir);
        }
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Directions with a wall, clockwise from North.
    pub fn walled_directions(self) -> DirectionSmallVec {
        Direction::all().iter().cloned().filter(|&dir| self.contains(dir)).collect()
    }

    /// Directions without a wall, clockwise from North.
    pub fn open_directions(self) -> DirectionSmallVec {
        Direction::all().iter().cloned().filter(|&dir| !self.contains(dir)).collect()
    }
}

impl fmt::Debug for WallSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.walled_directions().iter()).finish()
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn empty_and_full() {
        assert!(WallSet::empty().is_empty());
        assert_eq!(WallSet::empty().len(), 0);
        assert_eq!(WallSet::all().len(), 4);
        for &dir in Direction::all() {
            assert!(!WallSet::empty().contains(dir));
            assert!(WallSet::all().contains(dir));
        }
    }

    #[test]
    fn insert_and_remove_are_independent_per_direction() {
        let mut walls = WallSet::empty();
        walls.insert(Direction::East);
        walls.insert(Direction::East);
        assert!(walls.contains(Direction::East));
        assert!(!walls.contains(Direction::West));
        assert_eq!(walls.len(), 1);

        walls.insert(Direction::South);
        walls.remove(Direction::East);
        assert!(!walls.contains(Direction::East));
        assert!(walls.contains(Direction::South));

        walls.remove(Direction::North);
        assert_eq!(walls.len(), 1);
    }

    #[test]
    fn direction_listings() {
        let walls = WallSet::empty()
            .with(Direction::West, true)
            .with(Direction::North, true)
            .with(Direction::East, false);
        assert_eq!(&*walls.walled_directions(), &[Direction::North, Direction::West]);
        assert_eq!(&*walls.open_directions(), &[Direction::East, Direction::South]);
        assert_eq!(format!("{:?}", walls), "{North, West}");
    }
}
