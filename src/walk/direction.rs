//! file: direction.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:13:02 Saturday
//! brief:

use super::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Picks one of the four directions: an axis first, then a sign.
    pub fn random<R: RandomSource + ?Sized>(source: &mut R) -> Self {
        let horizontal = source.pick(2) == 0;
        let positive = source.sign() > 0;
        match (horizontal, positive) {
            (true, true) => Direction::Right,
            (true, false) => Direction::Left,
            (false, true) => Direction::Down,
            (false, false) => Direction::Up,
        }
    }
}
