//! file: cell.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:12:31 Saturday
//! brief: lattice points, also used as step vectors

use std::fmt;
use std::ops::{Add, Neg, Sub};

use super::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    #[inline]
    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Swaps the coordinates. Applied to a heading this gives the side step
    /// the walker calls "left"; its negation is "right".
    #[inline]
    pub fn transpose(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// True when `other` is one rook step away.
    pub fn is_adjacent(self, other: Cell) -> bool {
        let d = other - self;
        d.x.abs() + d.y.abs() == 1
    }
}

impl Add for Cell {
    type Output = Cell;

    #[inline]
    fn add(self, rhs: Cell) -> Self::Output {
        Cell::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Cell {
    type Output = Cell;

    #[inline]
    fn sub(self, rhs: Cell) -> Self::Output {
        Cell::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Cell {
    type Output = Cell;

    #[inline]
    fn neg(self) -> Self::Output {
        Cell::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
