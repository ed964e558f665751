//! file: error.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:15:20 Saturday
//! brief:

use thiserror::Error;

use super::Cell;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalkError {
    /// Forward, left and right of the head are all occupied.
    #[error("walker unable to advance from {head}")]
    Stuck { head: Cell },
    /// A replayed walker without two cells has no heading.
    #[error("walker needs at least two cells to advance (has {len})")]
    Unseeded { len: usize },
    #[error("path needs at least two cells (got {len})")]
    TooShort { len: usize },
    #[error("cell {index} at {to} is not one step from {from}")]
    NotAdjacent { index: usize, from: Cell, to: Cell },
    #[error("cell {index} revisits {cell}, first seen at {first}")]
    Revisited { index: usize, first: usize, cell: Cell },
}
