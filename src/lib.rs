//! file: lib.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:10:42 Saturday
//! brief: self-avoiding random walks on the square lattice

pub mod walk;

pub use walk::{Cell, Direction, RandomSource, Scripted, WalkError, Walker};
