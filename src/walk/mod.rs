//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:11:05 Saturday
//! brief:

mod cell;
mod direction;
pub mod enclosure;
mod error;
mod source;
mod walker;

pub use cell::{Axis, Cell};
pub use direction::Direction;
pub use error::WalkError;
pub use source::{RandomSource, Scripted};
pub use walker::Walker;
