//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/21 10:14:27 Sunday
//! brief:

mod board;
mod session;
mod status;

use gpui::actions;

pub use board::WalkView;
pub use session::Session;
pub use status::WalkStatus;

actions!(walker, [Restart, TogglePause, StepOnce, Retreat, QuitViewer]);
