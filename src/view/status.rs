//! file: status.rs
//! author: Jacob Xie
//! date: 2025/12/21 10:15:51 Sunday
//! brief:

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    Ready,
    Running,
    Paused,
    /// Boxed in with backtracking disabled.
    Stuck,
    /// Reached the target length or left the grid.
    Complete,
}

impl WalkStatus {
    pub fn label(self) -> (&'static str, u32) {
        match self {
            WalkStatus::Ready => ("Ready", 0x93c5fd),
            WalkStatus::Running => ("Running", 0x34d399),
            WalkStatus::Paused => ("Paused", 0xfbbf24),
            WalkStatus::Stuck => ("Stuck", 0xf87171),
            WalkStatus::Complete => ("Complete", 0xa5f3fc),
        }
    }

    pub fn overlay(self) -> Option<&'static str> {
        match self {
            WalkStatus::Ready => Some("Press Enter to start"),
            WalkStatus::Paused => Some("Paused"),
            WalkStatus::Stuck => Some("Stuck - press Enter"),
            WalkStatus::Complete => Some("Done - press Enter"),
            WalkStatus::Running => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            WalkStatus::Running => WalkStatus::Paused,
            WalkStatus::Paused => WalkStatus::Running,
            other => other,
        }
    }
}
