//! file: settings.rs
//! author: Jacob Xie
//! date: 2025/12/21 10:02:14 Sunday
//! brief: viewer command line

use anyhow::{Result, ensure};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "walker-view")]
#[command(about = "Animate a self-avoiding random walk on a grid")]
pub struct Settings {
    /// Grid columns
    #[arg(long, default_value_t = 32)]
    pub width: i32,

    /// Grid rows
    #[arg(long, default_value_t = 24)]
    pub height: i32,

    /// Stop once the walk holds this many cells (0 grows until it leaves the grid)
    #[arg(long, default_value_t = 0)]
    pub length: usize,

    /// Seed for reproducible walks; fresh entropy on every restart when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between steps
    #[arg(long, default_value_t = 60)]
    pub tick_ms: u64,

    /// Cell size in pixels
    #[arg(long, default_value_t = 20.0)]
    pub cell_size: f32,

    /// Cells to retreat after the walker gets stuck (0 stops instead)
    #[arg(long, default_value_t = 4)]
    pub backtrack: usize,

    /// Consecutive stalls at the same length before the walk gives up; each
    /// stall retreats `backtrack` cells further than the last
    #[arg(long, default_value_t = 16)]
    pub max_stalls: usize,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.width > 2, "width must be greater than 2 (got {})", self.width);
        ensure!(self.height > 2, "height must be greater than 2 (got {})", self.height);
        ensure!(self.tick_ms > 0, "tick-ms must be positive");
        ensure!(
            self.cell_size >= 4.0,
            "cell-size must be at least 4 (got {})",
            self.cell_size
        );
        Ok(())
    }

    /// Window size in pixels: the grid plus room for padding and the header.
    pub fn window_size(&self) -> (f32, f32) {
        let pitch = self.cell_size + GRID_GAP;
        (
            self.width as f32 * pitch + 96.0,
            self.height as f32 * pitch + 200.0,
        )
    }
}

/// Space between grid cells, matching `gap_1`.
pub const GRID_GAP: f32 = 4.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::try_parse_from(["walker-view"]).unwrap();
        assert_eq!(settings.width, 32);
        assert_eq!(settings.height, 24);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.backtrack, 4);
        assert_eq!(settings.max_stalls, 16);
        settings.validate().unwrap();
    }

    #[test]
    fn flags_override_defaults() {
        let settings = Settings::try_parse_from([
            "walker-view",
            "--width",
            "10",
            "--seed",
            "7",
            "--length",
            "50",
        ])
        .unwrap();
        assert_eq!(settings.width, 10);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.length, 50);
    }

    #[test]
    fn rejects_degenerate_grid() {
        let settings = Settings::try_parse_from(["walker-view", "--height", "1"]).unwrap();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("height"));
    }
}
