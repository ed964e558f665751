//! file: session.rs
//! author: Jacob Xie
//! date: 2025/12/21 10:24:08 Sunday
//! brief: walker state driven by the viewer clock

use std::time::Duration;

use rand::rngs::StdRng;
use tracing::{info, warn};
use unique_walker::{Cell, RandomSource, WalkError, Walker};

use super::WalkStatus;
use crate::settings::Settings;

pub struct Session<R = StdRng> {
    settings: Settings,
    walker: Walker<R>,
    seed: u64,
    status: WalkStatus,
    backtracks: usize,
    /// Stalls in a row without growing past `stalled_at`.
    stalls: usize,
    stalled_at: usize,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let seed = Self::fresh_seed(&settings);
        Self::with_walker(settings, Walker::seeded(seed), seed)
    }

    fn fresh_seed(settings: &Settings) -> u64 {
        settings.seed.unwrap_or_else(rand::random)
    }

    pub fn reset(&mut self) {
        self.seed = Self::fresh_seed(&self.settings);
        self.walker = Walker::seeded(self.seed);
        self.status = WalkStatus::Ready;
        self.backtracks = 0;
        self.stalls = 0;
        self.stalled_at = 0;
        info!(seed = self.seed, "walk reset");
    }

    pub fn restart(&mut self) {
        match self.status {
            WalkStatus::Ready | WalkStatus::Paused => self.status = WalkStatus::Running,
            WalkStatus::Running | WalkStatus::Stuck | WalkStatus::Complete => {
                self.reset();
                self.status = WalkStatus::Running;
            }
        }
    }
}

impl<R: RandomSource> Session<R> {
    fn with_walker(settings: Settings, walker: Walker<R>, seed: u64) -> Self {
        Self {
            settings,
            walker,
            seed,
            status: WalkStatus::Ready,
            backtracks: 0,
            stalls: 0,
            stalled_at: 0,
        }
    }

    pub fn toggle_pause(&mut self) {
        self.status = self.status.toggled();
    }

    pub fn tick(&mut self) {
        if self.status == WalkStatus::Running {
            self.step();
        }
    }

    /// Advances once regardless of status.
    ///
    /// A stuck walker backs off and carries on. Each stall that follows
    /// without the walk growing past the previous one retreats further, and
    /// after `max_stalls` of them the walk halts. Backtracking disabled halts
    /// on the first stall.
    pub fn step(&mut self) {
        match self.walker.advance() {
            Ok(cell) => {
                if self.walker.len() > self.stalled_at {
                    self.stalls = 0;
                }
                let target = self.settings.length;
                if !self.in_frame(cell) || (target > 0 && self.walker.len() >= target) {
                    info!(len = self.walker.len(), %cell, "walk complete");
                    self.status = WalkStatus::Complete;
                }
            }
            Err(WalkError::Stuck { head })
                if self.settings.backtrack > 0 && self.stalls < self.settings.max_stalls =>
            {
                self.stalls += 1;
                self.stalled_at = self.walker.len();
                let dropped = self.walker.retreat_by(self.settings.backtrack * self.stalls);
                self.backtracks += 1;
                warn!(%head, dropped, stalls = self.stalls, "walker stuck, backing off");
            }
            Err(err) => {
                warn!(%err, stalls = self.stalls, "walk halted");
                self.status = WalkStatus::Stuck;
            }
        }
    }

    /// Drops the head; a finished walk becomes paused so it can resume.
    pub fn retreat(&mut self) {
        self.walker.retreat();
        if matches!(self.status, WalkStatus::Stuck | WalkStatus::Complete) {
            self.status = WalkStatus::Paused;
        }
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.settings.tick_ms)
    }

    /// Lattice cell drawn at grid column `col`, row `row`. The origin sits in
    /// the middle of the grid.
    pub fn cell_at(&self, col: i32, row: i32) -> Cell {
        Cell::new(
            col - self.settings.width / 2,
            row - self.settings.height / 2,
        )
    }

    pub fn in_frame(&self, cell: Cell) -> bool {
        let col = cell.x + self.settings.width / 2;
        let row = cell.y + self.settings.height / 2;
        (0..self.settings.width).contains(&col) && (0..self.settings.height).contains(&row)
    }

    /// Width and height of the box the walk has covered so far.
    pub fn span(&self) -> (i32, i32) {
        match self.walker.bounds() {
            Some((lo, hi)) => (hi.x - lo.x + 1, hi.y - lo.y + 1),
            None => (0, 0),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn walker(&self) -> &Walker<R> {
        &self.walker
    }

    pub fn status(&self) -> WalkStatus {
        self.status
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn backtracks(&self) -> usize {
        self.backtracks
    }
}
