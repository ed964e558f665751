//! file: source.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:14:48 Saturday
//! brief: the randomness a walker consumes

use std::collections::VecDeque;

use rand::Rng;

/// Uniform choices consumed by the walker.
///
/// Every [`rand::Rng`] is a source. Swap in [`Scripted`] to drive a walker
/// through a known sequence of decisions.
pub trait RandomSource {
    /// A uniform index in `0..options`. `options` is at least 1.
    fn pick(&mut self, options: usize) -> usize;

    /// `-1` or `+1` with equal probability.
    fn sign(&mut self) -> i32 {
        if self.pick(2) == 0 { -1 } else { 1 }
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick(&mut self, options: usize) -> usize {
        debug_assert!(options > 0);
        self.gen_range(0..options)
    }
}

/// Replays a fixed sequence of picks.
///
/// Each pick consumes one value, reduced modulo the number of options. Once
/// the sequence is exhausted every pick is 0, which always selects the first
/// candidate.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    picks: VecDeque<usize>,
    drawn: usize,
}

impl Scripted {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Number of picks made so far, including those past the end of the script.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl RandomSource for Scripted {
    fn pick(&mut self, options: usize) -> usize {
        self.drawn += 1;
        match self.picks.pop_front() {
            Some(value) if options > 0 => value % options,
            _ => 0,
        }
    }
}
