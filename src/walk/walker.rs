//! file: walker.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:26:37 Saturday
//! brief: self-avoiding walk that never walls itself in

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use super::{Cell, Direction, RandomSource, WalkError, enclosure};

/// Which rule of the move selection produced a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Forward blocked and one side blocked.
    Forced,
    /// Forward blocked, both sides free; decided by the enclosure test.
    Loop,
    /// Forward free but a diagonal corner is taken; turned toward it.
    Corner,
    /// Uniform pick among forward and the sides whose corners are free.
    Free,
}

/// A path of unit steps on the square lattice that never revisits a cell.
///
/// The walker owns its random source so that a scripted or seeded source
/// makes the whole walk reproducible.
#[derive(Debug, Clone)]
pub struct Walker<R = StdRng> {
    path: Vec<Cell>,
    index: HashMap<Cell, usize>,
    source: R,
}

impl Walker<StdRng> {
    /// Seeds a walk at the origin and grows it to `length` cells.
    pub fn new(length: usize) -> Result<Self, WalkError> {
        Self::with_source(length, StdRng::from_entropy())
    }

    /// Two-cell walk whose every later step is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::seed(StdRng::seed_from_u64(seed))
    }

    /// Replays `cells` as given. See [`Walker::from_path_with`].
    pub fn from_path(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self::from_path_with(cells, StdRng::from_entropy())
    }

    /// Replays `cells`, rejecting anything that is not a self-avoiding walk.
    pub fn try_from_path(cells: impl IntoIterator<Item = Cell>) -> Result<Self, WalkError> {
        Self::try_from_path_with(cells, StdRng::from_entropy())
    }
}

impl<R: RandomSource> Walker<R> {
    fn empty(source: R) -> Self {
        Self {
            path: Vec::new(),
            index: HashMap::new(),
            source,
        }
    }

    fn seed(source: R) -> Self {
        let mut walker = Self::empty(source);
        let step = Direction::random(&mut walker.source);
        walker.walk_to(Cell::ORIGIN);
        walker.walk_to(Cell::ORIGIN.offset(step));
        debug!(?step, "seeded walker");
        walker
    }

    /// Seeds a walk at the origin plus one random neighbour, then grows it to
    /// `length` cells.
    pub fn with_source(length: usize, source: R) -> Result<Self, WalkError> {
        let mut walker = Self::seed(source);
        if length > 2 {
            walker.advance_to(length)?;
        }
        Ok(walker)
    }

    /// Replays `cells` without checking them.
    ///
    /// Adjacency and uniqueness are the caller's responsibility. A repeated
    /// cell is indexed at its last position, and retreating past the later
    /// copy drops it from the index altogether.
    pub fn from_path_with(cells: impl IntoIterator<Item = Cell>, source: R) -> Self {
        let mut walker = Self::empty(source);
        for cell in cells {
            walker.walk_to(cell);
        }
        walker
    }

    /// Replays `cells`, failing on the first cell that breaks the walk.
    pub fn try_from_path_with(
        cells: impl IntoIterator<Item = Cell>,
        source: R,
    ) -> Result<Self, WalkError> {
        let mut walker = Self::empty(source);
        for (index, cell) in cells.into_iter().enumerate() {
            if let Some(&from) = walker.path.last() {
                if !from.is_adjacent(cell) {
                    return Err(WalkError::NotAdjacent {
                        index,
                        from,
                        to: cell,
                    });
                }
            }
            if let Some(first) = walker.index_of(cell) {
                return Err(WalkError::Revisited { index, first, cell });
            }
            walker.walk_to(cell);
        }
        if walker.len() < 2 {
            return Err(WalkError::TooShort { len: walker.len() });
        }
        Ok(walker)
    }

    /// Appends one cell and returns it.
    ///
    /// Fails with [`WalkError::Stuck`] when forward, left and right are all
    /// taken; the path is left untouched.
    pub fn advance(&mut self) -> Result<Cell, WalkError> {
        let (next, rule) = self.select()?;
        trace!(cell = %next, ?rule, len = self.path.len() + 1, "advance");
        self.walk_to(next);
        Ok(next)
    }

    /// Advances `n` times. Steps taken before a failure are kept.
    pub fn advance_by(&mut self, n: usize) -> Result<(), WalkError> {
        for _ in 0..n {
            self.advance()?;
        }
        Ok(())
    }

    /// Advances until the path holds `length` cells.
    pub fn advance_to(&mut self, length: usize) -> Result<(), WalkError> {
        self.advance_by(length.saturating_sub(self.path.len()))
    }

    fn select(&mut self) -> Result<(Cell, Rule), WalkError> {
        let len = self.path.len();
        if len < 2 {
            return Err(WalkError::Unseeded { len });
        }
        let head = self.path[len - 1];
        let heading = head - self.path[len - 2];
        let side = heading.transpose();

        let forward = head + heading;
        let left = head + side;
        let right = head - side;

        let li = self.index_of(left);
        let ri = self.index_of(right);

        if let Some(fi) = self.index_of(forward) {
            return match (li, ri) {
                (Some(_), Some(_)) => {
                    debug!(%head, len, "walker stuck");
                    Err(WalkError::Stuck { head })
                }
                (Some(_), None) => Ok((right, Rule::Forced)),
                (None, Some(_)) => Ok((left, Rule::Forced)),
                (None, None) if !self.encloses(left, fi, side) => Ok((left, Rule::Loop)),
                (None, None) => Ok((right, Rule::Loop)),
            };
        }

        let forward_left = forward + side;
        let forward_right = forward - side;
        let fli = self.index_of(forward_left);
        let fri = self.index_of(forward_right);

        if let Some(fli) = fli {
            if li.is_none() && !self.encloses(left, fli, side) {
                return Ok((left, Rule::Corner));
            }
        }
        if let Some(fri) = fri {
            if ri.is_none() && !self.encloses(right, fri, -side) {
                return Ok((right, Rule::Corner));
            }
        }

        // an occupied corner would seal the turn against the path
        let mut options = vec![forward];
        if li.is_none() && fli.is_none() {
            options.push(left);
        }
        if ri.is_none() && fri.is_none() {
            options.push(right);
        }
        let choice = self.source.pick(options.len()).min(options.len() - 1);
        Ok((options[choice], Rule::Free))
    }
}

impl<R> Walker<R> {
    fn walk_to(&mut self, cell: Cell) {
        self.path.push(cell);
        self.index.insert(cell, self.path.len() - 1);
    }

    fn encloses(&self, target: Cell, start: usize, ray: Cell) -> bool {
        enclosure::is_enclosed(&self.path, target, start, ray)
    }

    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn head(&self) -> Option<Cell> {
        self.path.last().copied()
    }

    /// Step from the second-to-last cell to the last one.
    pub fn heading(&self) -> Option<Cell> {
        match self.path.as_slice() {
            [.., prev, last] => Some(*last - *prev),
            _ => None,
        }
    }

    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.index.get(&cell).copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index.contains_key(&cell)
    }

    /// Smallest and largest corner of the box holding every cell.
    pub fn bounds(&self) -> Option<(Cell, Cell)> {
        let first = *self.path.first()?;
        let bounds = self.path.iter().fold((first, first), |(lo, hi), c| {
            (
                Cell::new(lo.x.min(c.x), lo.y.min(c.y)),
                Cell::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        });
        Some(bounds)
    }

    /// Drops the last cell unless only the two seed cells remain.
    pub fn retreat(&mut self) -> Option<Cell> {
        if self.path.len() <= 2 {
            return None;
        }
        let cell = self.path.pop()?;
        self.index.remove(&cell);
        trace!(%cell, len = self.path.len(), "retreat");
        Some(cell)
    }

    /// Retreats up to `n` times and returns how many cells were dropped.
    pub fn retreat_by(&mut self, n: usize) -> usize {
        let dropped = (0..n).take_while(|_| self.retreat().is_some()).count();
        debug!(dropped, len = self.path.len(), "retreated");
        dropped
    }
}
