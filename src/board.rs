//! Visible board: what the agent has learned about the hidden fleet.

use core::fmt;

use crate::config::{CellSet, GRID};

/// Dense observation handed to the agent, indexed `[row][col]`.
pub type Observation = [[f64; GRID]; GRID];

/// What the agent sees at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Unknown,
    Miss,
    HitPending,
    Sunk,
}

impl Mark {
    pub fn value(self) -> f64 {
        match self {
            Mark::Unknown => 0.0,
            Mark::Miss => 0.3,
            Mark::HitPending => 0.6,
            Mark::Sunk => 1.0,
        }
    }
}

/// Visible board made of three disjoint cell sets.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleBoard {
    misses: CellSet,
    pending: CellSet,
    sunk: CellSet,
}

impl VisibleBoard {
    /// A board with every cell unknown.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn mark(&self, row: usize, col: usize) -> Mark {
        if self.sunk.get(row, col).unwrap_or(false) {
            Mark::Sunk
        } else if self.pending.get(row, col).unwrap_or(false) {
            Mark::HitPending
        } else if self.misses.get(row, col).unwrap_or(false) {
            Mark::Miss
        } else {
            Mark::Unknown
        }
    }

    /// Record a miss, but only over an unknown cell.
    pub fn mark_miss(&mut self, row: usize, col: usize) {
        if self.mark(row, col) == Mark::Unknown {
            let _ = self.misses.set(row, col);
        }
    }

    /// Record a hit whose ship is not yet known to be sunk.
    pub fn mark_hit(&mut self, row: usize, col: usize) {
        if self.mark(row, col) != Mark::Sunk {
            let _ = self.misses.clear(row, col);
            let _ = self.pending.set(row, col);
        }
    }

    /// Reveal a sunk ship, overriding pending hits.
    pub fn reveal(&mut self, ship: CellSet) {
        self.pending &= !ship;
        self.misses &= !ship;
        self.sunk |= ship;
    }

    pub fn misses(&self) -> CellSet {
        self.misses
    }

    pub fn pending(&self) -> CellSet {
        self.pending
    }

    pub fn sunk(&self) -> CellSet {
        self.sunk
    }

    pub fn observation(&self) -> Observation {
        let mut obs = [[0.0; GRID]; GRID];
        for (r, row) in obs.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = self.mark(r, c).value();
            }
        }
        obs
    }
}

/// Row-major copy of an observation, matching a `10×10×1` tensor layout.
pub fn flatten(obs: &Observation) -> [f64; GRID * GRID] {
    let mut flat = [0.0; GRID * GRID];
    for (r, row) in obs.iter().enumerate() {
        flat[r * GRID..(r + 1) * GRID].copy_from_slice(row);
    }
    flat
}

impl fmt::Display for VisibleBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID {
            for c in 0..GRID {
                let ch = match self.mark(r, c) {
                    Mark::Unknown => '.',
                    Mark::Miss => 'o',
                    Mark::HitPending => 'x',
                    Mark::Sunk => '#',
                };
                write!(f, "{} ", ch)?;
            }
            if r + 1 < GRID {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for VisibleBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VisibleBoard:")?;
        fmt::Display::fmt(self, f)
    }
}
