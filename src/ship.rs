//! Ship classes and straight-line ship placements.

use core::fmt;

use crate::common::FleetError;
use crate::config::{CellSet, GRID};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Row fixed, columns increase.
    Horizontal,
    /// Column fixed, rows increase.
    Vertical,
}

impl Orientation {
    /// `(d_row, d_col)` of one step along the ship.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Class of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A ship laid out on the board, starting at (`row`, `col`).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
}

impl Ship {
    /// Place a ship of `ship_type` at (`row`, `col`), failing if any
    /// segment would fall off the board.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, FleetError> {
        let len = ship_type.length();
        if len == 0 || row >= GRID || col >= GRID {
            return Err(FleetError::ShipOutOfBounds { row, col });
        }
        let start = match orientation {
            Orientation::Horizontal => col,
            Orientation::Vertical => row,
        };
        if len > GRID - start {
            return Err(FleetError::ShipOutOfBounds { row, col });
        }
        Ok(Ship {
            ship_type,
            orientation,
            row,
            col,
        })
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Cells covered by the ship, from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.orientation.delta();
        let (row, col) = (self.row, self.col);
        (0..self.ship_type.length()).map(move |i| (row + i * dr, col + i * dc))
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> CellSet {
        let mut mask = CellSet::new();
        for (r, c) in self.cells() {
            // in bounds by construction
            let _ = mask.set(r, c);
        }
        mask
    }

    /// The ship plus a one-cell border on every side, clipped to the board:
    /// a 3-wide, (length+2)-long window centred on the ship line.
    pub fn window(&self) -> CellSet {
        let (last_row, last_col) = self.cells().last().unwrap_or((self.row, self.col));
        let mut window = CellSet::new();
        for r in self.row.saturating_sub(1)..=(last_row + 1).min(GRID - 1) {
            for c in self.col.saturating_sub(1)..=(last_col + 1).min(GRID - 1) {
                let _ = window.set(r, c);
            }
        }
        window
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, origin: ({}, {}), orientation: {:?} }}",
            self.ship_type.name(),
            self.ship_type.length(),
            self.row,
            self.col,
            self.orientation,
        )
    }
}
