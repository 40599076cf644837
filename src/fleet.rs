//! Hidden fleet grid: where the ships are and which segments have been hit.

use core::fmt;

use crate::common::FleetError;
use crate::config::{CellSet, FLEET, GRID};
use crate::ship::Ship;

/// Longest distance a ray can travel from a struck cell and stay on one ship.
const MAX_RUN: i64 = FLEET[0].length() as i64 - 1;

/// The four axis directions walked by the sunk scan.
const DIRECTIONS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// State of one hidden cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Intact,
    Hit,
}

impl Cell {
    /// Numeric encoding used by the hidden grid sum.
    pub fn value(self) -> f64 {
        match self {
            Cell::Empty => 0.0,
            Cell::Intact => 1.0,
            Cell::Hit => -1.0,
        }
    }
}

/// Hidden ship layout for one episode. `hits` is always a subset of `ships`.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Fleet {
    ships: CellSet,
    hits: CellSet,
}

impl Fleet {
    /// An empty sea.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fleet from explicit placements, enforcing the one-cell gap
    /// between ships.
    pub fn from_ships(ships: &[Ship]) -> Result<Self, FleetError> {
        let mut fleet = Self::new();
        for ship in ships {
            fleet.place(ship)?;
        }
        Ok(fleet)
    }

    /// `true` if no intact segment lies in the padded window around `ship`.
    pub fn can_place(&self, ship: &Ship) -> bool {
        ship.window().is_disjoint(&self.intact())
    }

    /// Commit `ship` to the grid.
    pub fn place(&mut self, ship: &Ship) -> Result<(), FleetError> {
        if !self.can_place(ship) {
            let (row, col) = ship.origin();
            return Err(FleetError::ShipTouches { row, col });
        }
        self.ships |= ship.mask();
        Ok(())
    }

    /// All ship segments, hit or not.
    pub fn ship_map(&self) -> CellSet {
        self.ships
    }

    pub fn hits(&self) -> CellSet {
        self.hits
    }

    /// Segments not yet hit.
    pub fn intact(&self) -> CellSet {
        self.ships & !self.hits
    }

    /// Number of cells covered by ships.
    pub fn occupied(&self) -> usize {
        self.ships.count_ones()
    }

    /// Cell state at signed coordinates; `None` off the board.
    pub fn cell(&self, row: i64, col: i64) -> Option<Cell> {
        if !in_bounds(row, col) {
            None
        } else if self.hits.contains(row, col) {
            Some(Cell::Hit)
        } else if self.ships.contains(row, col) {
            Some(Cell::Intact)
        } else {
            Some(Cell::Empty)
        }
    }

    /// Sum of all cell values: +1 per intact segment, -1 per hit one.
    pub fn sum(&self) -> i32 {
        self.intact().count_ones() as i32 - self.hits.count_ones() as i32
    }

    /// `true` once every segment has been hit.
    pub fn all_sunk(&self) -> bool {
        self.sum() == -(self.occupied() as i32)
    }

    /// Mark the segment at (`row`, `col`) as hit. Returns `false`, leaving the
    /// grid untouched, unless the cell held an intact segment.
    pub fn strike(&mut self, row: usize, col: usize) -> bool {
        if self.cell(row as i64, col as i64) != Some(Cell::Intact) {
            return false;
        }
        self.hits.set(row, col).is_ok()
    }

    /// Cells of the ship through (`row`, `col`) if that ship has no intact
    /// segment left, otherwise `None`.
    pub fn sunk_ship(&self, row: usize, col: usize) -> Option<CellSet> {
        let mut cells = CellSet::new();
        cells.set(row, col).ok()?;
        for direction in DIRECTIONS {
            if !self.scan_ray((row as i64, col as i64), direction, &mut cells) {
                return None;
            }
        }
        Some(cells)
    }

    /// Walk away from `origin` collecting hit segments. Returns `false` as soon
    /// as an intact segment shows the ship is still afloat.
    fn scan_ray(&self, origin: (i64, i64), (dr, dc): (i64, i64), cells: &mut CellSet) -> bool {
        for step in 1..=MAX_RUN {
            let (r, c) = (origin.0 + dr * step, origin.1 + dc * step);
            match self.cell(r, c) {
                None | Some(Cell::Empty) => break,
                Some(Cell::Intact) => return false,
                Some(Cell::Hit) => {
                    let _ = cells.set(r as usize, c as usize);
                }
            }
        }
        true
    }

    /// Dense view of the hidden grid.
    pub fn values(&self) -> [[f64; GRID]; GRID] {
        let mut grid = [[0.0; GRID]; GRID];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = self.cell(r as i64, c as i64).map_or(0.0, Cell::value);
            }
        }
        grid
    }
}

pub(crate) fn in_bounds(row: i64, col: i64) -> bool {
    (0..GRID as i64).contains(&row) && (0..GRID as i64).contains(&col)
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fleet")
            .field("ships", &self.ships)
            .field("hits", &self.hits)
            .finish()
    }
}
