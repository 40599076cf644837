//! Attack resolution against the hidden fleet.

use crate::board::VisibleBoard;
use crate::common::Outcome;
use crate::fleet::{in_bounds, Fleet};

/// Resolve an attack on (`row`, `col`), updating both grids.
///
/// Off-board targets are rejected without touching either grid. A strike on
/// an intact segment is a hit; if it was the ship's last intact segment the
/// whole ship is revealed, and if no intact segment is left anywhere the game
/// is won. Anything else is a miss, which only marks cells still unknown.
pub fn resolve(fleet: &mut Fleet, board: &mut VisibleBoard, row: i64, col: i64) -> Outcome {
    if !in_bounds(row, col) {
        return Outcome::Invalid;
    }
    let (row, col) = (row as usize, col as usize);

    if !fleet.strike(row, col) {
        board.mark_miss(row, col);
        return Outcome::Miss;
    }
    board.mark_hit(row, col);

    match fleet.sunk_ship(row, col) {
        None => Outcome::Hit,
        Some(ship) => {
            board.reveal(ship);
            if fleet.all_sunk() {
                Outcome::Win
            } else {
                Outcome::Sunk {
                    length: ship.count_ones(),
                }
            }
        }
    }
}
