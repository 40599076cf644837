//! Common types for the environment: step outcomes and setup errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::{REWARD_HIT, REWARD_INVALID, REWARD_MISS, REWARD_TIMEOUT};

/// Classification of a single `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Step budget exhausted; the action was ignored.
    Timeout,
    /// Action mapped outside the board.
    Invalid,
    /// Struck an intact segment of a ship that is still afloat.
    Hit,
    /// Struck the last intact segment of a ship of `length`.
    Sunk { length: usize },
    /// Sank the last ship of the fleet.
    Win,
    /// Struck water or an already hit segment.
    Miss,
}

impl Outcome {
    pub fn reward(&self) -> f64 {
        match self {
            Outcome::Timeout => REWARD_TIMEOUT,
            Outcome::Invalid => REWARD_INVALID,
            Outcome::Hit | Outcome::Sunk { .. } | Outcome::Win => REWARD_HIT,
            Outcome::Miss => REWARD_MISS,
        }
    }

    /// Whether this outcome ends the episode.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Timeout | Outcome::Win)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Timeout => "loss",
            Outcome::Invalid => "invalid action",
            Outcome::Hit => "hit",
            Outcome::Sunk { .. } => "ship sunk",
            Outcome::Win => "win",
            Outcome::Miss => "miss",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors raised while building a fleet layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Some segment of the ship would lie off the board.
    ShipOutOfBounds { row: usize, col: usize },
    /// The ship overlaps or touches (diagonals included) an existing ship.
    ShipTouches { row: usize, col: usize },
}

impl From<BitBoardError> for FleetError {
    fn from(err: BitBoardError) -> Self {
        FleetError::BitBoard(err)
    }
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            FleetError::ShipOutOfBounds { row, col } => {
                write!(f, "Ship at ({}, {}) does not fit on the board", row, col)
            }
            FleetError::ShipTouches { row, col } => {
                write!(f, "Ship at ({}, {}) touches another ship", row, col)
            }
        }
    }
}

/// Errors raised while constructing an environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// A configuration value violates its precondition.
    InvalidConfig {
        param: &'static str,
        reason: &'static str,
    },
    /// No seed was given and no entropy source is available.
    MissingSeed,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvError::InvalidConfig { param, reason } => {
                write!(f, "Invalid configuration: {} {}", param, reason)
            }
            EnvError::MissingSeed => write!(f, "A seed is required without the std feature"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {}

#[cfg(feature = "std")]
impl std::error::Error for EnvError {}
