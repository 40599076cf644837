//! Ruleset constants and the runtime environment configuration.

use crate::bitboard::BitBoard;
use crate::common::EnvError;
use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
/// Board side length as an index type.
pub const GRID: usize = BOARD_SIZE as usize;

/// A set of cells on the game board.
pub type CellSet = BitBoard<u128, GRID>;

pub const NUM_SHIPS: usize = 10;

/// The fleet in placement order (longest first).
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("carrier", 4),
    ShipType::new("battlecruiser", 3),
    ShipType::new("battlecruiser", 3),
    ShipType::new("frigate", 2),
    ShipType::new("frigate", 2),
    ShipType::new("frigate", 2),
    ShipType::new("submarine", 1),
    ShipType::new("submarine", 1),
    ShipType::new("submarine", 1),
    ShipType::new("submarine", 1),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

/// Hidden grid sum once every segment of the standard fleet has been hit.
pub const WIN_SUM: i32 = -(TOTAL_SHIP_CELLS as i32);

pub const DEFAULT_MAX_STEPS: usize = 100;

/// Random draws allowed per ship before the bounded strategy starts scanning.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000;

/// Whole-fleet redraws tried by the bounded strategy before it settles on
/// [`CANONICAL_LAYOUT`].
pub const MAX_FLEET_RESTARTS: usize = 16;

pub const REWARD_TIMEOUT: f64 = 0.0;
pub const REWARD_INVALID: f64 = -1.0;
pub const REWARD_HIT: f64 = 1.0;
pub const REWARD_MISS: f64 = -0.1;

/// A known-valid layout of the standard fleet, as `(row, col, vertical)`
/// origins matching [`FLEET`] index by index.
pub const CANONICAL_LAYOUT: [(usize, usize, bool); NUM_SHIPS] = [
    (0, 0, false),
    (0, 5, false),
    (2, 0, false),
    (2, 4, false),
    (2, 7, false),
    (4, 0, false),
    (4, 3, false),
    (4, 5, false),
    (4, 7, false),
    (4, 9, false),
];

const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// How the random placer reacts to crowded boards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementStrategy {
    /// Resample each ship until it fits, with no attempt limit.
    #[default]
    Rejection,
    /// Resample at most `max_attempts` times per ship, then scan candidates
    /// in a fixed order.
    Bounded { max_attempts: usize },
}

/// Runtime knobs of a [`crate::BattleshipEnv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvConfig {
    /// Step budget; the step that brings the counter to this value ends the
    /// episode as a loss.
    pub max_steps: usize,
    /// Seed for the environment RNG. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
    pub placement: PlacementStrategy,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            seed: None,
            placement: PlacementStrategy::default(),
        }
    }
}

impl EnvConfig {
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_placement(mut self, placement: PlacementStrategy) -> Self {
        self.placement = placement;
        self
    }

    /// Check the setup preconditions.
    pub fn validate(&self) -> Result<(), EnvError> {
        if self.max_steps == 0 {
            return Err(EnvError::InvalidConfig {
                param: "max_steps",
                reason: "must be at least 1",
            });
        }
        if let PlacementStrategy::Bounded { max_attempts: 0 } = self.placement {
            return Err(EnvError::InvalidConfig {
                param: "max_attempts",
                reason: "must be at least 1",
            });
        }
        if cfg!(not(feature = "std")) && self.seed.is_none() {
            return Err(EnvError::MissingSeed);
        }
        Ok(())
    }
}
