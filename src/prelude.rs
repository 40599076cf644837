//! Commonly used types and utilities for ease of import.

pub use crate::{
    BattleshipEnv, EnvConfig, Environment, FixedPlacer, FleetPlacer, Observation, Outcome,
    PlacementStrategy, RandomPlacer, Step,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
