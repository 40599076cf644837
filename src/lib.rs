#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod attack;
mod bitboard;
mod board;
mod common;
mod config;
mod env;
mod fleet;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod prelude;
mod ship;

pub use attack::resolve;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use env::*;
pub use fleet::{Cell, Fleet};
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, parse_level, LOG_ENV_VAR};
pub use placement::{FixedPlacer, FleetPlacer, RandomPlacer};
pub use ship::*;
