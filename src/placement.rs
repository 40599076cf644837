//! Random fleet placement with a one-cell gap between ships.
//!
//! Ships are drawn longest first. Each candidate picks an orientation, a
//! fixed-axis coordinate and a start along the other axis, and is rejected
//! while any intact segment sits inside its padded window. A rejected
//! candidate only restarts the current ship.

use rand::Rng;

use crate::common::FleetError;
use crate::config::{PlacementStrategy, CANONICAL_LAYOUT, FLEET, GRID, MAX_FLEET_RESTARTS};
use crate::fleet::Fleet;
use crate::ship::{Orientation, Ship, ShipType};

/// Source of the hidden layout for each episode.
pub trait FleetPlacer {
    /// Produce the fleet for a new episode.
    fn place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Fleet;
}

/// Draws a fresh random layout of the standard fleet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomPlacer {
    strategy: PlacementStrategy,
}

impl RandomPlacer {
    pub fn new(strategy: PlacementStrategy) -> Self {
        Self { strategy }
    }
}

impl FleetPlacer for RandomPlacer {
    fn place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Fleet {
        match self.strategy {
            PlacementStrategy::Rejection => {
                let mut fleet = Fleet::new();
                for ship_type in FLEET {
                    let ship = sample_until_fits(rng, &fleet, ship_type);
                    commit(&mut fleet, &ship);
                }
                fleet
            }
            PlacementStrategy::Bounded { max_attempts } => {
                for restart in 0..MAX_FLEET_RESTARTS {
                    if let Some(fleet) = place_bounded(rng, max_attempts) {
                        return fleet;
                    }
                    log::debug!("fleet placement stuck, redrawing (restart {})", restart + 1);
                }
                log::warn!(
                    "no fleet after {} redraws, using canonical layout",
                    MAX_FLEET_RESTARTS
                );
                canonical_fleet()
            }
        }
    }
}

/// Hands out a copy of a fixed layout every episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPlacer {
    fleet: Fleet,
}

impl FixedPlacer {
    pub fn new(fleet: Fleet) -> Self {
        Self { fleet }
    }

    /// Validate `ships` and pin them as the layout.
    pub fn from_ships(ships: &[Ship]) -> Result<Self, FleetError> {
        Fleet::from_ships(ships).map(Self::new)
    }
}

impl FleetPlacer for FixedPlacer {
    fn place_fleet<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Fleet {
        self.fleet
    }
}

/// One random candidate for `ship_type`; `None` only for ship classes that
/// cannot fit on the board at all.
pub fn random_candidate<R: Rng + ?Sized>(rng: &mut R, ship_type: ShipType) -> Option<Ship> {
    if !fits_board(ship_type) {
        return None;
    }
    let orientation = if rng.random_bool(0.5) {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    let fixed = rng.random_range(0..GRID);
    let start = rng.random_range(0..GRID + 1 - ship_type.length());
    candidate(ship_type, orientation, fixed, start)
}

fn fits_board(ship_type: ShipType) -> bool {
    (1..=GRID).contains(&ship_type.length())
}

fn candidate(
    ship_type: ShipType,
    orientation: Orientation,
    fixed: usize,
    start: usize,
) -> Option<Ship> {
    let (row, col) = match orientation {
        Orientation::Horizontal => (fixed, start),
        Orientation::Vertical => (start, fixed),
    };
    Ship::new(ship_type, orientation, row, col).ok()
}

fn sample_until_fits<R: Rng + ?Sized>(rng: &mut R, fleet: &Fleet, ship_type: ShipType) -> Ship {
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        if let Some(ship) = random_candidate(rng, ship_type).filter(|s| fleet.can_place(s)) {
            log::trace!("placed {:?} after {} attempts", ship, attempts);
            return ship;
        }
    }
}

fn place_bounded<R: Rng + ?Sized>(rng: &mut R, max_attempts: usize) -> Option<Fleet> {
    let mut fleet = Fleet::new();
    for ship_type in FLEET {
        let ship = (0..max_attempts)
            .filter_map(|_| random_candidate(rng, ship_type))
            .find(|ship| fleet.can_place(ship))
            .or_else(|| scan_first_fit(&fleet, ship_type))?;
        commit(&mut fleet, &ship);
    }
    Some(fleet)
}

/// First valid position in (orientation, fixed, start) order.
pub fn scan_first_fit(fleet: &Fleet, ship_type: ShipType) -> Option<Ship> {
    if !fits_board(ship_type) {
        return None;
    }
    [Orientation::Vertical, Orientation::Horizontal]
        .into_iter()
        .flat_map(|o| (0..GRID).map(move |fixed| (o, fixed)))
        .flat_map(|(o, fixed)| {
            (0..GRID + 1 - ship_type.length())
                .filter_map(move |start| candidate(ship_type, o, fixed, start))
        })
        .find(|ship| fleet.can_place(ship))
}

/// The fallback layout from [`CANONICAL_LAYOUT`].
pub fn canonical_fleet() -> Fleet {
    let mut fleet = Fleet::new();
    for (ship_type, &(row, col, vertical)) in FLEET.iter().zip(CANONICAL_LAYOUT.iter()) {
        let orientation = if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        match Ship::new(*ship_type, orientation, row, col) {
            Ok(ship) => commit(&mut fleet, &ship),
            Err(e) => {
                debug_assert!(false, "canonical layout is off the board: {}", e);
                log::error!("canonical layout is off the board: {}", e);
            }
        }
    }
    fleet
}

fn commit(fleet: &mut Fleet, ship: &Ship) {
    let placed = fleet.place(ship);
    // candidates are checked with can_place first
    debug_assert!(placed.is_ok(), "rejected checked placement {:?}", ship);
    if let Err(e) = placed {
        log::error!("rejected checked placement {:?}: {}", ship, e);
    }
}
