//! Episode controller exposing the game through a `reset`/`step` contract.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::attack::resolve;
use crate::board::{Observation, VisibleBoard};
use crate::common::{EnvError, Outcome};
use crate::config::{EnvConfig, GRID};
use crate::fleet::Fleet;
use crate::placement::{FleetPlacer, RandomPlacer};

/// Fractional target `[row, col]`, each component nominally in `[0, 1]`.
pub type Action = [f64; 2];

/// Continuous box of values sharing one lower and one upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BoxSpace {
    pub low: f64,
    pub high: f64,
    pub shape: &'static [usize],
}

impl BoxSpace {
    pub const fn new(low: f64, high: f64, shape: &'static [usize]) -> Self {
        Self { low, high, shape }
    }

    /// Number of scalar values in one element of the space.
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    /// `true` if `values` has the right length and every value is in bounds.
    pub fn contains(&self, values: &[f64]) -> bool {
        values.len() == self.size() && values.iter().all(|v| (self.low..=self.high).contains(v))
    }

    /// Draw a uniform element of a space holding `K` values.
    pub fn sample<R: Rng + ?Sized, const K: usize>(&self, rng: &mut R) -> [f64; K] {
        core::array::from_fn(|_| rng.random_range(self.low..=self.high))
    }
}

pub const ACTION_SPACE: BoxSpace = BoxSpace::new(0.0, 1.0, &[2]);
pub const OBSERVATION_SPACE: BoxSpace = BoxSpace::new(0.0, 1.0, &[GRID, GRID, 1]);

/// Auxiliary data returned with every step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct StepInfo {
    pub outcome: Outcome,
    pub message: &'static str,
    /// Step counter after this step.
    pub steps: usize,
}

/// Result of one `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Step<O> {
    pub observation: O,
    pub reward: f64,
    pub terminal: bool,
    pub info: StepInfo,
}

/// Shape of an episodic single-agent environment.
pub trait Environment {
    type Action;
    type Observation;

    /// Start a new episode and return its first observation.
    fn reset(&mut self) -> Self::Observation;

    /// Apply one action.
    fn step(&mut self, action: Self::Action) -> Step<Self::Observation>;

    fn action_space(&self) -> BoxSpace;

    fn observation_space(&self) -> BoxSpace;
}

/// Map a fractional action onto a board coordinate by scaling each component
/// by the board size and truncating toward zero. The result may lie off the
/// board; `None` means a component was not a finite number.
pub fn action_to_cell(action: Action) -> Option<(i64, i64)> {
    let [row, col] = action;
    if !row.is_finite() || !col.is_finite() {
        return None;
    }
    let scale = GRID as f64;
    Some(((row * scale) as i64, (col * scale) as i64))
}

/// Battleship against a hidden random fleet.
pub struct BattleshipEnv<P = RandomPlacer> {
    config: EnvConfig,
    placer: P,
    rng: SmallRng,
    fleet: Fleet,
    board: VisibleBoard,
    steps: usize,
    done: bool,
}

impl BattleshipEnv<RandomPlacer> {
    /// Create an environment with a ready episode.
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        Self::with_placer(config, RandomPlacer::new(config.placement))
    }
}

impl<P: FleetPlacer> BattleshipEnv<P> {
    /// Create an environment whose fleets come from `placer`.
    pub fn with_placer(config: EnvConfig, placer: P) -> Result<Self, EnvError> {
        if let Err(e) = config.validate() {
            log::warn!("rejected environment config: {}", e);
            return Err(e);
        }
        let rng = make_rng(config.seed)?;
        let mut env = Self {
            config,
            placer,
            rng,
            fleet: Fleet::new(),
            board: VisibleBoard::new(),
            steps: 0,
            done: false,
        };
        env.reset();
        Ok(env)
    }

    /// Reseed the RNG and start a new episode.
    pub fn reset_with_seed(&mut self, seed: u64) -> Observation {
        self.rng = SmallRng::seed_from_u64(seed);
        self.config.seed = Some(seed);
        self.reset()
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Steps taken since the last reset.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether a terminal outcome has been emitted since the last reset.
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn board(&self) -> &VisibleBoard {
        &self.board
    }

    /// Sum of the hidden grid values. Reveals progress, not positions.
    pub fn hidden_sum(&self) -> i32 {
        self.fleet.sum()
    }

    pub fn observation(&self) -> Observation {
        self.board.observation()
    }
}

impl<P: FleetPlacer> Environment for BattleshipEnv<P> {
    type Action = Action;
    type Observation = Observation;

    fn reset(&mut self) -> Observation {
        self.steps = 0;
        self.done = false;
        self.fleet = self.placer.place_fleet(&mut self.rng);
        self.board.clear();
        log::debug!("episode reset, {} ship cells hidden", self.fleet.occupied());
        self.board.observation()
    }

    fn step(&mut self, action: Action) -> Step<Observation> {
        self.steps += 1;

        let outcome = if self.steps >= self.config.max_steps {
            Outcome::Timeout
        } else {
            match action_to_cell(action) {
                Some((row, col)) => resolve(&mut self.fleet, &mut self.board, row, col),
                None => Outcome::Invalid,
            }
        };

        let terminal = outcome.is_terminal();
        log::trace!("step {}: {:?} -> {}", self.steps, action, outcome);
        if terminal {
            self.done = true;
            log::debug!("episode over after {} steps: {}", self.steps, outcome);
        }

        Step {
            observation: self.board.observation(),
            reward: outcome.reward(),
            terminal,
            info: StepInfo {
                outcome,
                message: outcome.message(),
                steps: self.steps,
            },
        }
    }

    fn action_space(&self) -> BoxSpace {
        ACTION_SPACE
    }

    fn observation_space(&self) -> BoxSpace {
        OBSERVATION_SPACE
    }
}

fn make_rng(seed: Option<u64>) -> Result<SmallRng, EnvError> {
    match seed {
        Some(seed) => Ok(SmallRng::seed_from_u64(seed)),
        #[cfg(feature = "std")]
        None => Ok(SmallRng::from_rng(&mut rand::rng())),
        #[cfg(not(feature = "std"))]
        None => Err(EnvError::MissingSeed),
    }
}
