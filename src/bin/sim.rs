use battleship_env::{
    init_logging, init_logging_with, BattleshipEnv, EnvConfig, Environment, Outcome,
    PlacementStrategy, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_STEPS,
};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Placement {
    Rejection,
    Bounded,
}

/// Play one episode with actions sampled uniformly from the action space and
/// print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible episodes (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,
    #[arg(long, value_enum, default_value_t = Placement::Rejection)]
    placement: Placement,
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
    /// Log every step to stderr.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        init_logging_with(LevelFilter::Trace);
    } else {
        init_logging();
    }

    let placement = match cli.placement {
        Placement::Rejection => PlacementStrategy::Rejection,
        Placement::Bounded => PlacementStrategy::Bounded {
            max_attempts: cli.max_attempts,
        },
    };
    let mut config = EnvConfig::default()
        .with_max_steps(cli.max_steps)
        .with_placement(placement);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut env = BattleshipEnv::new(config)?;
    let mut agent_rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    env.reset();
    let space = env.action_space();
    let (mut hits, mut misses, mut invalid, mut sunk) = (0usize, 0usize, 0usize, 0usize);
    let mut total_reward = 0.0;
    let last = loop {
        let step = env.step(space.sample(&mut agent_rng));
        total_reward += step.reward;
        match step.info.outcome {
            Outcome::Hit => hits += 1,
            Outcome::Sunk { .. } | Outcome::Win => {
                hits += 1;
                sunk += 1;
            }
            Outcome::Miss => misses += 1,
            Outcome::Invalid => invalid += 1,
            Outcome::Timeout => {}
        }
        if step.terminal {
            break step;
        }
    };

    let result = json!({
        "steps": env.steps(),
        "total_reward": total_reward,
        "outcome": last.info.message,
        "hits": hits,
        "misses": misses,
        "invalid": invalid,
        "sunk": sunk,
        "sunk_cells": env.board().sunk().count_ones(),
        "pending_cells": env.board().pending().count_ones(),
        "miss_cells": env.board().misses().count_ones(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
