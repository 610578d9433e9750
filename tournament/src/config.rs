//! Configuration for the tournament runner.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use mcts::Strategy;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "tournament")]
#[command(about = "Round-robin self-play between the selection strategies")]
#[command(long_about = "Plays every unordered pairing of the strategy roster (uniform random,
flat Monte Carlo, and single-level UCB at two simulation budgets) for a
fixed number of games each, then writes a JSON results artifact.")]
pub struct Config {
    /// Games played for every pairing
    #[arg(long, default_value_t = 100)]
    pub games_per_pair: u32,

    /// Simulation budget for the cheaper PMCGS/UCT roster entries
    #[arg(long, default_value_t = 500)]
    pub low_simulations: u32,

    /// Simulation budget for the stronger PMCGS/UCT roster entries
    #[arg(long, default_value_t = 10000)]
    pub high_simulations: u32,

    /// Where to write the JSON results artifact
    #[arg(long, default_value = "tournament_results.json")]
    pub output: PathBuf,

    /// Seed for the rollout RNG; drawn from entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.games_per_pair == 0 {
            return Err(anyhow!("games_per_pair must be greater than 0"));
        }

        if self.low_simulations == 0 || self.high_simulations == 0 {
            return Err(anyhow!("simulation budgets must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// The strategies entered in the round-robin.
    pub fn roster(&self) -> Vec<Strategy> {
        vec![
            Strategy::UniformRandom,
            Strategy::FlatMonteCarlo {
                simulations: self.low_simulations,
            },
            Strategy::FlatMonteCarlo {
                simulations: self.high_simulations,
            },
            Strategy::Ucb {
                simulations: self.low_simulations,
            },
            Strategy::Ucb {
                simulations: self.high_simulations,
            },
        ]
    }

    /// Rollout RNG, reproducible when a seed was given.
    pub fn rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }
}
