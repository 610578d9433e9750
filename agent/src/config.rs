//! Configuration for the decision CLI.
//!
//! The three positional arguments mirror the legacy invocation
//! `<input_file> <output_mode> <simulations>`; the flags are additions
//! that default to the legacy behavior when omitted.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use mcts::{ParseVerbosityError, Verbosity};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::level_filters::LevelFilter;

fn parse_output_mode(s: &str) -> Result<Verbosity, ParseVerbosityError> {
    s.parse()
}

#[derive(Parser, Debug, Clone)]
#[command(name = "agent")]
#[command(about = "Connect Four move selection from a board file")]
#[command(long_about = "Reads a board file and prints the column selected by the requested
strategy.

The first line of the file names the algorithm (UR, PMCGS, UCT, or HUMAN),
the second the player to move (R or Y); the remaining six lines give the
board as R/Y/O tokens, top row first.")]
pub struct Config {
    /// Path to the board file
    pub input_file: PathBuf,

    /// Output verbosity: None, Brief, or Verbose
    #[arg(value_parser = parse_output_mode)]
    pub output_mode: Verbosity,

    /// Rollout rounds for PMCGS and UCT (ignored by UR)
    pub simulations: u32,

    /// Seed for the rollout RNG; drawn from entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.simulations == 0 {
            return Err(anyhow!("simulations must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// Rollout RNG, reproducible when a seed was given.
    pub fn rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }
}
