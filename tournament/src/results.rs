//! Tournament results artifact.
//!
//! Results are serialized to JSON and written via a temp file plus rename,
//! so a concurrent reader never sees a partial artifact.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use connect4::Player;
use mcts::Strategy;
use serde::{Deserialize, Serialize};

/// Win/draw tally for one pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingResult {
    /// Label of the strategy playing Red, e.g. `PMCGS(500)`.
    pub red: String,
    /// Label of the strategy playing Yellow.
    pub yellow: String,
    pub red_wins: u32,
    pub yellow_wins: u32,
    pub draws: u32,
}

impl PairingResult {
    pub fn new(red: Strategy, yellow: Strategy) -> Self {
        Self {
            red: red.to_string(),
            yellow: yellow.to_string(),
            red_wins: 0,
            yellow_wins: 0,
            draws: 0,
        }
    }

    /// Tally one game result.
    pub fn record(&mut self, winner: Option<Player>) {
        match winner {
            Some(Player::Red) => self.red_wins += 1,
            Some(Player::Yellow) => self.yellow_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.red_wins + self.yellow_wins + self.draws
    }
}

/// The full round-robin record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentResults {
    pub games_per_pair: u32,
    pub pairings: Vec<PairingResult>,
}

impl TournamentResults {
    pub fn new(games_per_pair: u32) -> Self {
        Self {
            games_per_pair,
            pairings: Vec::new(),
        }
    }

    /// Write the artifact as pretty JSON (temp file, then rename).
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serializing results")?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("writing {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("renaming into {}", path.display()))?;

        Ok(())
    }
}
