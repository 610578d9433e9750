//! Decision reporting in the legacy text format.
//!
//! All compatibility-critical text flows through [`Report`], so callers
//! decide the destination (stdout for the CLI, a buffer in tests, a sink
//! for self-play) and the verbosity in one place. Verbosity never changes
//! which move is chosen, only what gets written about it.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::stats::ColumnStats;

/// How much a selection run writes about its progress.
///
/// Variants are ordered: `Brief` includes everything `Quiet` writes, and
/// `Verbose` everything `Brief` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Only the final move line.
    Quiet,
    /// Final move plus the per-column summary values.
    Brief,
    /// Everything, including per-rollout statistics and round markers.
    Verbose,
}

/// Error parsing an output-mode word.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid output mode '{0}': expected None, Brief, or Verbose")]
pub struct ParseVerbosityError(pub String);

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Verbosity::Quiet),
            "Brief" => Ok(Verbosity::Brief),
            "Verbose" => Ok(Verbosity::Verbose),
            other => Err(ParseVerbosityError(other.to_string())),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Verbosity::Quiet => "None",
            Verbosity::Brief => "Brief",
            Verbosity::Verbose => "Verbose",
        };
        write!(f, "{word}")
    }
}

/// Writer for the selection text protocol.
pub struct Report<W> {
    out: W,
    verbosity: Verbosity,
}

impl<W: Write> Report<W> {
    pub fn new(out: W, verbosity: Verbosity) -> Self {
        Self { out, verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Header for one sweep over the columns.
    pub(crate) fn round_started(&mut self, round: u32) -> io::Result<()> {
        if self.verbosity >= Verbosity::Verbose {
            writeln!(self.out, "Simulation {}", round + 1)?;
        }
        Ok(())
    }

    /// A column skipped because it is full.
    pub(crate) fn column_unavailable(&mut self, column: usize) -> io::Result<()> {
        if self.verbosity >= Verbosity::Verbose {
            writeln!(self.out, "Column {}: Null (full column)", column + 1)?;
        }
        Ok(())
    }

    /// Running statistics after one seeded rollout.
    pub(crate) fn column_updated(&mut self, column: usize, stats: &ColumnStats) -> io::Result<()> {
        if self.verbosity >= Verbosity::Verbose {
            writeln!(
                self.out,
                "wi: {}\nni: {}\nMove selected: {}\n",
                stats.wins,
                stats.visits,
                column + 1
            )?;
        }
        Ok(())
    }

    /// Marker after a full sweep.
    pub(crate) fn round_finished(&mut self) -> io::Result<()> {
        if self.verbosity >= Verbosity::Verbose {
            writeln!(self.out, "NODE ADDED\n")?;
        }
        Ok(())
    }

    /// Final per-column values; `None` prints as `Null` for columns that
    /// never received data.
    pub(crate) fn column_values(&mut self, values: &[Option<f64>]) -> io::Result<()> {
        if self.verbosity >= Verbosity::Brief {
            for (column, value) in values.iter().enumerate() {
                match value {
                    Some(value) => writeln!(self.out, "Column {}: {:.2}", column + 1, value)?,
                    None => writeln!(self.out, "Column {}: Null", column + 1)?,
                }
            }
        }
        Ok(())
    }

    /// The decision line, printed at every verbosity (1-based for humans).
    pub(crate) fn final_move(&mut self, column: usize) -> io::Result<()> {
        writeln!(self.out, "FINAL Move selected: {}", column + 1)
    }
}
