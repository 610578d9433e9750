//! Board file loading.
//!
//! Format: line 1 names the algorithm (`UR` | `PMCGS` | `UCT` | `HUMAN`),
//! line 2 the player to move (`R` | `Y`), and the following six lines give
//! the board as `R`/`Y`/`O` tokens, top row first. Anything after the
//! board rows is ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use connect4::{Board, ParseBoardError, ParsePlayerError, Player, ROWS};
use thiserror::Error;

/// Algorithm named on the first line of a board file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmTag {
    UniformRandom,
    FlatMonteCarlo,
    Uct,
    Human,
}

impl AlgorithmTag {
    /// Long name used in the run banner.
    pub fn description(self) -> &'static str {
        match self {
            AlgorithmTag::UniformRandom => "Uniform Random",
            AlgorithmTag::FlatMonteCarlo => "Pure Monte Carlo Game Search",
            AlgorithmTag::Uct => "Upper Confidence bound for Trees",
            AlgorithmTag::Human => "Human",
        }
    }

    /// The tag as written in board files.
    pub fn tag(self) -> &'static str {
        match self {
            AlgorithmTag::UniformRandom => "UR",
            AlgorithmTag::FlatMonteCarlo => "PMCGS",
            AlgorithmTag::Uct => "UCT",
            AlgorithmTag::Human => "HUMAN",
        }
    }
}

impl std::fmt::Display for AlgorithmTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// First line of the board file named no known algorithm.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown algorithm '{0}': expected UR, PMCGS, UCT, or HUMAN")]
pub struct UnknownAlgorithmError(pub String);

impl FromStr for AlgorithmTag {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UR" => Ok(AlgorithmTag::UniformRandom),
            "PMCGS" => Ok(AlgorithmTag::FlatMonteCarlo),
            "UCT" => Ok(AlgorithmTag::Uct),
            "HUMAN" => Ok(AlgorithmTag::Human),
            other => Err(UnknownAlgorithmError(other.to_string())),
        }
    }
}

/// A board file could not be read or parsed. Fatal for the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("board file is truncated: expected an algorithm line, a player line, and 6 board rows")]
    Truncated,

    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithmError),

    #[error(transparent)]
    BadPlayer(#[from] ParsePlayerError),

    #[error(transparent)]
    BadBoard(#[from] ParseBoardError),
}

/// Parsed contents of a board file.
#[derive(Debug, Clone)]
pub struct BoardFile {
    pub algorithm: AlgorithmTag,
    pub player: Player,
    pub board: Board,
}

/// Read and parse a board file from disk.
pub fn load_board_file(path: &Path) -> Result<BoardFile, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_board_file(&text)
}

/// Parse board-file text.
pub fn parse_board_file(text: &str) -> Result<BoardFile, LoadError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 2 + ROWS {
        return Err(LoadError::Truncated);
    }

    let algorithm: AlgorithmTag = lines[0].trim().parse()?;
    let player: Player = lines[1].trim().parse()?;
    let board: Board = lines[2..2 + ROWS].join("\n").parse()?;

    Ok(BoardFile {
        algorithm,
        player,
        board,
    })
}
