//! Strategy identity and dispatch.
//!
//! The selection strategies form a closed set, carried as a tagged enum
//! with their parameters and dispatched through one exhaustive match.
//! Nothing keys behavior off strings.

use std::fmt;
use std::io::{self, Write};

use connect4::{Board, Player};
use rand_chacha::ChaCha20Rng;

use crate::report::Report;
use crate::select::{self, Decision};

/// A move-selection policy with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One legal move chosen uniformly at random.
    UniformRandom,
    /// Flat Monte Carlo averaging over one-ply expansions (PMCGS).
    FlatMonteCarlo { simulations: u32 },
    /// Single-level UCB1 ranking over the same expansions (UCT).
    Ucb { simulations: u32 },
}

impl Strategy {
    /// Decide a move for `player` on `board`.
    ///
    /// The board is only read; exploration happens on owned copies. A
    /// decision with `best: None` means the board has no legal moves and
    /// must be treated as a draw by the caller, not as a failure.
    pub fn select<W: Write>(
        self,
        board: &Board,
        player: Player,
        report: &mut Report<W>,
        rng: &mut ChaCha20Rng,
    ) -> io::Result<Decision> {
        match self {
            Strategy::UniformRandom => select::uniform_random(board, report, rng),
            Strategy::FlatMonteCarlo { simulations } => {
                select::flat_monte_carlo(board, player, simulations, report, rng)
            }
            Strategy::Ucb { simulations } => select::ucb(board, player, simulations, report, rng),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::UniformRandom => write!(f, "UR"),
            Strategy::FlatMonteCarlo { simulations } => write!(f, "PMCGS({simulations})"),
            Strategy::Ucb { simulations } => write!(f, "UCT({simulations})"),
        }
    }
}
