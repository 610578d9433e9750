//! The three selection policies.
//!
//! All share the same shape: statistics live only for the call, every
//! explored line runs on an owned copy of the decision board, and the
//! final pick falls out of a deterministic ascending scan so exact ties go
//! to the smallest column index.

use std::io::{self, Write};

use connect4::{Board, Outcome, Player, COLS};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::report::Report;
use crate::rollout::random_rollout;
use crate::stats::{argmax_first, ColumnStats};

/// Result of one selection call.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Chosen column, or `None` when the board has no legal moves. Callers
    /// branch on `None` as a draw; it is not a failure.
    pub best: Option<usize>,
    /// Final per-column statistics. All zero for the uniform random
    /// strategy, which runs no rollouts.
    pub stats: [ColumnStats; COLS],
}

/// Pick one legal column uniformly at random.
pub fn uniform_random<W: Write>(
    board: &Board,
    report: &mut Report<W>,
    rng: &mut ChaCha20Rng,
) -> io::Result<Decision> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Ok(Decision {
            best: None,
            stats: Default::default(),
        });
    }

    let column = moves[rng.gen_range(0..moves.len())];
    trace!(column, "uniform random pick");
    report.final_move(column)?;
    Ok(Decision {
        best: Some(column),
        stats: Default::default(),
    })
}

/// Flat Monte Carlo: average rollout outcomes per first move, then take
/// the best ratio.
///
/// Each of `simulations` rounds seeds one rollout in every open column in
/// ascending order; full columns are skipped and stay ineligible for the
/// final decision, which is the highest `wins/visits` among columns with
/// data.
pub fn flat_monte_carlo<W: Write>(
    board: &Board,
    player: Player,
    simulations: u32,
    report: &mut Report<W>,
    rng: &mut ChaCha20Rng,
) -> io::Result<Decision> {
    let mut stats = [ColumnStats::default(); COLS];

    for round in 0..simulations {
        report.round_started(round)?;
        sweep(board, player, &mut stats, report, rng)?;
        report.round_finished()?;
    }

    let means: Vec<Option<f64>> = stats.iter().map(|s| s.mean()).collect();
    report.column_values(&means)?;

    // With zero rounds requested no column has data; fall back to the
    // first open column so an open board still yields a move.
    let best = argmax_first(&means).or_else(|| board.legal_moves().into_iter().next());
    if let Some(column) = best {
        report.final_move(column)?;
    }
    trace!(?best, "flat monte carlo decision");
    Ok(Decision { best, stats })
}

/// Single-level UCB: the same sweep and statistics as flat Monte Carlo,
/// with every column re-ranked by UCB1 after each round.
///
/// The sweep visits every open column in every round regardless of rank,
/// so only the final round's ranking determines the returned move and the
/// `+inf` score for unvisited columns never forces anything: a column
/// without data was full for the entire run and is excluded from the pick.
pub fn ucb<W: Write>(
    board: &Board,
    player: Player,
    simulations: u32,
    report: &mut Report<W>,
    rng: &mut ChaCha20Rng,
) -> io::Result<Decision> {
    let mut stats = [ColumnStats::default(); COLS];
    let mut scores: [Option<f64>; COLS] = [None; COLS];

    for round in 0..simulations {
        report.round_started(round)?;
        sweep(board, player, &mut stats, report, rng)?;
        report.round_finished()?;

        // Re-rank on the cumulative statistics after the round's sweep.
        let total: u32 = stats.iter().map(|s| s.visits).sum();
        for (column, s) in stats.iter().enumerate() {
            scores[column] = (s.visits > 0).then(|| s.ucb1(total));
        }
        trace!(round, ?scores, "ucb ranking");
    }

    report.column_values(&scores)?;

    let best = argmax_first(&scores).or_else(|| board.legal_moves().into_iter().next());
    if let Some(column) = best {
        report.final_move(column)?;
    }
    trace!(?best, "ucb decision");
    Ok(Decision { best, stats })
}

/// One seeded rollout for every open column, in ascending order.
fn sweep<W: Write>(
    board: &Board,
    player: Player,
    stats: &mut [ColumnStats; COLS],
    report: &mut Report<W>,
    rng: &mut ChaCha20Rng,
) -> io::Result<()> {
    for column in 0..COLS {
        if !board.is_legal(column) {
            report.column_unavailable(column)?;
            continue;
        }
        let outcome = seeded_rollout(board, column, player, rng);
        stats[column].record(outcome);
        report.column_updated(column, &stats[column])?;
    }
    Ok(())
}

/// Seed a rollout with `player` moving in `column`, then play out randomly
/// starting from the opponent. A seeding move that already ends the game
/// is the result.
fn seeded_rollout(board: &Board, column: usize, player: Player, rng: &mut ChaCha20Rng) -> Outcome {
    let mut scratch = board.clone();
    let placed = scratch
        .drop_piece(column, player)
        .expect("legality checked before seeding");
    match scratch.outcome_after(placed) {
        Some(outcome) => outcome,
        None => random_rollout(scratch, player.opponent(), rng),
    }
}
