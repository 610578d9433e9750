//! Self-play driver: whole games between two strategies.

use std::io;

use anyhow::Result;
use connect4::{Board, Outcome, Player};
use mcts::{Report, Strategy, Verbosity};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

/// Play one game from the empty board. Red moves first; `red` and
/// `yellow` pick that side's moves. Returns the winner, or `None` for a
/// draw.
pub fn play_game(
    red: Strategy,
    yellow: Strategy,
    rng: &mut ChaCha20Rng,
) -> Result<Option<Player>> {
    let mut board = Board::new();
    let mut to_move = Player::Red;

    loop {
        let strategy = match to_move {
            Player::Red => red,
            Player::Yellow => yellow,
        };

        let mut report = Report::new(io::sink(), Verbosity::Quiet);
        let decision = strategy.select(&board, to_move, &mut report, rng)?;

        // No move available: the board filled without a win.
        let Some(column) = decision.best else {
            return Ok(None);
        };

        let placed = board.drop_piece(column, to_move)?;
        match board.outcome_after(placed) {
            Some(Outcome::Win(player)) => {
                debug!(winner = %player, "game resolved");
                return Ok(Some(player));
            }
            Some(Outcome::Draw) => return Ok(None),
            None => to_move = to_move.opponent(),
        }
    }
}

/// Unordered pairings over the roster, self-pairings included: every
/// strategy meets every other (and itself) exactly once.
pub fn pairings(roster: &[Strategy]) -> Vec<(Strategy, Strategy)> {
    let mut out = Vec::new();
    for (i, &red) in roster.iter().enumerate() {
        for &yellow in &roster[i..] {
            out.push((red, yellow));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_play_game_terminates_with_a_result() {
        for seed in 0..10u64 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            // Uniform random on both sides finishes fast; the result only
            // needs to be well-formed.
            let result =
                play_game(Strategy::UniformRandom, Strategy::UniformRandom, &mut rng).unwrap();
            match result {
                Some(Player::Red) | Some(Player::Yellow) | None => {}
            }
        }
    }

    #[test]
    fn test_play_game_is_reproducible_for_a_fixed_seed() {
        let red = Strategy::FlatMonteCarlo { simulations: 3 };
        let yellow = Strategy::Ucb { simulations: 3 };

        let mut a = ChaCha20Rng::seed_from_u64(42);
        let mut b = ChaCha20Rng::seed_from_u64(42);
        assert_eq!(
            play_game(red, yellow, &mut a).unwrap(),
            play_game(red, yellow, &mut b).unwrap()
        );
    }

    #[test]
    fn test_pairings_cover_every_unordered_pair_once() {
        let roster = [
            Strategy::UniformRandom,
            Strategy::FlatMonteCarlo { simulations: 500 },
            Strategy::FlatMonteCarlo { simulations: 10000 },
            Strategy::Ucb { simulations: 500 },
            Strategy::Ucb { simulations: 10000 },
        ];
        let pairs = pairings(&roster);

        // n * (n + 1) / 2 pairings for n entries.
        assert_eq!(pairs.len(), 15);
        assert_eq!(pairs[0], (Strategy::UniformRandom, Strategy::UniformRandom));

        for (i, &(a, b)) in pairs.iter().enumerate() {
            // Self-pairings appear once; reversed duplicates never do.
            for &(c, d) in &pairs[i + 1..] {
                assert!(!(a == c && b == d));
                assert!(!(a == d && b == c));
            }
        }
    }
}
