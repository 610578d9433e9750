//! Random playout to a terminal outcome.

use connect4::{Board, Outcome, Player};
use rand::Rng;
use rand_chacha::ChaCha20Rng;

/// Play uniformly random moves on an owned board until the game resolves.
///
/// `to_move` plays first and turns alternate strictly. With no legal moves
/// the result is a draw; otherwise the outcome is detected from each placed
/// piece. Every iteration fills one empty cell, so the playout finishes
/// within the number of empty cells remaining.
pub fn random_rollout(mut board: Board, mut to_move: Player, rng: &mut ChaCha20Rng) -> Outcome {
    loop {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Outcome::Draw;
        }

        let column = moves[rng.gen_range(0..moves.len())];
        let placed = board
            .drop_piece(column, to_move)
            .expect("column drawn from legal_moves");

        if let Some(outcome) = board.outcome_after(placed) {
            return outcome;
        }
        to_move = to_move.opponent();
    }
}
