//! Monte Carlo move selection for Connect Four.
//!
//! Three strategies decide the next move for a player on a
//! [`connect4::Board`]:
//!
//! 1. **Uniform random**: one legal column, uniformly at random.
//! 2. **Flat Monte Carlo (PMCGS)**: every open column is expanded once per
//!    round and scored by random rollouts; the highest win ratio is chosen.
//! 3. **Single-level UCB (UCT)**: the same expansion and statistics, with
//!    every column re-ranked by the UCB1 formula after each round.
//!
//! Both rollout-based strategies expand exactly one ply: each open column
//! receives one seeded rollout per round, and no search tree is built below
//! that or kept across decisions.
//!
//! A property worth stating explicitly: the UCB variant sweeps *every* open
//! column in *every* round, so its per-round ranking never defers a visit to
//! an eligible column, and the `+inf` score for unvisited columns is
//! reachable only for columns that are full for the entire run. The ranking
//! therefore influences nothing but the final pick. This is a deliberate
//! departure from adaptive UCT, preserved here rather than fixed; deeper,
//! adaptive tree search is out of scope.
//!
//! Randomness always comes from an explicit [`rand_chacha::ChaCha20Rng`]
//! handle, so a fixed seed reproduces a decision exactly: statistics,
//! report text, and the chosen column.
//!
//! # Usage
//!
//! ```rust
//! use connect4::{Board, Player};
//! use mcts::{Report, Strategy, Verbosity};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let board = Board::new();
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let mut report = Report::new(std::io::sink(), Verbosity::Quiet);
//! let decision = Strategy::FlatMonteCarlo { simulations: 10 }
//!     .select(&board, Player::Yellow, &mut report, &mut rng)
//!     .unwrap();
//! assert!(decision.best.is_some());
//! ```

pub mod report;
pub mod rollout;
pub mod select;
pub mod stats;
pub mod strategy;

// Re-export main types
pub use report::{ParseVerbosityError, Report, Verbosity};
pub use rollout::random_rollout;
pub use select::{flat_monte_carlo, ucb, uniform_random, Decision};
pub use stats::{argmax_first, ColumnStats, EXPLORATION};
pub use strategy::Strategy;
