//! Per-column rollout statistics and ranking.

use connect4::Outcome;

/// Exploration constant for the UCB1 bonus.
pub const EXPLORATION: f64 = std::f64::consts::SQRT_2;

/// Cumulative rollout results for one column.
///
/// Created fresh for every decision and discarded with it; nothing is
/// carried across moves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColumnStats {
    /// Sum of outcome scores over rollouts seeded at this column.
    pub wins: f64,
    /// Number of rollouts seeded at this column.
    pub visits: u32,
}

impl ColumnStats {
    /// Fold one rollout outcome into the column.
    pub fn record(&mut self, outcome: Outcome) {
        self.visits += 1;
        self.wins += outcome.score();
    }

    /// Average outcome score, absent before the first visit.
    pub fn mean(&self) -> Option<f64> {
        (self.visits > 0).then(|| self.wins / self.visits as f64)
    }

    /// UCB1 score against the given total visit count.
    ///
    /// An unvisited column scores `+inf`; the final pick skips columns
    /// without data, so this only affects reported rankings.
    pub fn ucb1(&self, total_visits: u32) -> f64 {
        match self.mean() {
            None => f64::INFINITY,
            Some(mean) => {
                mean + EXPLORATION * ((total_visits as f64).ln() / self.visits as f64).sqrt()
            }
        }
    }
}

/// Index of the first maximum among the present values.
///
/// The ascending scan with a strict comparison resolves exact ties to the
/// smallest index, independent of any map or set iteration order.
pub fn argmax_first(values: &[Option<f64>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, value) in values.iter().enumerate() {
        if let Some(value) = *value {
            if best.map_or(true, |(_, b)| value > b) {
                best = Some((index, value));
            }
        }
    }
    best.map(|(index, _)| index)
}
