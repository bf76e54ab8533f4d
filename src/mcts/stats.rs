//! Per-search counters.

use serde::{Deserialize, Serialize};

/// Counters collected while one `MctsSearch::analyze` call runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Completed select/expand/simulate/backpropagate cycles.
    pub iterations: u32,

    /// Children attached to the tree.
    pub nodes_expanded: u32,

    /// Playouts run (one per iteration).
    pub simulations: u32,

    /// Iterations whose selection stopped on a finished position.
    pub terminal_hits: u32,

    /// Deepest node a playout started from.
    pub max_depth: u16,

    /// Wall-clock time of the call (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Count a playout started `depth` plies below the root.
    pub fn record_playout(&mut self, depth: u16) {
        self.simulations += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Fraction of iterations that grew the tree.
    ///
    /// Drops below 1 once selection starts landing on finished positions.
    #[must_use]
    pub fn expansion_ratio(&self) -> f64 {
        match self.iterations {
            0 => 0.0,
            n => self.nodes_expanded as f64 / n as f64,
        }
    }

    /// Throughput of the call.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        match self.time_us {
            0 => 0.0,
            us => self.iterations as f64 * 1e6 / us as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = SearchStats::default();
        assert_eq!(stats.expansion_ratio(), 0.0);
        assert_eq!(stats.iterations_per_second(), 0.0);
    }

    #[test]
    fn test_record_playout_tracks_depth() {
        let mut stats = SearchStats::default();
        stats.record_playout(3);
        stats.record_playout(1);

        assert_eq!(stats.simulations, 2);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_ratios() {
        let stats = SearchStats {
            iterations: 200,
            nodes_expanded: 150,
            time_us: 500_000,
            ..SearchStats::default()
        };

        assert_eq!(stats.expansion_ratio(), 0.75);
        assert_eq!(stats.iterations_per_second(), 400.0);
    }
}
