//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// Exploration weight used while descending the tree (≈ √2).
pub const DEFAULT_EXPLORATION: f64 = 1.4;

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MctsConfig {
    /// Iterations per decision when the caller does not pass a count
    /// (used by `MctsAgent`).
    pub iterations: u32,

    /// UCT exploration constant used during selection (default: 1.4).
    /// Higher values favor exploration over exploitation.
    /// The final move is always picked with exploration 0.
    pub exploration_constant: f64,

    /// Random seed for simulation RNG.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration_constant: DEFAULT_EXPLORATION,
            seed: 42,
        }
    }
}

impl MctsConfig {
    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom iteration count.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.exploration_constant, 1.4);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_exploration(2.0)
            .with_seed(123)
            .with_iterations(50);

        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.seed, 123);
        assert_eq!(config.iterations, 50);
    }

    #[test]
    fn test_serialization() {
        let config = MctsConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MctsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
