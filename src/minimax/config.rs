//! Minimax configuration parameters.

use serde::{Deserialize, Serialize};

/// Minimax configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Maximum search depth in plies (`None` = search to true terminal states).
    /// Unbounded search is only tractable for small games like Tic-Tac-Toe.
    pub depth_max: Option<u32>,
}

impl MinimaxConfig {
    /// Search every line to the end of the game.
    pub fn unbounded() -> Self {
        Self { depth_max: None }
    }

    /// Create a new config with a depth bound.
    pub fn with_depth_max(mut self, depth: u32) -> Self {
        self.depth_max = Some(depth);
        self
    }

    /// Whether `depth` is at (or past) the configured bound.
    #[inline]
    #[must_use]
    pub fn is_depth_limit(&self, depth: u32) -> bool {
        self.depth_max.is_some_and(|max| depth >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = MinimaxConfig::default();
        assert_eq!(config, MinimaxConfig::unbounded());
        assert!(!config.is_depth_limit(1_000));
    }

    #[test]
    fn test_depth_limit() {
        let config = MinimaxConfig::unbounded().with_depth_max(5);
        assert!(!config.is_depth_limit(4));
        assert!(config.is_depth_limit(5));
    }

    #[test]
    fn test_serialization() {
        let config = MinimaxConfig::default().with_depth_max(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MinimaxConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
