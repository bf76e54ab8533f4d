//! Player identification for two-player, zero-sum games.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. The first player (`X`) is `PlayerId(0)`
//! and maximises `evaluate()`. The second player (`O`) is `PlayerId(1)`
//! and minimises it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A seat index outside the two-player range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("player index {0} is not a seat in a two-player game")]
pub struct InvalidPlayer(pub u8);

/// Player identifier for a two-player game.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
/// Deserialisation only accepts `0` and `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(pub u8);

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayer;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 | 1 => Ok(Self(id)),
            _ => Err(InvalidPlayer(id)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl PlayerId {
    /// The player who moves first and maximises evaluation scores.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves second and minimises evaluation scores.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Only `0` and `1` are meaningful.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    ///
    /// ```
    /// use gametree::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    /// ```
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Whether this player maximises `GameState::evaluate`.
    #[inline]
    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        self.0 == 0
    }

    /// Board token for this player.
    #[must_use]
    pub const fn symbol(self) -> char {
        if self.0 == 0 {
            'X'
        } else {
            'O'
        }
    }

    /// Parse a board token back into a player.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Self::FIRST),
            'O' | 'o' => Some(Self::SECOND),
            _ => None,
        }
    }

    /// Both players in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.symbol())
    }
}
