//! Record of a finished match.
//!
//! Records are plain serde structs; `to_bytes`/`from_bytes` use bincode for
//! compact storage of many games.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameOutcome, GameState, PlayerId};

/// Failure to store, load or replay a match record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// bincode could not encode or decode the record.
    #[error("match record codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// A recorded move is not legal in the replayed position.
    #[error("move {ply} is not legal in the replayed position")]
    IllegalMove { ply: usize },

    /// Replay ended on a position whose winner differs from the record.
    #[error("replay ended with winner {replayed:?}, record says {recorded:?}")]
    WinnerMismatch {
        recorded: Option<PlayerId>,
        replayed: Option<PlayerId>,
    },
}

/// A complete game played by two agents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord<M> {
    /// Agent names, indexed by seat (`PlayerId::index()`).
    pub agents: [String; 2],

    /// Moves in the order they were played.
    pub moves: Vec<M>,

    /// Winner, `None` for a draw.
    pub winner: Option<PlayerId>,

    /// Number of moves played.
    pub plies: usize,
}

impl<M> MatchRecord<M> {
    /// Final result of the match.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.winner.map_or(GameOutcome::Draw, GameOutcome::Winner)
    }

    /// Name of the agent that won, if any.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.winner
            .and_then(|p| self.agents.get(p.index()))
            .map(String::as_str)
    }
}

impl<M: Serialize + DeserializeOwned> MatchRecord<M> {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a record produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl<M: PartialEq> MatchRecord<M> {
    /// Play the recorded moves from `initial` and return the final position.
    ///
    /// Checks every move against `valid_moves()` and the final winner
    /// against the record.
    pub fn replay<S>(&self, initial: S) -> Result<S, RecordError>
    where
        S: GameState<Move = M>,
    {
        let mut state = initial;
        for (ply, mv) in self.moves.iter().enumerate() {
            if !state.valid_moves().contains(mv) {
                return Err(RecordError::IllegalMove { ply });
            }
            state.apply(mv);
        }

        let replayed = state.winner();
        if replayed != self.winner {
            return Err(RecordError::WinnerMismatch {
                recorded: self.winner,
                replayed,
            });
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::TicTacToe;

    fn x_top_row() -> MatchRecord<(usize, usize)> {
        MatchRecord {
            agents: ["minimax".to_string(), "random".to_string()],
            moves: vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
            winner: Some(PlayerId::FIRST),
            plies: 5,
        }
    }

    #[test]
    fn test_outcome_and_winner_name() {
        let record = x_top_row();
        assert_eq!(record.outcome(), GameOutcome::Winner(PlayerId::FIRST));
        assert_eq!(record.winner_name(), Some("minimax"));

        let draw = MatchRecord::<u8> {
            agents: ["a".to_string(), "b".to_string()],
            moves: Vec::new(),
            winner: None,
            plies: 0,
        };
        assert_eq!(draw.outcome(), GameOutcome::Draw);
        assert_eq!(draw.winner_name(), None);
    }

    #[test]
    fn test_bytes_round_trip() {
        let record = x_top_row();
        let bytes = record.to_bytes().unwrap();
        let decoded = MatchRecord::<(usize, usize)>::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let bytes = x_top_row().to_bytes().unwrap();
        let err = MatchRecord::<(usize, usize)>::from_bytes(&bytes[..bytes.len() / 2]);
        assert!(matches!(err, Err(RecordError::Codec(_))));
    }

    #[test]
    fn test_out_of_range_winner_fails_to_decode() {
        let mut record = x_top_row();
        record.winner = Some(PlayerId(2));
        let bytes = record.to_bytes().unwrap();

        let decoded = MatchRecord::<(usize, usize)>::from_bytes(&bytes);

        assert!(matches!(decoded, Err(RecordError::Codec(_))));
        assert_eq!(record.winner_name(), None);
    }

    #[test]
    fn test_replay() {
        let final_state = x_top_row().replay(TicTacToe::new()).unwrap();
        assert_eq!(final_state.winner(), Some(PlayerId::FIRST));
    }

    #[test]
    fn test_replay_rejects_bad_records() {
        let mut occupied = x_top_row();
        occupied.moves[1] = (0, 0);
        assert!(matches!(
            occupied.replay(TicTacToe::new()),
            Err(RecordError::IllegalMove { ply: 1 })
        ));

        let mut wrong_winner = x_top_row();
        wrong_winner.winner = Some(PlayerId::SECOND);
        assert!(matches!(
            wrong_winner.replay(TicTacToe::new()),
            Err(RecordError::WinnerMismatch { .. })
        ));
    }
}
