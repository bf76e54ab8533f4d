//! Concrete games implementing `GameState`.
//!
//! - `TicTacToe`: 3×3, small enough for minimax to solve exactly
//! - `Connect4`: 6×7 by default, needs a depth bound for minimax

pub mod connect4;
mod lines;
pub mod tictactoe;

use thiserror::Error;

use crate::core::PlayerId;

pub use connect4::Connect4;
pub use tictactoe::TicTacToe;

/// Magnitude of `evaluate()` for a won position.
///
/// Larger than any search depth so depth damping never flips a result.
pub const WIN_SCORE: i32 = 1000;

/// Malformed board text or an illegal move from outside the engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has no cells")]
    EmptyBoard,

    #[error("expected {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },

    #[error("row {row}: expected {expected} cells, got {got}")]
    RowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at row {row}, column {col}")]
    InvalidCell { character: char, row: usize, col: usize },

    #[error("stone at row {row}, column {col} has nothing below it")]
    FloatingStone { row: usize, col: usize },

    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("column {col} is out of range (board has {cols} columns)")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameOver,
}

/// Parse one board character: `X`, `O`, or `.`/`_`/space for empty.
pub(crate) fn parse_cell(ch: char, row: usize, col: usize) -> Result<Option<PlayerId>, BoardError> {
    match ch {
        '.' | '_' | ' ' => Ok(None),
        _ => PlayerId::from_symbol(ch)
            .map(Some)
            .ok_or(BoardError::InvalidCell {
                character: ch,
                row,
                col,
            }),
    }
}
