//! Tic-Tac-Toe on a 3×3 board.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::has_line;
use super::{parse_cell, BoardError, WIN_SCORE};
use crate::core::{GameState, PlayerId};

/// Board side length.
pub const SIZE: usize = 3;

/// A move: `(row, col)` of the cell to claim.
pub type Square = (usize, usize);

/// Tic-Tac-Toe position plus the player to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: [Option<PlayerId>; SIZE * SIZE],
    to_move: PlayerId,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, `X` to move.
    pub fn new() -> Self {
        Self {
            cells: [None; SIZE * SIZE],
            to_move: PlayerId::FIRST,
        }
    }

    /// Parse a board from three rows of `X`, `O` and `.` (or space).
    ///
    /// ```
    /// use gametree::core::{GameState, PlayerId};
    /// use gametree::games::TicTacToe;
    ///
    /// let board = TicTacToe::from_rows(&["XX.", "OO.", "..."], PlayerId::FIRST).unwrap();
    /// assert_eq!(board.valid_moves().len(), 5);
    /// ```
    pub fn from_rows(rows: &[&str], to_move: PlayerId) -> Result<Self, BoardError> {
        if rows.len() != SIZE {
            return Err(BoardError::RowCount {
                expected: SIZE,
                got: rows.len(),
            });
        }

        let mut cells = [None; SIZE * SIZE];
        for (r, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != SIZE {
                return Err(BoardError::RowLength {
                    row: r,
                    expected: SIZE,
                    got: chars.len(),
                });
            }
            for (c, &ch) in chars.iter().enumerate() {
                cells[r * SIZE + c] = parse_cell(ch, r, c)?;
            }
        }

        Ok(Self { cells, to_move })
    }

    /// Occupant of a cell.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.cells[row * SIZE + col]
    }

    /// Validate and apply a move, as a human player's input would be.
    pub fn play(&mut self, square: Square) -> Result<(), BoardError> {
        let (row, col) = square;
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if self.is_terminal() {
            return Err(BoardError::GameOver);
        }
        if self.cell(row, col).is_some() {
            return Err(BoardError::Occupied { row, col });
        }
        self.apply(&square);
        Ok(())
    }

    fn has_won(&self, player: PlayerId) -> bool {
        has_line(&self.cells, SIZE, SIZE, player, SIZE)
    }
}

impl GameState for TicTacToe {
    type Move = Square;

    fn valid_moves(&self) -> Vec<Square> {
        if self.winner().is_some() {
            return Vec::new();
        }
        (0..SIZE * SIZE)
            .filter(|&i| self.cells[i].is_none())
            .map(|i| (i / SIZE, i % SIZE))
            .collect()
    }

    fn apply(&mut self, &(row, col): &Square) {
        let idx = row * SIZE + col;
        debug_assert!(self.cells[idx].is_none(), "cell ({row}, {col}) is occupied");
        self.cells[idx] = Some(self.to_move);
        self.to_move = self.to_move.opponent();
    }

    fn undo(&mut self, &(row, col): &Square) {
        let idx = row * SIZE + col;
        debug_assert_eq!(self.cells[idx], Some(self.to_move.opponent()));
        self.cells[idx] = None;
        self.to_move = self.to_move.opponent();
    }

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn winner(&self) -> Option<PlayerId> {
        PlayerId::both().find(|&p| self.has_won(p))
    }

    fn evaluate(&self) -> i32 {
        match self.winner() {
            Some(PlayerId::FIRST) => WIN_SCORE,
            Some(_) => -WIN_SCORE,
            None => 0,
        }
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.cells.iter().all(Option::is_some)
    }
}

impl fmt::Display for TicTacToe {
    /// ```text
    ///  --- --- ---
    /// | X | O |   |
    ///  --- --- ---
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = " ---".repeat(SIZE);
        writeln!(f, "{separator}")?;
        for row in 0..SIZE {
            for col in 0..SIZE {
                let symbol = self.cell(row, col).map_or(' ', PlayerId::symbol);
                write!(f, "| {symbol} ")?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = TicTacToe::new();
        assert_eq!(board.current_player(), PlayerId::FIRST);
        assert_eq!(board.valid_moves().len(), 9);
        assert_eq!(board.valid_moves()[0], (0, 0));
        assert_eq!(board.valid_moves()[8], (2, 2));
        assert!(!board.is_terminal());
        assert_eq!(board.evaluate(), 0);
    }

    #[test]
    fn test_apply_and_undo() {
        let mut board = TicTacToe::new();
        let original = board.clone();

        board.apply(&(1, 1));
        assert_eq!(board.cell(1, 1), Some(PlayerId::FIRST));
        assert_eq!(board.current_player(), PlayerId::SECOND);
        assert_eq!(board.valid_moves().len(), 8);

        board.undo(&(1, 1));
        assert_eq!(board, original);
    }

    #[test]
    fn test_row_win() {
        let board = TicTacToe::from_rows(&["XXX", "OO.", "..."], PlayerId::SECOND).unwrap();
        assert_eq!(board.winner(), Some(PlayerId::FIRST));
        assert_eq!(board.evaluate(), WIN_SCORE);
        assert!(board.is_terminal());
        assert!(board.valid_moves().is_empty());
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = TicTacToe::from_rows(&["X.O", "XO.", "O.X"], PlayerId::FIRST).unwrap();
        assert_eq!(board.winner(), Some(PlayerId::SECOND));
        assert_eq!(board.evaluate(), -WIN_SCORE);
    }

    #[test]
    fn test_draw() {
        let board = TicTacToe::from_rows(&["XOX", "XOO", "OXX"], PlayerId::SECOND).unwrap();
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
        assert_eq!(board.evaluate(), 0);
        assert_eq!(board.outcome(), Some(crate::core::GameOutcome::Draw));
    }

    #[test]
    fn test_play_validation() {
        let mut board = TicTacToe::new();
        assert_eq!(board.play((3, 0)), Err(BoardError::OutOfBounds { row: 3, col: 0 }));
        board.play((0, 0)).unwrap();
        assert_eq!(board.play((0, 0)), Err(BoardError::Occupied { row: 0, col: 0 }));

        let mut won = TicTacToe::from_rows(&["XXX", "OO.", "..."], PlayerId::SECOND).unwrap();
        assert_eq!(won.play((2, 2)), Err(BoardError::GameOver));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            TicTacToe::from_rows(&["XXX", "OO."], PlayerId::FIRST),
            Err(BoardError::RowCount { expected: 3, got: 2 })
        );
        assert_eq!(
            TicTacToe::from_rows(&["XXX", "OO", "..."], PlayerId::FIRST),
            Err(BoardError::RowLength { row: 1, expected: 3, got: 2 })
        );
        assert_eq!(
            TicTacToe::from_rows(&["XXX", "OO.", "..Z"], PlayerId::FIRST),
            Err(BoardError::InvalidCell { character: 'Z', row: 2, col: 2 })
        );
    }

    #[test]
    fn test_display() {
        let board = TicTacToe::from_rows(&["X..", ".O.", "..."], PlayerId::FIRST).unwrap();
        let rendered = board.to_string();
        assert!(rendered.starts_with(" --- --- ---\n| X |   |   |\n"));
        assert!(rendered.contains("|   | O |   |"));
    }

    #[test]
    fn test_serialization() {
        let board = TicTacToe::from_rows(&["X..", ".O.", "..X"], PlayerId::SECOND).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: TicTacToe = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
