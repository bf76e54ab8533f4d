//! Connect Four on a configurable grid (default 6 rows × 7 columns, four in a row).
//!
//! Row 0 is the top of the board; stones fall to the lowest free row of
//! their column. A move is a column index.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::has_line;
use super::{parse_cell, BoardError, WIN_SCORE};
use crate::core::{GameState, PlayerId};

/// Default number of rows.
pub const ROWS: usize = 6;

/// Default number of columns.
pub const COLS: usize = 7;

/// Default winning line length.
pub const WIN: usize = 4;

/// Connect Four position plus the player to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connect4 {
    rows: usize,
    cols: usize,
    win: usize,
    cells: Vec<Option<PlayerId>>,
    /// Stones per column.
    heights: Vec<usize>,
    to_move: PlayerId,
}

impl Default for Connect4 {
    fn default() -> Self {
        Self::new()
    }
}

impl Connect4 {
    /// Empty 6×7 board, `X` to move.
    pub fn new() -> Self {
        Self::with_dimensions(ROWS, COLS, WIN)
    }

    /// Empty board of arbitrary size.
    ///
    /// Dimensions below one are raised to one.
    pub fn with_dimensions(rows: usize, cols: usize, win: usize) -> Self {
        let (rows, cols) = (rows.max(1), cols.max(1));
        Self {
            rows,
            cols,
            win,
            cells: vec![None; rows * cols],
            heights: vec![0; cols],
            to_move: PlayerId::FIRST,
        }
    }

    /// Parse a 6×7 board given top row first.
    ///
    /// ```
    /// use gametree::core::{GameState, PlayerId};
    /// use gametree::games::Connect4;
    ///
    /// let board = Connect4::from_rows(
    ///     &[
    ///         ".......",
    ///         ".......",
    ///         ".......",
    ///         ".......",
    ///         "OOO....",
    ///         "XXX....",
    ///     ],
    ///     PlayerId::FIRST,
    /// )
    /// .unwrap();
    /// assert_eq!(board.lowest_free_row(0), Some(3));
    /// ```
    pub fn from_rows(rows: &[&str], to_move: PlayerId) -> Result<Self, BoardError> {
        if rows.len() != ROWS {
            return Err(BoardError::RowCount {
                expected: ROWS,
                got: rows.len(),
            });
        }
        for (r, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != COLS {
                return Err(BoardError::RowLength {
                    row: r,
                    expected: COLS,
                    got,
                });
            }
        }
        Self::from_rows_with_win(rows, WIN, to_move)
    }

    /// Parse a board of any size given top row first.
    pub fn from_rows_with_win(
        rows: &[&str],
        win: usize,
        to_move: PlayerId,
    ) -> Result<Self, BoardError> {
        let grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        let row_count = grid.len();
        let col_count = grid.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(BoardError::EmptyBoard);
        }

        let mut board = Self::with_dimensions(row_count, col_count, win);
        board.to_move = to_move;

        for (r, line) in grid.iter().enumerate() {
            if line.len() != col_count {
                return Err(BoardError::RowLength {
                    row: r,
                    expected: col_count,
                    got: line.len(),
                });
            }
            for (c, &ch) in line.iter().enumerate() {
                board.cells[r * col_count + c] = parse_cell(ch, r, c)?;
            }
        }

        for col in 0..col_count {
            let height = (0..row_count)
                .rev()
                .take_while(|&r| board.cells[r * col_count + col].is_some())
                .count();
            // Everything above the stack must be empty.
            if let Some(r) = (0..row_count - height).find(|&r| board.cells[r * col_count + col].is_some()) {
                return Err(BoardError::FloatingStone { row: r, col });
            }
            board.heights[col] = height;
        }

        Ok(board)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Occupant of a cell (row 0 is the top).
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.cells[row * self.cols + col]
    }

    /// The row a stone dropped into `col` would land in, or `None` if the column is full.
    #[must_use]
    pub fn lowest_free_row(&self, col: usize) -> Option<usize> {
        let height = self.heights[col];
        (height < self.rows).then(|| self.rows - 1 - height)
    }

    /// Validate and apply a move, as a human player's input would be.
    pub fn play(&mut self, col: usize) -> Result<(), BoardError> {
        if col >= self.cols {
            return Err(BoardError::ColumnOutOfRange {
                col,
                cols: self.cols,
            });
        }
        if self.is_terminal() {
            return Err(BoardError::GameOver);
        }
        if self.lowest_free_row(col).is_none() {
            return Err(BoardError::ColumnFull(col));
        }
        self.apply(&col);
        Ok(())
    }

    fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == self.rows)
    }

    fn has_won(&self, player: PlayerId) -> bool {
        has_line(&self.cells, self.rows, self.cols, player, self.win)
    }
}

impl GameState for Connect4 {
    type Move = usize;

    fn valid_moves(&self) -> Vec<usize> {
        if self.winner().is_some() {
            return Vec::new();
        }
        (0..self.cols).filter(|&c| self.heights[c] < self.rows).collect()
    }

    fn apply(&mut self, &col: &usize) {
        debug_assert!(self.heights[col] < self.rows, "column {col} is full");
        let row = self.rows - 1 - self.heights[col];
        self.cells[row * self.cols + col] = Some(self.to_move);
        self.heights[col] += 1;
        self.to_move = self.to_move.opponent();
    }

    fn undo(&mut self, &col: &usize) {
        debug_assert!(self.heights[col] > 0, "column {col} is empty");
        self.heights[col] -= 1;
        let row = self.rows - 1 - self.heights[col];
        self.cells[row * self.cols + col] = None;
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
        self.winner().is_some() || self.is_full()
    }
}

impl fmt::Display for Connect4 {
    /// ```text
    /// |=============|
    /// |             |
    /// |    X X      |
    /// |  O X O O    |
    /// |=============|
    /// |0 1 2 3 4 5 6|
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "=".repeat((self.cols * 2).saturating_sub(1));
        writeln!(f, "|{border}|")?;
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| self.cell(row, col).map_or(' ', PlayerId::symbol).to_string())
                .collect();
            writeln!(f, "|{}|", line.join(" "))?;
        }
        writeln!(f, "|{border}|")?;
        let labels: Vec<String> = (0..self.cols).map(|c| (c % 10).to_string()).collect();
        writeln!(f, "|{}|", labels.join(" "))
    }
}
