//! Line detection on rectangular grids.

use crate::core::PlayerId;

/// Directions to scan from each cell: right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Does `player` own `win` consecutive cells in any row, column or diagonal?
///
/// `cells` is row-major with `rows * cols` entries.
pub(crate) fn has_line(
    cells: &[Option<PlayerId>],
    rows: usize,
    cols: usize,
    player: PlayerId,
    win: usize,
) -> bool {
    debug_assert_eq!(cells.len(), rows * cols);

    let owned = |r: isize, c: isize| {
        r >= 0
            && c >= 0
            && (r as usize) < rows
            && (c as usize) < cols
            && cells[r as usize * cols + c as usize] == Some(player)
    };

    for row in 0..rows as isize {
        for col in 0..cols as isize {
            if !owned(row, col) {
                continue;
            }
            for &(dr, dc) in &DIRECTIONS {
                if (1..win as isize).all(|step| owned(row + dr * step, col + dc * step)) {
                    return true;
                }
            }
        }
    }

    false
}
