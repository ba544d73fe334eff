//! Four-in-a-row detection around the most recent placement.
//!
//! Before a move there is no line of four on the board, so any line after it
//! must pass through the piece just placed. Only the four segments through
//! that cell are inspected.

use super::board::{Board, Cell};
use super::player::PlayerId;

/// Pieces in a row needed to win.
pub const CONNECT: usize = 4;

/// Orientation of a winning line, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Vertical,
    Horizontal,
    /// Bottom-left to top-right, `/`.
    DiagonalUp,
    /// Top-left to bottom-right, `\`.
    DiagonalDown,
}

impl Line {
    pub const ALL: [Line; 4] = [
        Line::Vertical,
        Line::Horizontal,
        Line::DiagonalUp,
        Line::DiagonalDown,
    ];
}

/// Return the first line through `(row, col)` holding `CONNECT` consecutive
/// pieces of `id`, or `None`.
pub fn find_line(board: &Board, row: usize, col: usize, id: PlayerId) -> Option<Line> {
    let target = Cell::Occupied(id);
    Line::ALL.into_iter().find(|&line| {
        segment(board, row, col, line)
            .windows(CONNECT)
            .any(|window| window.iter().all(|&cell| cell == target))
    })
}

/// Cells of the segment through `(row, col)` with the given orientation.
///
/// Vertical and horizontal segments extend `CONNECT - 1` cells each way
/// (clamped to the grid); diagonals run edge to edge.
fn segment(board: &Board, row: usize, col: usize, line: Line) -> Vec<Cell> {
    let reach = CONNECT - 1;
    match line {
        Line::Vertical => {
            let top = row.saturating_sub(reach);
            let bottom = (row + reach).min(board.rows() - 1);
            (top..=bottom).map(|r| board.get(r, col)).collect()
        }
        Line::Horizontal => {
            let left = col.saturating_sub(reach);
            let right = (col + reach).min(board.cols() - 1);
            (left..=right).map(|c| board.get(row, c)).collect()
        }
        Line::DiagonalUp => {
            // r + c is constant; start at the bottom-left end.
            let sum = row + col;
            let start_row = sum.min(board.rows() - 1);
            (0..=start_row)
                .rev()
                .map(|r| (r, sum - r))
                .take_while(|&(_, c)| c < board.cols())
                .map(|(r, c)| board.get(r, c))
                .collect()
        }
        Line::DiagonalDown => {
            let back = row.min(col);
            let (r0, c0) = (row - back, col - back);
            (0..)
                .map(|k| (r0 + k, c0 + k))
                .take_while(|&(r, c)| r < board.rows() && c < board.cols())
                .map(|(r, c)| board.get(r, c))
                .collect()
        }
    }
}
