//! Plain-text rendering of board snapshots.

use crate::game::{Board, Cell, GameState, Player};

/// Marker for an empty cell.
pub const EMPTY_MARKER: char = '.';

/// Render `board` one row per line, cells separated by `|`, each player shown
/// by its display marker.
pub fn render_board(board: &Board, players: &[Player]) -> String {
    (0..board.rows())
        .map(|row| {
            board
                .row(row)
                .map(|cell| marker(cell, players).to_string())
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render snapshot `index` of `state`'s history, if it exists.
pub fn render_snapshot(state: &GameState, index: usize) -> Option<String> {
    state
        .history()
        .get(index)
        .map(|board| render_board(board, state.players()))
}

/// Render the current board of `state`.
pub fn render_current(state: &GameState) -> String {
    render_board(state.board(), state.players())
}

fn marker(cell: Cell, players: &[Player]) -> char {
    match cell {
        Cell::Empty => EMPTY_MARKER,
        Cell::Occupied(id) => players
            .iter()
            .find(|player| player.id() == id)
            .map_or(EMPTY_MARKER, Player::display),
    }
}
