//! Core Connect Four rules: board, players, win detection and the game state
//! machine that ties them together.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::{Player, PlayerId};
pub use state::{GameState, LastPlay};
pub use win::Line;
