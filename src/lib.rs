//! # Connect Four rules
//!
//! A Connect Four rules engine meant to be driven by a game loop or polled by
//! a search algorithm: legal moves, gravity-drop placement, turn rotation,
//! win detection and a snapshot history of every position.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, state machine
//! - [`render`] — Plain-text board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ```
//! use connect_four_rules::game::{GameState, Player};
//!
//! let mut game = GameState::initial();
//! for column in [3, 0, 3, 0, 3, 0, 3] {
//!     game.play(Some(column)).unwrap();
//! }
//! assert_eq!(game.winner(), Some(&Player::a()));
//! assert!(game.legal_plays().is_empty());
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod render;
