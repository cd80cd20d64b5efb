//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`Command`]s. A command either carries a
//! [`crate::types::Move`] for the next engine tick or asks the frontend
//! itself to pause, show the boss screen or quit.

pub mod map;

pub use tick_tetris_types as types;

pub use map::{handle_key_event, should_quit, Command};
