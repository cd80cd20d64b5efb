//! Terminal rendering for the game.
//!
//! Drawing happens in two steps: [`GameView`] paints a game into an
//! off-screen [`Canvas`], then [`TerminalRenderer`] sends that canvas to the
//! terminal with crossterm. Only the second step does I/O.

pub mod canvas;
pub mod renderer;
pub mod view;

pub use tick_tetris_core as core;
pub use tick_tetris_types as types;

pub use canvas::{Canvas, Glyph, Style};
pub use renderer::{encode_changes, encode_full, TerminalRenderer};
pub use view::{kind_color, GameView, Screen, Viewport, CELL_WIDTH};
