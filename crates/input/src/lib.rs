//! Terminal input mapping.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key press
//! produces at most one discrete command; there is no auto-repeat handling
//! beyond what the terminal itself sends.

pub mod map;

pub use arena_tetris_types as types;

pub use map::{handle_key_event, should_quit};
