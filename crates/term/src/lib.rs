//! Terminal rendering for the arena.
//!
//! [`ArenaView`] draws a game into a [`FrameBuffer`] without touching the
//! terminal; [`TerminalRenderer`] flushes framebuffers with diffing.

pub mod fb;
pub mod renderer;
pub mod view;

pub use arena_tetris_core as core;
pub use arena_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{tag_color, ArenaView, Viewport, WellRect};
