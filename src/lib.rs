//! Arena Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the JSON-lines
//! event log used by the default binary.

pub mod event_log;

pub use arena_tetris_core as core;
pub use arena_tetris_input as input;
pub use arena_tetris_term as term;
pub use arena_tetris_types as types;

pub use event_log::EventLog;
