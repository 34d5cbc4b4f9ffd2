//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: the arena grid, piece matrices,
//! rotation, collision, locking and row sweeping, plus the session and shell
//! that drive them. It has no dependencies on the terminal or any I/O.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size arena of locked cell tags
//! - [`piece`]: the seven tetromino matrices, positions and the active piece
//! - [`transform`]: in-place 90° rotation of square matrices
//! - [`collision`]: bounds and overlap test for a piece at a position
//! - [`lock`]: merging landed pieces and sweeping full rows
//! - [`controller`]: move, soft drop and rotate with rollback and wall kicks
//! - [`session`]: single owner of all mutable state; reset, spawn and tick
//! - [`frame`]: one-shot, re-armable frame requests
//! - [`shell`]: start, pause and reset controls over a session
//! - [`event`]: events drained by the host (game over, locks, lifecycle)
//! - [`config`]: environment-driven configuration
//! - [`rng`]: seedable uniform piece selection
//!
//! # Game Rules
//!
//! - Pieces are chosen uniformly at random, independently for every spawn
//! - A piece spawns at the top, horizontally centered
//! - Gravity moves the piece down one row each time the drop interval elapses
//! - A piece that cannot fall locks immediately; full rows are cleared
//! - Rotation tries sideways nudges of +1, -2, +3, ... before giving up
//! - The game ends when a newly spawned piece overlaps the stack
//!
//! # Example
//!
//! ```
//! use arena_tetris_core::{GameConfig, Session};
//! use arena_tetris_types::GameAction;
//!
//! let config = GameConfig {
//!     seed: Some(7),
//!     ..GameConfig::default()
//! };
//! let mut session = Session::new(&config);
//!
//! session.apply_action(GameAction::MoveLeft);
//! session.apply_action(GameAction::Rotate);
//! while session.pieces_locked() == 0 {
//!     session.apply_action(GameAction::SoftDrop);
//! }
//!
//! assert_eq!(session.grid().filled_count(), 4);
//! assert_eq!(session.active().pos.y, 0);
//! ```

pub mod collision;
pub mod config;
pub mod controller;
pub mod event;
pub mod frame;
pub mod grid;
pub mod lock;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shell;
pub mod transform;

pub use arena_tetris_types as types;

// Re-export commonly used types for convenience
pub use collision::collides;
pub use config::{ConfigError, GameConfig};
pub use controller::DropOutcome;
pub use event::{Lifecycle, SessionEvent};
pub use frame::{FrameHandle, FrameLoop};
pub use grid::{Grid, GridError};
pub use lock::{merge, sweep};
pub use piece::{spawn, ActivePiece, PieceError, PieceMatrix, Position};
pub use rng::PieceRandomizer;
pub use session::Session;
pub use shell::GameShell;
pub use transform::{rotate, rotate_back};
