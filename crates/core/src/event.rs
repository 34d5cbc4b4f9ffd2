//! Events emitted by the session and the shell.
//!
//! Events are queued as they happen and drained by the host, which uses them
//! for the game-over notification and the optional JSON-lines event log.

use serde::Serialize;

use crate::types::PieceKind;

/// Lifecycle control that was applied by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    Start,
    Pause,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A new active piece entered the arena
    Spawned { kind: PieceKind, x: i32, y: i32 },
    /// The active piece locked at (x, y) and `rows_cleared` rows were swept
    Locked {
        kind: PieceKind,
        x: i32,
        y: i32,
        rows_cleared: u32,
    },
    /// A spawned piece did not fit; the session is over until reset
    GameOver { score: u32, pieces_locked: u32 },
    Lifecycle { control: Lifecycle },
}

impl SessionEvent {
    pub fn is_game_over(&self) -> bool {
        matches!(self, SessionEvent::GameOver { .. })
    }
}
