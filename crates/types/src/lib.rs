//! Shared types and constants.
//!
//! Everything here is plain data with no engine logic, so the core, the
//! terminal view and the input mapping can all depend on it.
//!
//! # Arena Dimensions
//!
//! The default well is 12 columns by 20 rows:
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! Both can be overridden at runtime through the game configuration; these
//! constants are the defaults.
//!
//! # Cell Tags
//!
//! A cell is a small integer tag. `0` is empty and `1..=7` identify one of the
//! seven piece kinds:
//!
//! | Tag | Kind | Color |
//! |-----|------|-------|
//! | 1 | I | cyan |
//! | 2 | J | blue |
//! | 3 | L | orange |
//! | 4 | O | yellow |
//! | 5 | S | green |
//! | 6 | T | purple |
//! | 7 | Z | red |
//!
//! # Examples
//!
//! ```
//! use arena_tetris_types::{PieceKind, ARENA_HEIGHT, ARENA_WIDTH, EMPTY};
//!
//! assert_eq!(PieceKind::T.tag(), 6);
//! assert_eq!(PieceKind::from_tag(6), Some(PieceKind::T));
//! assert_eq!(PieceKind::from_tag(EMPTY), None);
//!
//! assert_eq!(ARENA_WIDTH, 12);
//! assert_eq!(ARENA_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Default arena width in cells (12 columns)
pub const ARENA_WIDTH: usize = 12;

/// Default arena height in cells (20 rows)
pub const ARENA_HEIGHT: usize = 20;

/// Default gravity: one row per second
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Frame pacing of the host loop (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Tag value of an empty cell
pub const EMPTY: u8 = 0;

/// Highest tag value that may appear in a grid or piece matrix
pub const MAX_TAG: u8 = 7;

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in tag order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Cell tag written into the grid when this kind locks
    pub fn tag(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Map a cell tag back to its kind
    ///
    /// Returns `None` for the empty tag and anything above [`MAX_TAG`].
    ///
    /// ```
    /// use arena_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_tag(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_tag(0), None);
    /// assert_eq!(PieceKind::from_tag(8), None);
    /// ```
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1..=MAX_TAG => Some(Self::ALL[(tag - 1) as usize]),
            _ => None,
        }
    }
}

/// Commands the shell accepts from the input source.
///
/// The first four drive the falling piece; the rest are lifecycle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row, locking it if it cannot fall further
    SoftDrop,
    /// Rotate piece 90° clockwise with horizontal wall kicks
    Rotate,
    /// Arm the frame loop if it is not running
    Start,
    /// Stop the frame loop and freeze gravity
    Pause,
    /// Clear the arena and begin a new game
    Reset,
}
