//! Piece module - tetromino shape matrices
//!
//! Every piece is stored as a small square matrix of cell tags so that it can
//! be rotated in place (see [`crate::transform`]). The I piece is padded to
//! 4x4 and the O piece is a bare 2x2; everything else is 3x3.

use std::fmt;

use crate::types::{PieceKind, EMPTY, MAX_TAG};

/// Largest side length of any piece matrix
pub const MAX_PIECE_SIZE: usize = 4;

/// Errors from building a piece matrix out of caller-supplied rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// Zero rows, or more than [`MAX_PIECE_SIZE`]
    Size(usize),
    /// Row `row` has `found` cells but the matrix has `expected` rows
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell holds a value outside `0..=7`
    InvalidTag { x: usize, y: usize, tag: u8 },
}

impl fmt::Display for PieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceError::Size(n) => {
                write!(f, "piece size {} is outside 1..={}", n, MAX_PIECE_SIZE)
            }
            PieceError::NotSquare {
                row,
                expected,
                found,
            } => write!(f, "row {} has {} cells, expected {}", row, found, expected),
            PieceError::InvalidTag { x, y, tag } => {
                write!(f, "cell ({}, {}) has invalid tag {}", x, y, tag)
            }
        }
    }
}

impl std::error::Error for PieceError {}

/// A square matrix of cell tags describing one piece's local shape.
///
/// Matrices are returned by value from [`spawn`], so two pieces never share
/// storage and rotating one cannot affect another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMatrix {
    size: usize,
    cells: [[u8; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
}

impl PieceMatrix {
    /// Build a matrix from square rows, validating size and tags
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, PieceError> {
        let size = rows.len();
        if size == 0 || size > MAX_PIECE_SIZE {
            return Err(PieceError::Size(size));
        }

        let mut cells = [[EMPTY; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(PieceError::NotSquare {
                    row: y,
                    expected: size,
                    found: row.len(),
                });
            }
            if let Some(x) = row.iter().position(|&tag| tag > MAX_TAG) {
                return Err(PieceError::InvalidTag { x, y, tag: row[x] });
            }
            cells[y][..size].copy_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    /// Fixed shapes; `N` is always 2, 3 or 4
    fn square<const N: usize>(rows: [[u8; N]; N]) -> Self {
        let mut cells = [[EMPTY; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        for (dst, src) in cells.iter_mut().zip(rows.iter()) {
            dst[..N].copy_from_slice(src);
        }
        Self { size: N, cells }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size
    }

    /// Width used for centering and the wall-kick bound (equal to `size`)
    pub fn width(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// Rows of the matrix, each `size` cells long
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells[..self.size].iter().map(move |row| &row[..self.size])
    }

    /// Non-empty cells as `(x, y, tag)` in local coordinates
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, tag)| **tag != EMPTY)
                .map(move |(x, &tag)| (x as i32, y as i32, tag))
        })
    }

    /// Number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [[u8; MAX_PIECE_SIZE]; MAX_PIECE_SIZE] {
        &mut self.cells
    }
}

/// Grid-relative offset of a piece matrix's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The falling piece: its kind, its own matrix and where it sits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub matrix: PieceMatrix,
    pub pos: Position,
}

impl ActivePiece {
    /// A fresh piece of `kind` at `pos`
    pub fn new(kind: PieceKind, pos: Position) -> Self {
        Self {
            kind,
            matrix: spawn(kind),
            pos,
        }
    }

    /// Filled cells in grid coordinates as `(x, y, tag)`
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.matrix
            .occupied()
            .map(move |(x, y, tag)| (self.pos.x + x, self.pos.y + y, tag))
    }
}

/// Produce a fresh matrix for `kind`
pub fn spawn(kind: PieceKind) -> PieceMatrix {
    let t = kind.tag();
    match kind {
        PieceKind::T => PieceMatrix::square([[0, 0, 0], [t, t, t], [0, t, 0]]),
        PieceKind::O => PieceMatrix::square([[t, t], [t, t]]),
        PieceKind::L => PieceMatrix::square([[0, t, 0], [0, t, 0], [0, t, t]]),
        PieceKind::J => PieceMatrix::square([[0, t, 0], [0, t, 0], [t, t, 0]]),
        PieceKind::I => PieceMatrix::square([
            [0, t, 0, 0],
            [0, t, 0, 0],
            [0, t, 0, 0],
            [0, t, 0, 0],
        ]),
        PieceKind::S => PieceMatrix::square([[0, t, t], [t, t, 0], [0, 0, 0]]),
        PieceKind::Z => PieceMatrix::square([[t, t, 0], [0, t, t], [0, 0, 0]]),
    }
}
