//! Grid module - the arena of locked cells
//!
//! The grid is a fixed `width x height` matrix of cell tags stored as rows.
//! Coordinates: (x, y) where x grows to the right and y grows downward, so
//! row 0 is the top of the well.
//!
//! The grid has no public per-cell write API. Locked pieces are written by
//! [`crate::lock::merge`] and rows are removed by [`crate::lock::sweep`].

use std::fmt;

use crate::types::{EMPTY, MAX_TAG};

/// Errors from building a grid out of caller-supplied rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows with no cells
    Empty,
    /// Row `row` has `found` cells where `expected` were required
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell holds a value outside `0..=7`
    InvalidTag { x: usize, y: usize, tag: u8 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid must have at least one row and one column"),
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {} has {} cells, expected {}", row, found, expected),
            GridError::InvalidTag { x, y, tag } => {
                write!(f, "cell ({}, {}) has invalid tag {}", x, y, tag)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// The arena: rows of cell tags with fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    rows: Vec<Vec<u8>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![EMPTY; width]; height],
        }
    }

    /// Build a grid from explicit rows, validating shape and tags
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            if let Some(x) = row.iter().position(|&tag| tag > MAX_TAG) {
                return Err(GridError::InvalidTag { x, y, tag: row[x] });
            }
        }

        Ok(Self { width, rows })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Get the tag at (x, y), or `None` when either coordinate is off the grid
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows.get(y as usize)?.get(x as usize).copied()
    }

    /// Check if (x, y) is on the grid and empty
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    /// Check if every cell of row `y` is filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|&cell| cell != EMPTY))
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell != EMPTY).count())
            .sum()
    }

    /// Zero every cell without touching dimensions or allocations
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(EMPTY);
        }
    }

    /// Write a tag; returns false when (x, y) is off the grid
    pub(crate) fn set(&mut self, x: i32, y: i32, tag: u8) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        match self
            .rows
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            Some(cell) => {
                *cell = tag;
                true
            }
            None => false,
        }
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<u8>] {
        &mut self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(12, 20);
        assert_eq!(grid.width(), 12);
        assert_eq!(grid.height(), 20);
        assert_eq!(grid.filled_count(), 0);
        assert!(grid.rows().iter().all(|row| row.len() == 12));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(3, 2), Some(0));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_set_reports_bounds() {
        let mut grid = Grid::new(4, 3);
        assert!(grid.set(1, 2, 5));
        assert_eq!(grid.get(1, 2), Some(5));
        assert!(!grid.set(4, 0, 5));
        assert!(!grid.set(0, -1, 5));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = Grid::from_rows(vec![vec![0, 0, 0], vec![0, 0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_bad_tags() {
        let err = Grid::from_rows(vec![vec![0, 9]]).unwrap_err();
        assert_eq!(err, GridError::InvalidTag { x: 1, y: 0, tag: 9 });
        assert_eq!(Grid::from_rows(Vec::new()).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn test_row_full() {
        let grid = Grid::from_rows(vec![vec![0, 1, 1], vec![2, 3, 4]]).unwrap();
        assert!(!grid.is_row_full(0));
        assert!(grid.is_row_full(1));
        assert!(!grid.is_row_full(2));
    }
}
