//! Lock module - merging landed pieces and sweeping full rows
//!
//! These are the only functions that write into a [`Grid`] after it is built.

use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::types::EMPTY;

/// Write every filled cell of `piece` into the grid.
///
/// Callers only merge a piece at a position that already passed the collision
/// test, so every write is in bounds. Cells that would land off the grid are
/// skipped rather than panicking.
pub fn merge(grid: &mut Grid, piece: &ActivePiece) {
    for (x, y, tag) in piece.cells() {
        grid.set(x, y, tag);
    }
}

/// Clear all full rows and return how many were removed.
///
/// Scans bottom to top. A full row is moved to the top and zeroed, which
/// shifts every row above it down by one, so the same index is examined again
/// before moving up.
pub fn sweep(grid: &mut Grid) -> usize {
    let mut cleared = 0;
    let mut y = grid.height();

    while y > 0 {
        let row = y - 1;
        if grid.is_row_full(row) {
            let rows = grid.rows_mut();
            rows[..=row].rotate_right(1);
            rows[0].fill(EMPTY);
            cleared += 1;
            // Same index now holds the row that was above it.
            continue;
        }
        y -= 1;
    }

    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{ActivePiece, Position};
    use crate::types::PieceKind;

    #[test]
    fn test_merge_writes_piece_tag() {
        let mut grid = Grid::new(6, 6);
        let piece = ActivePiece::new(PieceKind::O, Position::new(2, 4));
        merge(&mut grid, &piece);

        let tag = PieceKind::O.tag();
        assert_eq!(grid.get(2, 4), Some(tag));
        assert_eq!(grid.get(3, 4), Some(tag));
        assert_eq!(grid.get(2, 5), Some(tag));
        assert_eq!(grid.get(3, 5), Some(tag));
        assert_eq!(grid.filled_count(), 4);
    }

    #[test]
    fn test_merge_leaves_existing_cells_under_padding() {
        let mut grid = Grid::new(6, 6);
        grid.set(0, 1, 7);
        // T's top row is padding and sits over (0, 1).
        let piece = ActivePiece::new(PieceKind::T, Position::new(0, 1));
        merge(&mut grid, &piece);
        assert_eq!(grid.get(0, 1), Some(7));
        assert_eq!(grid.filled_count(), 5);
    }

    #[test]
    fn test_sweep_nothing_full() {
        let mut grid = Grid::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let before = grid.clone();
        assert_eq!(sweep(&mut grid), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_sweep_non_adjacent_rows() {
        let mut grid = Grid::from_rows(vec![
            vec![0, 2, 0],
            vec![1, 1, 1],
            vec![3, 0, 0],
            vec![4, 4, 4],
        ])
        .unwrap();

        assert_eq!(sweep(&mut grid), 2);
        assert_eq!(
            grid.rows(),
            &[vec![0, 0, 0], vec![0, 0, 0], vec![0, 2, 0], vec![3, 0, 0]]
        );
    }

    #[test]
    fn test_sweep_whole_grid() {
        let mut grid = Grid::from_rows(vec![vec![5; 4]; 3]).unwrap();
        assert_eq!(sweep(&mut grid), 3);
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.height(), 3);
    }
}
