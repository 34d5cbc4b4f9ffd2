//! Collision test for a piece matrix placed on the grid.

use crate::grid::Grid;
use crate::piece::{PieceMatrix, Position};

/// True if any filled cell of `matrix` at `pos` lands off the grid (either
/// axis) or on a filled grid cell.
pub fn collides(grid: &Grid, matrix: &PieceMatrix, pos: Position) -> bool {
    matrix
        .occupied()
        .any(|(dx, dy, _)| !grid.is_empty_at(pos.x + dx, pos.y + dy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::spawn;
    use crate::types::PieceKind;

    #[test]
    fn test_empty_grid_interior() {
        let grid = Grid::new(12, 20);
        let m = spawn(PieceKind::T);
        assert!(!collides(&grid, &m, Position::new(4, 4)));
    }

    #[test]
    fn test_padding_may_hang_off_the_grid() {
        let grid = Grid::new(12, 20);
        // T's top row is empty, so y = -1 only moves padding off the grid.
        let m = spawn(PieceKind::T);
        assert!(!collides(&grid, &m, Position::new(0, -1)));
        assert!(collides(&grid, &m, Position::new(0, -2)));
    }

    #[test]
    fn test_overlap_with_locked_cell() {
        let mut grid = Grid::new(12, 20);
        grid.set(5, 6, 3);
        let m = spawn(PieceKind::O);
        assert!(collides(&grid, &m, Position::new(4, 5)));
        assert!(!collides(&grid, &m, Position::new(6, 5)));
    }
}
