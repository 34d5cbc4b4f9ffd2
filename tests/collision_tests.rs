//! Collision tests

use arena_tetris::core::{collides, merge, spawn, ActivePiece, Grid, Position};
use arena_tetris::types::PieceKind;

#[test]
fn test_inside_empty_bounds_is_free() {
    let grid = Grid::new(12, 20);
    let o = spawn(PieceKind::O);
    assert!(!collides(&grid, &o, Position::new(0, 0)));
    assert!(!collides(&grid, &o, Position::new(10, 18)));
}

#[test]
fn test_every_bound_is_checked() {
    let grid = Grid::new(12, 20);
    let o = spawn(PieceKind::O);

    // Above the top
    assert!(collides(&grid, &o, Position::new(4, -1)));
    // Below the floor
    assert!(collides(&grid, &o, Position::new(4, 19)));
    // Left of the wall
    assert!(collides(&grid, &o, Position::new(-1, 5)));
    // Column overflow on a row that exists
    assert!(collides(&grid, &o, Position::new(11, 5)));
}

#[test]
fn test_empty_matrix_cells_may_hang_outside() {
    let grid = Grid::new(12, 20);
    let i = spawn(PieceKind::I);
    // Vertical I lives in matrix column 1; column 0 is empty.
    assert!(!collides(&grid, &i, Position::new(-1, 0)));
    assert!(collides(&grid, &i, Position::new(-2, 0)));
}

#[test]
fn test_overlap_with_locked_cells() {
    let mut grid = Grid::new(12, 20);
    merge(&mut grid, &ActivePiece::new(PieceKind::O, Position::new(4, 18)));

    let t = spawn(PieceKind::T);
    // T's stem (row 2, column 1) lands on the O.
    assert!(collides(&grid, &t, Position::new(4, 16)));
    assert!(!collides(&grid, &t, Position::new(4, 15)));
    assert!(!collides(&grid, &t, Position::new(7, 16)));
}
