//! In-place 90° rotation of square piece matrices.

use crate::piece::PieceMatrix;

/// Rotate clockwise: transpose, then reverse every row
pub fn rotate(matrix: &mut PieceMatrix) {
    let n = matrix.size();
    let cells = matrix.cells_mut();
    transpose(cells, n);
    for row in cells.iter_mut().take(n) {
        row[..n].reverse();
    }
}

/// Rotate counter-clockwise; undoes exactly one [`rotate`]
pub fn rotate_back(matrix: &mut PieceMatrix) {
    let n = matrix.size();
    let cells = matrix.cells_mut();
    for row in cells.iter_mut().take(n) {
        row[..n].reverse();
    }
    transpose(cells, n);
}

fn transpose<const M: usize>(cells: &mut [[u8; M]; M], n: usize) {
    for y in 0..n {
        for x in 0..y {
            let tmp = cells[y][x];
            cells[y][x] = cells[x][y];
            cells[x][y] = tmp;
        }
    }
}
