//! Rotate an n x n matrix 90 degrees clockwise.
//!
//! The index mapping for a clockwise quarter turn is
//! `rotated[col][n - 1 - row] = matrix[row][col]`. The out-of-place variant
//! applies it directly into a fresh matrix; the in-place variant gets the
//! same result as transpose followed by reversing each row.

/// Out-of-place rotation into a new matrix. O(n^2) space.
pub fn rotate_clockwise_copy(matrix: &[Vec<i32>]) -> Vec<Vec<i32>> {
    let n = matrix.len();
    let mut rotated = vec![vec![0; n]; n];

    for (row, values) in matrix.iter().enumerate() {
        for (col, &val) in values.iter().enumerate() {
            rotated[col][n - 1 - row] = val;
        }
    }
    rotated
}

/// In-place rotation: transpose, then reverse each row. O(1) extra space.
pub fn rotate_clockwise(matrix: &mut [Vec<i32>]) {
    let n = matrix.len();

    // Transpose (lower triangle drives the swaps).
    for i in 0..n {
        for j in 0..i {
            let val = matrix[i][j];
            matrix[i][j] = matrix[j][i];
            matrix[j][i] = val;
        }
    }

    for row in matrix.iter_mut() {
        row.reverse();
    }
}
