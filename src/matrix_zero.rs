//! Set matrix zeroes.
//!
//! If a cell is 0, zero out its entire row and column. Two variants:
//!
//! - [`set_zeroes_collected`]: record every zero's (row, col) first, then
//!   blank the marked rows and columns. O(k) extra space for k zeroes.
//! - [`set_zeroes`]: use the first row and first column of the matrix itself
//!   as the markers, with two flags remembering whether they were zero to
//!   begin with. O(1) extra space.
//!
//! Both must separate the scan from the writes: zeroing while scanning would
//! cascade freshly written zeroes into further rows and columns.

/// Marker-list variant: collect zero positions, then blank their rows/columns.
pub fn set_zeroes_collected(matrix: &mut [Vec<i32>]) {
    if matrix.is_empty() {
        return;
    }

    let mut zeroes = Vec::new();
    for (r, row) in matrix.iter().enumerate() {
        for (c, &val) in row.iter().enumerate() {
            if val == 0 {
                zeroes.push((r, c));
            }
        }
    }

    for (r, c) in zeroes {
        for row in matrix.iter_mut() {
            row[c] = 0;
        }
        for val in &mut matrix[r] {
            *val = 0;
        }
    }
}

/// In-place variant: first row/column double as the marker store.
pub fn set_zeroes(matrix: &mut [Vec<i32>]) {
    let rows = matrix.len();
    if rows == 0 {
        return;
    }
    let cols = matrix[0].len();
    if cols == 0 {
        return;
    }

    let first_row_zero = matrix[0].iter().any(|&v| v == 0);
    let first_col_zero = matrix.iter().any(|row| row[0] == 0);

    // Mark: a zero at (i, j) flags row i and column j in the borders.
    for i in 1..rows {
        for j in 1..cols {
            if matrix[i][j] == 0 {
                matrix[i][0] = 0;
                matrix[0][j] = 0;
            }
        }
    }

    // Sweep the interior off the marks.
    for i in 1..rows {
        for j in 1..cols {
            if matrix[i][0] == 0 || matrix[0][j] == 0 {
                matrix[i][j] = 0;
            }
        }
    }

    if first_row_zero {
        matrix[0].iter_mut().for_each(|v| *v = 0);
    }
    if first_col_zero {
        matrix.iter_mut().for_each(|row| row[0] = 0);
    }
}
