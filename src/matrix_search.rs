//! Search in a row-major sorted matrix.
//!
//! Every row is sorted, and each row starts after the previous row ends, so
//! the matrix reads as one sorted array. Three searches, weakest to
//! strongest:
//!
//! - full scan, O(rows * cols);
//! - gate each row by its first/last value, binary search the one candidate
//!   row, O(rows + log cols);
//! - binary search the flattened index space directly, O(log(rows * cols)),
//!   decoding `mid` as `(mid / cols, mid % cols)`.

/// Full scan of every cell.
pub fn search_matrix_brute(matrix: &[Vec<i32>], target: i32) -> bool {
    matrix.iter().any(|row| row.contains(&target))
}

/// Range-gate each row, then binary search the row that could hold `target`.
pub fn search_matrix_rows(matrix: &[Vec<i32>], target: i32) -> bool {
    matrix
        .iter()
        .filter(|row| !row.is_empty())
        .find(|row| row[0] <= target && target <= row[row.len() - 1])
        .is_some_and(|row| row.binary_search(&target).is_ok())
}

/// Binary search over the flattened index space. The strongest variant.
pub fn search_matrix(matrix: &[Vec<i32>], target: i32) -> bool {
    let rows = matrix.len();
    if rows == 0 {
        return false;
    }
    let cols = matrix[0].len();
    if cols == 0 {
        return false;
    }

    let mut left = 0usize;
    let mut right = rows * cols - 1;

    while left <= right {
        let mid = left + (right - left) / 2;
        let value = matrix[mid / cols][mid % cols];

        if value == target {
            return true;
        } else if value < target {
            left = mid + 1;
        } else {
            if mid == 0 {
                break;
            }
            right = mid - 1;
        }
    }
    false
}
