//! Pascal's triangle.
//!
//! Each row starts and ends with 1; every interior entry is the sum of the
//! two entries above it, which is exactly `C(n, k) = C(n-1, k-1) + C(n-1, k)`.
//! O(rows^2) time and space, which is optimal since that is the output size.

/// First `num_rows` rows of Pascal's triangle.
pub fn pascal_triangle(num_rows: usize) -> Vec<Vec<u64>> {
    let mut triangle: Vec<Vec<u64>> = Vec::with_capacity(num_rows);

    for i in 0..num_rows {
        let mut row = vec![1u64; i + 1];
        for j in 1..i {
            row[j] = triangle[i - 1][j - 1] + triangle[i - 1][j];
        }
        triangle.push(row);
    }
    triangle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_rows() {
        assert_eq!(
            pascal_triangle(5),
            vec![
                vec![1],
                vec![1, 1],
                vec![1, 2, 1],
                vec![1, 3, 3, 1],
                vec![1, 4, 6, 4, 1],
            ]
        );
    }

    #[test]
    fn zero_rows() {
        assert!(pascal_triangle(0).is_empty());
    }

    #[test]
    fn rows_are_symmetric_and_sum_to_powers_of_two() {
        let triangle = pascal_triangle(16);
        for (n, row) in triangle.iter().enumerate() {
            let reversed: Vec<u64> = row.iter().rev().copied().collect();
            assert_eq!(*row, reversed);
            assert_eq!(row.iter().sum::<u64>(), 1u64 << n);
        }
    }
}
