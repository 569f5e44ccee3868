//! Unique paths in an m x n grid.
//!
//! A robot starts at the top-left corner and moves only right or down; count
//! the distinct paths to the bottom-right corner. Four ladders of the same
//! answer:
//!
//! 1. pure recursion: branch right/down from every cell, O(2^(m+n));
//! 2. memoized recursion: cache paths-from-(i, j), O(m*n);
//! 3. bottom-up tabulation: `dp[i][j] = dp[i-1][j] + dp[i][j-1]`, O(m*n);
//! 4. combinatorics: a path is a shuffle of (m-1) downs among (m+n-2)
//!    moves, so the answer is C(m+n-2, m-1), O(min(m, n)).
//!
//! The combinatorial product is computed in integers: after the i-th step the
//! accumulator holds C(total - r + i, i), itself a binomial, so each division
//! is exact. Intermediate products go through u128 to stay clear of u64
//! overflow before the division brings them back down.

/// Pure recursion. Exponential; only sensible for small grids.
pub fn unique_paths_recursive(m: usize, n: usize) -> u64 {
    fn count(i: usize, j: usize, m: usize, n: usize) -> u64 {
        if i == m - 1 && j == n - 1 {
            return 1;
        }
        if i >= m || j >= n {
            return 0;
        }
        count(i + 1, j, m, n) + count(i, j + 1, m, n)
    }

    if m == 0 || n == 0 {
        return 0;
    }
    count(0, 0, m, n)
}

/// Top-down memoization over paths-from-(i, j).
pub fn unique_paths_memo(m: usize, n: usize) -> u64 {
    fn count(i: usize, j: usize, m: usize, n: usize, memo: &mut [Vec<Option<u64>>]) -> u64 {
        if i == m - 1 && j == n - 1 {
            return 1;
        }
        if i >= m || j >= n {
            return 0;
        }
        if let Some(cached) = memo[i][j] {
            return cached;
        }
        let paths = count(i + 1, j, m, n, memo) + count(i, j + 1, m, n, memo);
        memo[i][j] = Some(paths);
        paths
    }

    if m == 0 || n == 0 {
        return 0;
    }
    let mut memo = vec![vec![None; n]; m];
    count(0, 0, m, n, &mut memo)
}

/// Bottom-up tabulation: ways-to-reach-(i, j) = from above + from the left.
pub fn unique_paths_tabulation(m: usize, n: usize) -> u64 {
    if m == 0 || n == 0 {
        return 0;
    }

    // First row and column stay 1: a border cell is reachable one way only.
    let mut dp = vec![vec![1u64; n]; m];
    for i in 1..m {
        for j in 1..n {
            dp[i][j] = dp[i - 1][j] + dp[i][j - 1];
        }
    }
    dp[m - 1][n - 1]
}

/// Closed form C(m+n-2, m-1), evaluated as an exact iterative product.
pub fn unique_paths(m: usize, n: usize) -> u64 {
    if m == 0 || n == 0 {
        return 0;
    }

    let total = (m + n - 2) as u128;
    let r = (m - 1).min(n - 1) as u128;

    let mut result: u128 = 1;
    for i in 1..=r {
        result = result * (total - r + i) / i;
    }
    result as u64
}
