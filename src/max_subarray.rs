//! Maximum subarray sum (Kadane's algorithm).
//!
//! Find the contiguous subarray with the largest sum. The running sum is
//! reset to zero whenever it goes negative: a negative prefix can only drag
//! every later sum down. The global maximum is seeded from the first element
//! so all-negative inputs report the least-bad single element rather than an
//! empty subarray.

/// Maximum subarray sum over `nums`, or `None` for an empty slice.
///
/// Sums accumulate in i64 so a long run of i32 values cannot overflow.
pub fn max_subarray_sum(nums: &[i32]) -> Option<i64> {
    let first = *nums.first()?;

    let mut running: i64 = 0;
    let mut best = first as i64;

    for &val in nums {
        running += val as i64;
        best = best.max(running);
        if running < 0 {
            running = 0;
        }
    }
    Some(best)
}

/// O(n^2) oracle: try every (start, end) window.
pub fn max_subarray_sum_brute(nums: &[i32]) -> Option<i64> {
    if nums.is_empty() {
        return None;
    }
    let mut best = i64::MIN;
    for start in 0..nums.len() {
        let mut sum: i64 = 0;
        for &val in &nums[start..] {
            sum += val as i64;
            best = best.max(sum);
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn classic_example() {
        let nums = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
        // [4, -1, 2, 1]
        assert_eq!(max_subarray_sum(&nums), Some(6));
    }

    #[test]
    fn empty_input() {
        assert_eq!(max_subarray_sum(&[]), None);
        assert_eq!(max_subarray_sum_brute(&[]), None);
    }

    #[test]
    fn all_negative_picks_least_bad_element() {
        let nums = [-8, -3, -6, -2, -5, -4];
        assert_eq!(max_subarray_sum(&nums), Some(-2));
    }

    #[test]
    fn all_positive_takes_whole_array() {
        let nums = [2, 2, 2, 2, 2];
        assert_eq!(max_subarray_sum(&nums), Some(10));
    }

    #[test]
    fn randomized_cross_check() {
        let mut rng = rand::thread_rng();
        for len in 1..48 {
            let nums: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
            assert_eq!(
                max_subarray_sum(&nums),
                max_subarray_sum_brute(&nums),
                "mismatch on {nums:?}"
            );
        }
    }
}
