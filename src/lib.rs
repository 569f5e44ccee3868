//! Classic Array Problems
//! =========================================
//!
//! A collection of independent, self-contained solutions to the classic
//! array-manipulation interview problems. Each module states one problem and
//! solves it with one or more alternative algorithms (typically the obvious
//! brute force next to the optimal method), so the approaches can be compared,
//! cross-checked in tests, and raced in the criterion benches.
//!
//! The flagship algorithm lives in this file: counting *reverse pairs*.
//!
//! Problem
//! -------
//! Given a sequence of integers, count the index pairs (i, j) with i < j and
//! `nums[i] > 2 * nums[j]`.
//!
//! Approach (modified merge sort)
//! ------------------------------
//! 1) Brute force: compare every pair. O(n^2), kept as the test oracle.
//!
//! 2) Divide and conquer counting merge, O(n log n):
//!    - Split the active range at its midpoint; recursively count pairs fully
//!      inside each half. As a loop invariant, each half comes back sorted.
//!    - Cross pairs: for each i in the (sorted) left half, advance a cursor j
//!      through the (sorted) right half while `nums[i] > 2 * nums[j]`. The
//!      cursor never moves backward as i increases, so cross-counting is
//!      O(left + right) instead of O(left * right).
//!    - Only then interleave the halves through a temporary buffer. Counting
//!      must precede the merge: the monotonic-cursor argument needs the two
//!      halves still separate and independently sorted.
//!
//! Correctness notes
//! -----------------
//! - The comparison is evaluated in i64. Doubling an i32 near either extreme
//!   overflows i32; widening removes that defect class outright instead of
//!   detecting it at runtime.
//! - Equal values never satisfy the strict `>`, so ties need no special
//!   handling. Ranges of length <= 1 contribute zero pairs and end recursion.
//! - The count is taken against the original index ordering: every pair is
//!   counted exactly once, at the recursion level where its two indices first
//!   fall on opposite sides of a split (or by the base/in-half counts), before
//!   any reordering touches them.
//!
//! Observable side effect
//! ----------------------
//! `reverse_pairs` sorts the caller's slice non-decreasing. That is the
//! documented contract inherited from the merge, not an accident; callers that
//! need the input preserved can use [`reverse_pairs_preserving`], which counts
//! on a working copy for O(n) extra space.
//!
//! Performance notes
//! -----------------
//! - Recursion depth is O(log n); total work is O(n log n) comparisons/moves.
//! - The merge buffer is sized to the active range and scoped to the merge
//!   step, so peak extra memory is O(n).
//! - Build with release settings (opt-level=3, lto=thin, codegen-units=1).

pub mod duplicate;
pub mod intervals;
pub mod majority;
pub mod matrix_search;
pub mod matrix_zero;
pub mod max_subarray;
pub mod merge_sorted;
pub mod next_permutation;
pub mod pascal;
pub mod power;
pub mod rotate;
pub mod sort_colors;
pub mod stocks;
pub mod unique_paths;

//
// Reverse pairs
//

/// Count pairs (i, j) with i < j and `nums[i] > 2 * nums[j]`, brute force.
///
/// O(n^2); the oracle the counting merge is checked against.
pub fn reverse_pairs_brute(nums: &[i32]) -> usize {
    let mut count = 0;
    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            if nums[i] as i64 > 2 * nums[j] as i64 {
                count += 1;
            }
        }
    }
    count
}

/// Count pairs (i, j) with i < j and `nums[i] > 2 * nums[j]` in O(n log n).
///
/// Side effect: `nums` is left sorted in non-decreasing order. The returned
/// count refers to the ordering the slice had on entry.
pub fn reverse_pairs(nums: &mut [i32]) -> usize {
    if nums.len() < 2 {
        return 0;
    }
    let right = nums.len() - 1;
    sort_and_count(nums, 0, right)
}

/// Like [`reverse_pairs`], but counts on a working copy so the input slice is
/// left untouched. Costs O(n) extra space up front.
pub fn reverse_pairs_preserving(nums: &[i32]) -> usize {
    let mut scratch = nums.to_vec();
    reverse_pairs(&mut scratch)
}

/// Recursive counting merge sort over the inclusive range [left, right].
///
/// Post-condition: `nums[left..=right]` is sorted non-decreasing. The parent
/// level's cross-count depends on it.
fn sort_and_count(nums: &mut [i32], left: usize, right: usize) -> usize {
    if left >= right {
        return 0;
    }

    let mid = left + (right - left) / 2;
    let mut count = sort_and_count(nums, left, mid);
    count += sort_and_count(nums, mid + 1, right);
    count += count_cross_pairs(nums, left, mid, right);
    merge(nums, left, mid, right);
    count
}

/// Count cross pairs spanning the split at `mid`, both halves sorted.
///
/// The cursor j only ever advances: once `nums[i] <= 2 * nums[j]` holds, it
/// holds for every later j as well, and a larger i can only push the frontier
/// further right. Every right-half index strictly before the frontier pairs
/// with the current i.
fn count_cross_pairs(nums: &[i32], left: usize, mid: usize, right: usize) -> usize {
    let mut count = 0;
    let mut j = mid + 1;
    for i in left..=mid {
        while j <= right && nums[i] as i64 > 2 * nums[j] as i64 {
            j += 1;
        }
        count += j - (mid + 1);
    }
    count
}

/// Standard merge of the sorted halves [left, mid] and [mid+1, right] through
/// a temporary buffer.
fn merge(nums: &mut [i32], left: usize, mid: usize, right: usize) {
    let mut temp = Vec::with_capacity(right - left + 1);
    let mut i = left;
    let mut j = mid + 1;

    while i <= mid && j <= right {
        if nums[i] <= nums[j] {
            temp.push(nums[i]);
            i += 1;
        } else {
            temp.push(nums[j]);
            j += 1;
        }
    }
    temp.extend_from_slice(&nums[i..=mid]);
    temp.extend_from_slice(&nums[j..=right]);

    nums[left..=right].copy_from_slice(&temp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn assert_sorted(nums: &[i32]) {
        assert!(
            nums.windows(2).all(|w| w[0] <= w[1]),
            "slice not sorted: {nums:?}"
        );
    }

    #[test]
    fn leetcode_example() {
        let mut nums = [1, 3, 2, 3, 1];
        assert_eq!(reverse_pairs(&mut nums), 1);
        assert_eq!(nums, [1, 1, 2, 3, 3]);
    }

    #[test]
    fn empty_and_singleton_count_zero() {
        assert_eq!(reverse_pairs(&mut []), 0);
        assert_eq!(reverse_pairs(&mut [7]), 0);
    }

    #[test]
    fn already_sorted_stays_sorted() {
        let mut nums = [1, 2, 3, 4, 5];
        let count = reverse_pairs(&mut nums);
        assert_eq!(count, reverse_pairs_brute(&[1, 2, 3, 4, 5]));
        assert_eq!(nums, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn strictly_descending_matches_brute_force() {
        let original: Vec<i32> = (1..=32).rev().map(|v| v * 100).collect();
        let mut nums = original.clone();
        assert_eq!(reverse_pairs(&mut nums), reverse_pairs_brute(&original));
        assert_sorted(&nums);
    }

    #[test]
    fn duplicates_and_negatives() {
        // -4 > 2 * -3 holds; equal values never pair.
        let original = vec![-3, -4, -4, 0, 0, 2, 2];
        let mut nums = original.clone();
        assert_eq!(reverse_pairs(&mut nums), reverse_pairs_brute(&original));
        assert_sorted(&nums);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let original = vec![i32::MAX, i32::MIN, i32::MAX, i32::MIN, 0];
        let mut nums = original.clone();
        assert_eq!(reverse_pairs(&mut nums), reverse_pairs_brute(&original));
        assert_sorted(&nums);
    }

    #[test]
    fn preserving_variant_leaves_input_alone() {
        let nums = vec![1, 3, 2, 3, 1];
        assert_eq!(reverse_pairs_preserving(&nums), 1);
        assert_eq!(nums, [1, 3, 2, 3, 1]);
    }

    #[test]
    fn randomized_cross_check_against_brute_force() {
        let mut rng = rand::thread_rng();
        for len in 0..64 {
            let original: Vec<i32> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
            let mut nums = original.clone();
            assert_eq!(
                reverse_pairs(&mut nums),
                reverse_pairs_brute(&original),
                "mismatch on {original:?}"
            );
            assert_sorted(&nums);
        }
    }
}
