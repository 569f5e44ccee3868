//! Next lexicographic permutation, in place.
//!
//! Rearrange `nums` into the smallest permutation strictly greater than the
//! current one. A fully descending array has no successor and wraps to the
//! ascending (smallest) permutation.
//!
//! The pivot is the *rightmost* index with `nums[i] < nums[i + 1]`: changing
//! anything further left would jump past closer permutations. After swapping
//! the pivot with the rightmost element greater than it, the suffix is still
//! descending, so reversing it yields the minimal suffix. O(n), O(1) space.

pub fn next_permutation(nums: &mut [i32]) {
    let n = nums.len();
    if n < 2 {
        return;
    }

    // Rightmost ascent.
    let pivot = (0..n - 1).rev().find(|&i| nums[i] < nums[i + 1]);

    let Some(pivot) = pivot else {
        // Fully descending: wrap around to the smallest permutation.
        nums.reverse();
        return;
    };

    // Rightmost element greater than the pivot. Exists because nums[pivot+1]
    // qualifies.
    let successor = (pivot + 1..n).rev().find(|&i| nums[i] > nums[pivot]);
    if let Some(successor) = successor {
        nums.swap(pivot, successor);
    }

    nums[pivot + 1..].reverse();
}
