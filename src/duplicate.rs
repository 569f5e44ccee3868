//! Find the duplicated number.
//!
//! `nums` holds n + 1 values drawn from 1..=n, so at least one value repeats
//! (pigeonhole); here exactly one value is duplicated, possibly many times.
//!
//! Three approaches:
//! - sort, then scan for an adjacent equal pair (mutates its input);
//! - a frequency table, O(n) extra space;
//! - Floyd's tortoise and hare, O(1) space: reading the array as the
//!   functional graph `i -> nums[i]`, the duplicated value is the entry point
//!   of the cycle that the repeated target creates.

/// Sort-based: duplicates become adjacent. O(n log n); sorts the slice.
pub fn find_duplicate_sorting(nums: &mut [i32]) -> Option<i32> {
    nums.sort_unstable();
    nums.windows(2)
        .find(|w| w[0] == w[1])
        .map(|w| w[0])
}

/// Frequency-table variant. O(n) time and space.
pub fn find_duplicate_counting(nums: &[i32]) -> Option<i32> {
    let mut seen = vec![false; nums.len() + 1];
    for &val in nums {
        let slot = seen.get_mut(val as usize)?;
        if *slot {
            return Some(val);
        }
        *slot = true;
    }
    None
}

/// Floyd's cycle detection over the `i -> nums[i]` walk. O(n) time, O(1)
/// space, input untouched.
///
/// Precondition: `nums` has n + 1 elements with values in 1..=n. The walk is
/// then always in bounds and the cycle entry is the duplicated value.
pub fn find_duplicate(nums: &[i32]) -> i32 {
    debug_assert!(nums.len() >= 2);
    debug_assert!(nums
        .iter()
        .all(|&v| (1..nums.len() as i32).contains(&v)));

    let step = |i: i32| nums[i as usize];

    // Phase 1: meet inside the cycle.
    let mut slow = nums[0];
    let mut fast = nums[0];
    loop {
        slow = step(slow);
        fast = step(step(fast));
        if slow == fast {
            break;
        }
    }

    // Phase 2: restart one pointer; the meeting point is the cycle entry.
    fast = nums[0];
    while slow != fast {
        slow = step(slow);
        fast = step(fast);
    }
    slow
}
