//! Majority elements (Moore's voting).
//!
//! Two related problems over one array:
//!
//! - the element appearing more than n/2 times (at most one can exist);
//! - every element appearing more than n/3 times (at most two can exist, by
//!   pigeonhole: three disjoint groups each larger than n/3 would exceed n).
//!
//! Moore's voting cancels distinct values against each other; whatever
//! candidate survives is the only value that *could* hold a majority. The
//! candidates are then verified with a real count, so both functions are
//! total: inputs without a majority return nothing rather than a false
//! positive.

use std::collections::HashMap;

use arrayvec::ArrayVec;

/// Frequency-map variant for the > n/2 majority. O(n) space.
pub fn majority_element_counting(nums: &[i32]) -> Option<i32> {
    let mut freq = HashMap::new();
    for &val in nums {
        *freq.entry(val).or_insert(0usize) += 1;
    }
    freq.into_iter()
        .find(|&(_, count)| count > nums.len() / 2)
        .map(|(val, _)| val)
}

/// Moore's voting for the > n/2 majority. O(n) time, O(1) space.
///
/// The vote phase alone can elect a false candidate when no majority exists,
/// so the candidate is verified before being returned.
pub fn majority_element(nums: &[i32]) -> Option<i32> {
    let mut count = 0usize;
    let mut candidate = 0;

    for &num in nums {
        if count == 0 {
            candidate = num;
            count = 1;
        } else if num == candidate {
            count += 1;
        } else {
            count -= 1;
        }
    }

    let occurrences = nums.iter().filter(|&&v| v == candidate).count();
    (occurrences > nums.len() / 2).then_some(candidate)
}

/// Frequency-map variant for the > n/3 elements.
pub fn majority_elements_third_counting(nums: &[i32]) -> Vec<i32> {
    let mut freq = HashMap::new();
    for &val in nums {
        *freq.entry(val).or_insert(0usize) += 1;
    }
    let mut result: Vec<i32> = freq
        .into_iter()
        .filter(|&(_, count)| count > nums.len() / 3)
        .map(|(val, _)| val)
        .collect();
    result.sort_unstable();
    result
}

/// Extended Moore's voting for the > n/3 elements. At most two values can
/// qualify, so the result fits a fixed two-slot buffer. O(n) time, O(1)
/// space; the returned values are in ascending order.
pub fn majority_elements_third(nums: &[i32]) -> ArrayVec<i32, 2> {
    // Phase 1: elect up to two candidates. Each cancellation step retires
    // three distinct values at once, so a > n/3 value can never be fully
    // cancelled out.
    let mut candidate1 = 0;
    let mut candidate2 = 0;
    let mut count1 = 0usize;
    let mut count2 = 0usize;

    for &num in nums {
        if count1 > 0 && num == candidate1 {
            count1 += 1;
        } else if count2 > 0 && num == candidate2 {
            count2 += 1;
        } else if count1 == 0 {
            candidate1 = num;
            count1 = 1;
        } else if count2 == 0 {
            candidate2 = num;
            count2 = 1;
        } else {
            count1 -= 1;
            count2 -= 1;
        }
    }

    // Phase 2: the survivors are only *potential* majorities; count them for
    // real before accepting.
    let threshold = nums.len() / 3;
    let occurrences =
        |target: i32| nums.iter().filter(|&&v| v == target).count();

    let mut result = ArrayVec::new();
    if count1 > 0 && occurrences(candidate1) > threshold {
        result.push(candidate1);
    }
    if count2 > 0 && candidate2 != candidate1 && occurrences(candidate2) > threshold {
        result.push(candidate2);
    }
    result.sort_unstable();
    result
}
