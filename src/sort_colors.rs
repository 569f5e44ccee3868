//! Sort an array of 0s, 1s and 2s (sort colors).
//!
//! Two passes of counting, or one pass of Dutch National Flag partitioning.
//!
//! Dutch flag invariant, maintained by three pointers:
//!
//! ```text
//! [0 .. low)     all 0s
//! [low .. mid)   all 1s
//! [mid .. high]  unprocessed
//! (high .. end)  all 2s
//! ```
//!
//! When `nums[mid] == 2` it is swapped behind `high` and `mid` is *not*
//! advanced: the element swapped in has not been examined yet.

/// Counting variant: tally the three values, rewrite the slice from the
/// counts. Two passes, no comparisons.
pub fn sort_colors_counting(nums: &mut [i32]) {
    let mut counts = [0usize; 3];
    for &val in nums.iter() {
        debug_assert!((0..=2).contains(&val));
        counts[val as usize] += 1;
    }

    let mut index = 0;
    for (color, &count) in counts.iter().enumerate() {
        nums[index..index + count].fill(color as i32);
        index += count;
    }
}

/// Dutch National Flag partition: single pass, O(1) space.
pub fn sort_colors(nums: &mut [i32]) {
    if nums.is_empty() {
        return;
    }

    let mut low = 0;
    let mut mid = 0;
    let mut high = nums.len() - 1;

    while mid <= high {
        match nums[mid] {
            0 => {
                nums.swap(low, mid);
                low += 1;
                mid += 1;
            }
            1 => mid += 1,
            _ => {
                nums.swap(mid, high);
                if high == 0 {
                    break;
                }
                high -= 1;
            }
        }
    }
}
