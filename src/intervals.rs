//! Merge overlapping intervals.
//!
//! After sorting by start, any interval that overlaps another is adjacent to
//! it, so a single forward scan suffices. Two formulations of that scan are
//! kept: one threads an explicit (start, end) cursor pair, the other extends
//! the last interval already pushed into the output.
//!
//! Intervals are inclusive `[start, end]`; touching intervals (next start ==
//! current end) merge.

/// Cursor-pair formulation: track the current block's start/end, flush on gap.
pub fn merge_intervals_scan(intervals: &mut [[i32; 2]]) -> Vec<[i32; 2]> {
    if intervals.is_empty() {
        return Vec::new();
    }
    intervals.sort_unstable();

    let mut merged = Vec::new();
    let [mut curr_start, mut curr_end] = intervals[0];

    for &[start, end] in &intervals[1..] {
        if start <= curr_end {
            curr_end = curr_end.max(end);
        } else {
            merged.push([curr_start, curr_end]);
            curr_start = start;
            curr_end = end;
        }
    }
    merged.push([curr_start, curr_end]);
    merged
}

/// `last_mut` formulation: push, or extend the most recent output interval.
pub fn merge_intervals(intervals: &mut [[i32; 2]]) -> Vec<[i32; 2]> {
    intervals.sort_unstable();

    let mut merged: Vec<[i32; 2]> = Vec::new();
    for &[start, end] in intervals.iter() {
        match merged.last_mut() {
            Some([_, last_end]) if start <= *last_end => {
                *last_end = (*last_end).max(end);
            }
            _ => merged.push([start, end]),
        }
    }
    merged
}
