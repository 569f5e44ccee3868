//! Merge a sorted array into the spare tail of another.
//!
//! `nums1` has length m + n: the first m slots hold sorted values, the rest
//! are free. `nums2` holds n sorted values. After the call, `nums1` is the
//! sorted merge of both.
//!
//! The optimal merge runs *backward* with three cursors, filling the largest
//! values into the free tail first. Forward merging would overwrite nums1
//! elements that are still unread.

/// Copy `nums2` into the free tail, then sort everything. O((m+n) log (m+n)).
pub fn merge_into_sorting(nums1: &mut [i32], m: usize, nums2: &[i32]) {
    debug_assert_eq!(nums1.len(), m + nums2.len());

    nums1[m..].copy_from_slice(nums2);
    nums1.sort_unstable();
}

/// Backward three-pointer merge. O(m + n), no extra space.
pub fn merge_into(nums1: &mut [i32], m: usize, nums2: &[i32]) {
    debug_assert_eq!(nums1.len(), m + nums2.len());

    let mut i = m; // one past the last unread nums1 value
    let mut j = nums2.len(); // one past the last unread nums2 value
    let mut k = nums1.len(); // one past the next fill slot

    while i > 0 && j > 0 {
        k -= 1;
        if nums1[i - 1] > nums2[j - 1] {
            nums1[k] = nums1[i - 1];
            i -= 1;
        } else {
            nums1[k] = nums2[j - 1];
            j -= 1;
        }
    }

    // Leftover nums2 values; leftover nums1 values are already in place.
    nums1[..j].copy_from_slice(&nums2[..j]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn classic_example() {
        let mut nums1 = [1, 2, 3, 0, 0, 0];
        merge_into(&mut nums1, 3, &[2, 5, 6]);
        assert_eq!(nums1, [1, 2, 2, 3, 5, 6]);

        let mut nums1 = [1, 2, 3, 0, 0, 0];
        merge_into_sorting(&mut nums1, 3, &[2, 5, 6]);
        assert_eq!(nums1, [1, 2, 2, 3, 5, 6]);
    }

    #[test]
    fn second_array_empty() {
        let mut nums1 = [1, 2, 3];
        merge_into(&mut nums1, 3, &[]);
        assert_eq!(nums1, [1, 2, 3]);
    }

    #[test]
    fn first_array_empty() {
        let mut nums1 = [0, 0];
        merge_into(&mut nums1, 0, &[4, 9]);
        assert_eq!(nums1, [4, 9]);
    }

    #[test]
    fn all_of_nums2_smaller() {
        let mut nums1 = [7, 8, 9, 0, 0, 0];
        merge_into(&mut nums1, 3, &[1, 2, 3]);
        assert_eq!(nums1, [1, 2, 3, 7, 8, 9]);
    }

    #[test]
    fn randomized_agreement_with_sort_variant() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let m = rng.gen_range(0..20);
            let n = rng.gen_range(0..20);
            let mut a: Vec<i32> = (0..m).map(|_| rng.gen_range(-50..50)).collect();
            let mut b: Vec<i32> = (0..n).map(|_| rng.gen_range(-50..50)).collect();
            a.sort_unstable();
            b.sort_unstable();
            a.resize(m + n, 0);

            let mut optimal = a.clone();
            let mut baseline = a.clone();
            merge_into(&mut optimal, m, &b);
            merge_into_sorting(&mut baseline, m, &b);
            assert_eq!(optimal, baseline);
        }
    }
}
