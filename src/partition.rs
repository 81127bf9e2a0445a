use crate::Sequence;

/// Partitions `data[a..b]` into elements smaller than `data[pivot]`, followed by elements greater
/// than or equal to `data[pivot]`, with the pivot placed in between.
///
/// Returns a tuple of:
///
/// 1. The final position of the pivot.
/// 2. True if `data[a..b]` was already partitioned, i.e. no element other than the pivot had to
///    move.
///
/// After the call every element in `data[a..mid]` is not greater than the pivot and every element
/// in `data[mid + 1..b]` is not less than the pivot.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition<D>(data: &mut D, a: usize, b: usize, pivot: usize) -> (usize, bool)
where
    D: Sequence + ?Sized,
{
    debug_assert!(a < b && (a..b).contains(&pivot));

    // Place the pivot at the beginning of the range.
    data.swap(a, pivot);

    let mut i = a + 1;
    let mut j = b - 1;

    // Find the first pair of out-of-order elements. `j` never drops below `a`, because `i` starts
    // at `a + 1`.
    while i <= j && data.less(i, a) {
        i += 1;
    }
    while i <= j && !data.less(j, a) {
        j -= 1;
    }

    // The cursors crossed without finding a single misplaced pair.
    if i > j {
        data.swap(j, a);
        return (j, true);
    }

    data.swap(i, j);
    i += 1;
    j -= 1;

    loop {
        while i <= j && data.less(i, a) {
            i += 1;
        }
        while i <= j && !data.less(j, a) {
            j -= 1;
        }
        if i > j {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }

    // Place the pivot between the two partitions.
    data.swap(j, a);

    (j, false)
}

/// Partitions `data[a..b]` into elements equal to `data[pivot]` followed by elements greater than
/// `data[pivot]`.
///
/// Returns the end of the equal block, the pivot included. It is assumed that `data[a..b]` does
/// not contain elements smaller than the pivot.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition_equal<D>(data: &mut D, a: usize, b: usize, pivot: usize) -> usize
where
    D: Sequence + ?Sized,
{
    debug_assert!(a < b && (a..b).contains(&pivot));

    data.swap(a, pivot);

    let mut l = a + 1;
    let mut r = b;

    loop {
        // Skip elements equal to the pivot.
        while l < r && !data.less(a, l) {
            l += 1;
        }
        // Skip elements greater than the pivot.
        while l < r && data.less(a, r - 1) {
            r -= 1;
        }

        if l >= r {
            break;
        }

        r -= 1;
        data.swap(l, r);
        l += 1;
    }

    l
}

#[cfg(test)]
mod tests {
    use super::*;

    use sort_test_tools::patterns;

    fn check_partitioned(v: &[i32], a: usize, b: usize, mid: usize) {
        assert!((a..b).contains(&mid));
        let pivot = v[mid];
        assert!(v[a..mid].iter().all(|&x| x <= pivot), "left of {mid}: {v:?}");
        assert!(v[mid + 1..b].iter().all(|&x| x >= pivot), "right of {mid}: {v:?}");
    }

    #[test]
    fn partition_postcondition() {
        let len_pivot_pairs = [
            (1, 0),
            (2, 0),
            (2, 1),
            (3, 1),
            (13, 6),
            (50, 0),
            (50, 49),
            (100, 37),
            (2_048, 1_000),
        ];

        for (len, pivot) in len_pivot_pairs {
            for mut v in [
                patterns::random(len),
                patterns::random_uniform(len, 0..3),
                patterns::ascending(len),
                patterns::descending(len),
                patterns::all_equal(len),
                patterns::pipe_organ(len),
            ] {
                let mut expected = v.clone();
                expected.sort();

                let (mid, _) = partition(v.as_mut_slice(), 0, len, pivot);
                check_partitioned(&v, 0, len, mid);

                // Still a permutation of the input.
                v.sort();
                assert_eq!(v, expected);
            }
        }
    }

    #[test]
    fn partition_random_pivots() {
        let pivots = patterns::random_uniform(200, 0..1_000);
        for (round, &pivot) in pivots.iter().enumerate() {
            let len = 1_000;
            let mut v = patterns::random_uniform(len, 0..=(round as i32 + 1));
            let (mid, _) = partition(v.as_mut_slice(), 0, len, pivot as usize);
            check_partitioned(&v, 0, len, mid);
        }
    }

    #[test]
    fn partition_reports_already_partitioned() {
        let mut v = patterns::ascending(100);
        assert_eq!(partition(v.as_mut_slice(), 0, 100, 0), (0, true));
        assert_eq!(v, patterns::ascending(100));

        // Pivot 40 at the front swaps places with 0, everything else is already in place.
        let mut v = patterns::ascending(100);
        let (mid, was_partitioned) = partition(v.as_mut_slice(), 0, 100, 40);
        assert_eq!(mid, 40);
        assert!(was_partitioned);
        assert_eq!(v, patterns::ascending(100));

        let mut v = patterns::descending(100);
        let (mid, was_partitioned) = partition(v.as_mut_slice(), 0, 100, 50);
        assert!(!was_partitioned);
        check_partitioned(&v, 0, 100, mid);
    }

    #[test]
    fn partition_sub_range() {
        let mut v = vec![i32::MAX; 3];
        v.extend(patterns::random(200));
        v.extend([i32::MIN; 3]);

        let (mid, _) = partition(v.as_mut_slice(), 3, 203, 150);
        check_partitioned(&v, 3, 203, mid);
        assert!(v[..3].iter().all(|&x| x == i32::MAX));
        assert!(v[203..].iter().all(|&x| x == i32::MIN));
    }

    #[test]
    fn partition_equal_splits_equal_and_greater() {
        let mut v = vec![5, 9, 5, 7, 5, 5, 6, 5, 8, 5];
        let mid = partition_equal(v.as_mut_slice(), 0, 10, 2);

        assert_eq!(mid, 6);
        assert!(v[..mid].iter().all(|&x| x == 5));
        assert!(v[mid..].iter().all(|&x| x > 5));
    }

    #[test]
    fn partition_equal_all_equal() {
        let mut v = patterns::all_equal(1_000);
        assert_eq!(partition_equal(v.as_mut_slice(), 0, 1_000, 500), 1_000);
        assert_eq!(v, patterns::all_equal(1_000));
    }

    #[test]
    fn partition_equal_linear_comparisons() {
        let len = 1_000;
        let mut v = patterns::random_uniform(len, 0..2);
        let min = *v.iter().min().unwrap();
        let pivot = v.iter().position(|&x| x == min).unwrap();

        let mut comp_count = 0;
        let mut seq = crate::SliceBy::new(v.as_mut_slice(), |a: &i32, b: &i32| {
            comp_count += 1;
            a < b
        });
        let mid = partition_equal(&mut seq, 0, len, pivot);
        drop(seq);

        assert!(comp_count <= len + 1, "comparisons: {comp_count}");
        assert!(v[..mid].iter().all(|&x| x == min));
        assert!(v[mid..].iter().all(|&x| x > min));
    }
}
