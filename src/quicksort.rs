use core::cmp;

use crate::heapsort::heapsort;
use crate::partition::{partition, partition_equal};
use crate::pivot::{break_patterns, choose_pivot};
use crate::smallsort::{insertion_sort, partial_insertion_sort};
use crate::Sequence;

/// Ranges of at most this length are sorted with insertion sort.
pub(crate) const MAX_INSERTION: usize = 12;

/// Sorts `data[a..b]` recursively.
///
/// If the range had a predecessor in the original sequence, its index is specified as `pred`. It
/// always lies left of `a`, so partitioning the range never moves it.
///
/// `limit` is the number of allowed imbalanced partitions before switching to `heapsort`. If zero,
/// this function will immediately switch to heapsort.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn recurse<D>(
    data: &mut D,
    mut a: usize,
    mut b: usize,
    mut pred: Option<usize>,
    mut limit: u32,
) where
    D: Sequence + ?Sized,
{
    // True if the last partitioning was reasonably balanced.
    let mut was_balanced = true;
    // True if the last partitioning didn't shuffle elements (the range was already partitioned).
    let mut was_partitioned = true;

    loop {
        let len = b - a;

        if len <= MAX_INSERTION {
            insertion_sort(data, a, b);
            return;
        }

        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(n * log(n))` worst-case.
        if limit == 0 {
            heapsort(data, a, b);
            return;
        }

        // If the last partitioning was imbalanced, try breaking patterns in the range by shuffling
        // some elements around. Hopefully we'll choose a better pivot this time.
        if !was_balanced {
            break_patterns(data, a, b);
            limit -= 1;
        }

        // Choose a pivot and try guessing whether the range is already sorted.
        let (pivot, likely_sorted) = choose_pivot(data, a, b);

        // If the last partitioning was decently balanced and didn't shuffle elements, and if pivot
        // selection predicts the range is likely already sorted...
        if was_balanced && was_partitioned && likely_sorted {
            // Try identifying several out-of-order elements and shifting them to correct
            // positions. If the range ends up being completely sorted, we're done.
            if partial_insertion_sort(data, a, b) {
                return;
            }
        }

        // If the chosen pivot is equal to the predecessor, then it's the smallest element in the
        // range. Partition the range into elements equal to and elements greater than the pivot.
        // This case is usually hit when the range contains many duplicate elements.
        if let Some(p) = pred {
            if !data.less(p, pivot) {
                let mid = partition_equal(data, a, b, pivot);

                // Continue sorting elements greater than the pivot.
                a = mid;
                continue;
            }
        }

        // Partition the range.
        let (mid, was_p) = partition(data, a, b, pivot);
        was_partitioned = was_p;

        // Split the range into `left`, `pivot`, and `right`.
        let left_len = mid - a;
        let right_len = b - (mid + 1);
        was_balanced = cmp::min(left_len, right_len) >= len / 8;

        // Recurse into the shorter side only in order to minimize the total number of recursive
        // calls and consume less stack space. Then just continue with the longer side (this is
        // akin to tail recursion).
        if left_len <= right_len {
            recurse(data, a, mid, pred, limit);
            a = mid + 1;
            pred = Some(mid);
        } else {
            recurse(data, mid + 1, b, Some(mid), limit);
            b = mid;
        }
    }
}
