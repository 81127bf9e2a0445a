use crate::Sequence;

/// Sorts `data[a..b]` using insertion sort, which is *O*(*n*^2) worst-case.
///
/// Used as the base case of the recursion, where ranges are short enough that the low constant
/// factor wins.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn insertion_sort<D>(data: &mut D, a: usize, b: usize)
where
    D: Sequence + ?Sized,
{
    for i in (a + 1)..b {
        let mut j = i;
        while j > a && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Partially sorts `data[a..b]` by shifting several out-of-order elements around.
///
/// Returns `true` if the range is sorted at the end. This function is *O*(*n*) worst-case.
#[cold]
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partial_insertion_sort<D>(data: &mut D, a: usize, b: usize) -> bool
where
    D: Sequence + ?Sized,
{
    // Maximum number of adjacent out-of-order pairs that will get shifted.
    const MAX_STEPS: usize = 5;
    // If the range is shorter than this, don't shift any elements.
    const SHORTEST_SHIFTING: usize = 50;

    let mut i = a + 1;

    for _ in 0..MAX_STEPS {
        // Find the next pair of adjacent out-of-order elements.
        while i < b && !data.less(i, i - 1) {
            i += 1;
        }

        // Are we done?
        if i == b {
            return true;
        }

        // Don't shift elements on short ranges, that has a performance cost.
        if b - a < SHORTEST_SHIFTING {
            return false;
        }

        // Swap the found pair of elements. This puts them in correct order.
        data.swap(i - 1, i);

        // Shift the smaller element to the left.
        if i - a >= 2 {
            let mut j = i - 1;
            while j > a && data.less(j, j - 1) {
                data.swap(j, j - 1);
                j -= 1;
            }
        }

        // Shift the greater element to the right.
        if b - i >= 2 {
            let mut j = i + 1;
            while j < b && data.less(j, j - 1) {
                data.swap(j, j - 1);
                j += 1;
            }
        }
    }

    // Didn't manage to sort the range in the limited number of steps.
    false
}
