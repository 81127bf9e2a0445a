use crate::Sequence;

/// Sorts `data[a..b]` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn heapsort<D>(data: &mut D, a: usize, b: usize)
where
    D: Sequence + ?Sized,
{
    // This binary heap respects the invariant `parent >= child`. Nodes are offsets from `a`, `end`
    // is the exclusive end of the heap.
    let sift_down = |data: &mut D, mut node: usize, end: usize| {
        loop {
            // `node` is a leaf.
            if node >= end / 2 {
                break;
            }

            // Children of `node`.
            let mut child = 2 * node + 1;

            // Choose the greater child.
            if child + 1 < end && data.less(a + child, a + child + 1) {
                child += 1;
            }

            // Stop if the invariant holds at `node`.
            if !data.less(a + node, a + child) {
                break;
            }

            // Swap `node` with the greater child, move one step down, and continue sifting.
            data.swap(a + node, a + child);
            node = child;
        }
    };

    let len = b - a;

    // Build the heap in linear time.
    for i in (0..len / 2).rev() {
        sift_down(data, i, len);
    }

    // Pop maximal elements from the heap.
    for i in (1..len).rev() {
        data.swap(a, a + i);
        sift_down(data, 0, i);
    }
}
