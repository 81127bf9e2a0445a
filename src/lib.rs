//! Pattern-defeating quicksort over an index based sequence abstraction.
//!
//! The sort only needs three things from the sequence it is sorting, its length, a strict
//! comparison of the elements at two positions and a way to swap two elements, see [`Sequence`].
//! This makes it usable for any randomly indexable storage, not only slices.
//!
//! # Properties
//!
//! - Best-case running time is `O(n)`, e.g. for already sorted, reverse sorted and all equal inputs.
//! - Worst-case running time is `O(n log n)`.
//! - Unstable, i.e. may reorder equal elements.
//! - Does not allocate, recursion depth is `O(log n)`.
//! - Deterministic, the pattern breaking randomization is seeded from the range length.
//!
//! # Current implementation
//!
//! The algorithm is based on [pattern-defeating quicksort][pdqsort] by Orson Peters, which
//! combines the fast average case of randomized quicksort with the fast worst case of heapsort,
//! while achieving linear time on inputs with certain patterns. It does not include the
//! optimizations from BlockQuicksort, partitioning swaps one pair at a time.
//!
//! # Examples
//!
//! ```
//! let mut v = [5, 3, 8, 3, 9, 1];
//!
//! index_pdqsort::sort_slice(&mut v);
//! assert_eq!(v, [1, 3, 3, 5, 8, 9]);
//!
//! index_pdqsort::sort_slice_by(&mut v, |a, b| b.cmp(a));
//! assert_eq!(v, [9, 8, 5, 3, 3, 1]);
//!
//! index_pdqsort::sort_slice_by_key(&mut v, |k| k % 3);
//! assert!(index_pdqsort::is_sorted(&mut index_pdqsort::SliceBy::new(&mut v, |a, b| a % 3 < b % 3)));
//! ```
//!
//! [pdqsort]: https://github.com/orlp/pdqsort

use core::cmp::Ordering;

mod heapsort;
mod partition;
mod pivot;
mod quicksort;
mod sequence;
mod smallsort;

pub use sequence::{Reverse, Sequence, SliceBy};

/// Sorts `data`, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// `data.len()` is queried once, after that only [`Sequence::less`] and [`Sequence::swap`] are
/// used. If `less` is not a strict weak ordering the order of the elements afterwards is
/// unspecified, but all original elements will remain in `data`.
///
/// # Examples
///
/// ```
/// // Sort keys and the values attached to them in lockstep.
/// struct Pairs<'a> {
///     keys: &'a mut [u32],
///     values: &'a mut [char],
/// }
///
/// impl index_pdqsort::Sequence for Pairs<'_> {
///     fn len(&self) -> usize {
///         self.keys.len()
///     }
///
///     fn less(&mut self, i: usize, j: usize) -> bool {
///         self.keys[i] < self.keys[j]
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.keys.swap(i, j);
///         self.values.swap(i, j);
///     }
/// }
///
/// let mut keys = [3, 1, 2];
/// let mut values = ['c', 'a', 'b'];
/// index_pdqsort::sort(&mut Pairs { keys: &mut keys, values: &mut values });
///
/// assert_eq!(keys, [1, 2, 3]);
/// assert_eq!(values, ['a', 'b', 'c']);
/// ```
#[inline]
pub fn sort<D>(data: &mut D)
where
    D: Sequence + ?Sized,
{
    let len = data.len();
    if len <= 1 {
        return;
    }

    // Limit the number of imbalanced partitions to `floor(log2(len)) + 1`.
    let limit = usize::BITS - len.leading_zeros();

    quicksort::recurse(data, 0, len, None, limit);
}

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// index_pdqsort::sort_slice(&mut v);
/// assert_eq!(v, [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort_slice<T>(v: &mut [T])
where
    T: Ord,
{
    sort(v);
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified. An order is a
/// total order if it is (for all `a`, `b` and `c`):
///
/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
///
/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`, we can use
/// `partial_cmp` as our sort function when we know the slice doesn't contain a `NaN`.
///
/// ```
/// let mut floats = [5f64, 4.0, 1.0, 3.0, 2.0];
/// index_pdqsort::sort_slice_by(&mut floats, |a, b| a.partial_cmp(b).unwrap());
/// assert_eq!(floats, [1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
#[inline]
pub fn sort_slice_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort(&mut SliceBy::new(v, |a, b| compare(a, b) == Ordering::Less));
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
///
/// The key function is called twice per comparison.
///
/// ```
/// let mut v = [-5i32, 4, 1, -3, 2];
///
/// index_pdqsort::sort_slice_by_key(&mut v, |k| k.abs());
/// assert_eq!(v, [1, 2, -3, 4, -5]);
/// ```
#[inline]
pub fn sort_slice_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    sort(&mut SliceBy::new(v, |a, b| f(a).lt(&f(b))));
}

/// Returns `true` if `data` is sorted, i.e. no element is less than its predecessor.
///
/// ```
/// assert!(index_pdqsort::is_sorted(&mut [1, 2, 2, 9][..]));
/// assert!(!index_pdqsort::is_sorted(&mut [1, 3, 2, 4][..]));
/// ```
pub fn is_sorted<D>(data: &mut D) -> bool
where
    D: Sequence + ?Sized,
{
    let len = data.len();
    for i in (1..len).rev() {
        if data.less(i, i - 1) {
            return false;
        }
    }

    true
}
