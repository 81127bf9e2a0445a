//! The capability set the sort operates on, and adapters for common sequence shapes.

/// A randomly indexable, mutable sequence of totally ordered elements.
///
/// This is everything [`sort`](crate::sort) needs from a caller: the number of elements, a strict
/// comparison between the elements at two positions and a way to exchange two elements. Elements
/// are never copied or moved out of the sequence, so any backing storage works, including
/// several parallel arrays that have to be permuted together.
///
/// `less` must implement a strict weak ordering, that is for all `i`, `j` and `k`:
///
/// * irreflexive: `less(i, i)` is false,
/// * transitive: `less(i, j)` and `less(j, k)` implies `less(i, k)`,
/// * incomparability is transitive: if neither `less(i, j)` nor `less(j, i)` and neither
///   `less(j, k)` nor `less(k, j)`, the same holds for `i` and `k`.
///
/// If the ordering is not a strict weak ordering the resulting order of the elements is
/// unspecified, but the sort still terminates and the sequence still holds all of its original
/// elements.
///
/// `less` takes `&mut self` so that implementations may wrap `FnMut` comparators or count
/// comparisons.
pub trait Sequence {
    /// Number of elements in the sequence.
    ///
    /// Any length up to `usize::MAX` is supported, the sort never computes an index past it.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the element at `i` must sort before the element at `j`.
    fn less(&mut self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

impl<T: Ord> Sequence for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn less(&mut self, i: usize, j: usize) -> bool {
        self[i].lt(&self[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

impl<T: Ord> Sequence for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn less(&mut self, i: usize, j: usize) -> bool {
        self[i].lt(&self[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

impl<D: Sequence + ?Sized> Sequence for &mut D {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn less(&mut self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j);
    }
}

/// A slice ordered by a caller supplied "is less" predicate.
///
/// # Examples
///
/// ```
/// use index_pdqsort::SliceBy;
///
/// let mut v = [-5i32, 4, 1, -3, 2];
/// index_pdqsort::sort(&mut SliceBy::new(&mut v, |a: &i32, b: &i32| a.abs() < b.abs()));
/// assert_eq!(v, [1, 2, -3, 4, -5]);
/// ```
pub struct SliceBy<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    v: &'a mut [T],
    is_less: F,
}

impl<'a, T, F> SliceBy<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    pub fn new(v: &'a mut [T], is_less: F) -> Self {
        Self { v, is_less }
    }
}

impl<T, F> Sequence for SliceBy<'_, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    #[inline]
    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn less(&mut self, i: usize, j: usize) -> bool {
        (self.is_less)(&self.v[i], &self.v[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.v.swap(i, j);
    }
}

/// Inverts the order of the wrapped sequence, sorting it descending.
///
/// # Examples
///
/// ```
/// use index_pdqsort::Reverse;
///
/// let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// index_pdqsort::sort(&mut Reverse(&mut v));
/// assert_eq!(v, [9, 6, 5, 4, 3, 2, 1, 1]);
/// ```
#[derive(Debug)]
pub struct Reverse<D>(pub D);

impl<D: Sequence> Sequence for Reverse<D> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn less(&mut self, i: usize, j: usize) -> bool {
        self.0.less(j, i)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }
}
