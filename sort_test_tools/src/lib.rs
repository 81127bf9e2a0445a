//! Test and benchmark helpers shared by the sort implementations in this repository.

use std::cmp::Ordering;

pub mod patterns;

/// A slice sort under test, addressed through its comparator based entry point.
pub trait Sort {
    /// Name printed next to the seed and used in benchmark ids.
    fn name() -> String;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        Self::sort_by(arr, T::cmp);
    }
}
