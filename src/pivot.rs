use crate::Sequence;

/// Swaps the index variables `a` and `b` so that `data[a] <= data[b]`.
///
/// Only the indices move, `data` is left untouched. Every exchange is counted in `swaps`.
#[inline]
fn sort2<D>(data: &mut D, a: &mut usize, b: &mut usize, swaps: &mut usize)
where
    D: Sequence + ?Sized,
{
    if data.less(*b, *a) {
        core::mem::swap(a, b);
        *swaps += 1;
    }
}

/// Swaps the index variables `a`, `b` and `c` so that `data[a] <= data[b] <= data[c]`.
#[inline]
fn sort3<D>(data: &mut D, a: &mut usize, b: &mut usize, c: &mut usize, swaps: &mut usize)
where
    D: Sequence + ?Sized,
{
    sort2(data, a, b, swaps);
    sort2(data, b, c, swaps);
    sort2(data, a, b, swaps);
}

/// Finds the median of `data[a - 1], data[a], data[a + 1]` and stores the index into `a`.
#[inline]
fn sort_adjacent<D>(data: &mut D, a: &mut usize, swaps: &mut usize)
where
    D: Sequence + ?Sized,
{
    let mut lo = *a - 1;
    let mut hi = *a + 1;
    sort3(data, &mut lo, a, &mut hi, swaps);
}

/// Chooses a pivot in `data[lo..hi]` and returns the index and `true` if the range is likely
/// already sorted.
///
/// Elements in `data[lo..hi]` might be reordered in the process.
///
/// * `[0, 8)`: static pivot at the lower quartile.
/// * `[8, SHORTEST_NINTHER)`: median-of-three.
/// * `[SHORTEST_NINTHER, ∞)`: Tukey's ninther.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn choose_pivot<D>(data: &mut D, lo: usize, hi: usize) -> (usize, bool)
where
    D: Sequence + ?Sized,
{
    // Minimum length to choose the median-of-medians method.
    // Shorter ranges use the simple median-of-three method.
    const SHORTEST_NINTHER: usize = 50;
    // Maximum number of swaps that can be performed in this function.
    const MAX_SWAPS: usize = 4 * 3;

    debug_assert!(lo < hi);

    let len = hi - lo;

    // Three indices near which we are going to choose a pivot.
    let len_div_4 = len / 4;
    let mut a = lo + len_div_4;
    let mut b = lo + len_div_4 * 2;
    let mut c = lo + len_div_4 * 3;

    if len < 8 {
        return (a, true);
    }

    // Counts the total number of swaps we are about to perform while sorting indices.
    let mut swaps = 0;

    if len >= SHORTEST_NINTHER {
        // Find medians in the neighborhoods of `a`, `b`, and `c`.
        sort_adjacent(data, &mut a, &mut swaps);
        sort_adjacent(data, &mut b, &mut swaps);
        sort_adjacent(data, &mut c, &mut swaps);
    }

    // Find the median among `a`, `b`, and `c` and store it into `b`.
    sort3(data, &mut a, &mut b, &mut c, &mut swaps);

    if swaps < MAX_SWAPS {
        (b, swaps == 0)
    } else {
        // The maximum number of swaps was performed. Chances are the range is descending or mostly
        // descending, so reversing will probably help sort it faster.
        reverse_range(data, lo, hi);
        (hi - 1 - (b - lo), true)
    }
}

/// Reverses `data[a..b]` in place.
fn reverse_range<D>(data: &mut D, a: usize, b: usize)
where
    D: Sequence + ?Sized,
{
    if b <= a {
        return;
    }

    let mut i = a;
    let mut j = b - 1;
    while i < j {
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Scatters some elements around in an attempt to break patterns that might cause imbalanced
/// partitions in quicksort.
///
/// The pseudorandom offset only depends on the length of the range, so the result is
/// reproducible for a given input.
#[cold]
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn break_patterns<D>(data: &mut D, a: usize, b: usize)
where
    D: Sequence + ?Sized,
{
    let len = b - a;
    if len >= 8 {
        // Pseudorandom number generator from the "Xorshift RNGs" paper by George Marsaglia.
        let mut random = len as u64;
        random ^= random << 13;
        random ^= random >> 17;
        random ^= random << 5;

        // All ones up to the highest set bit of `len`, i.e. the next power of two minus one. This
        // holds for any `len` up to `usize::MAX`, where a shifted modulus would overflow.
        let mask = usize::MAX >> len.leading_zeros();

        // Take it modulo a power of two first, then decrease by `len` until it fits into
        // `[0, len - 1]`. `other` is guaranteed to be less than `2 * len`.
        let mut other = (random as usize) & mask;
        if other >= len {
            other -= len;
        }

        // Some pivot candidates will be in the nearby of this index. Let's randomize them.
        let pos = a + len / 8;

        for i in 0..3 {
            data.swap(pos - 1 + i, a + other);
        }
    }
}
