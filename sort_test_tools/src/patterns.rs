//! Seeded input generators for tests and benchmarks.
//!
//! Every generator draws from a `StdRng` seeded with [`random_init_seed`], so a failing test can
//! be replayed by exporting the printed seed as `OVERRIDE_SEED`.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;

/// A generator that maps a length to an input of exactly that length.
pub type PatternFn = fn(usize) -> Vec<i32>;

/// The patterns every sort is checked and measured against, by name.
pub fn named() -> Vec<(&'static str, PatternFn)> {
    vec![
        ("random", random),
        ("random_d4", |len| random_uniform(len, 0..4)),
        ("random_d256", |len| random_uniform(len, 0..256)),
        ("random_binary", |len| random_uniform(len, 0..=1)),
        ("random_log2", |len| random_uniform(len, 0..=log2_round(len) as i32)),
        ("random_z1", |len| random_zipf(len, 1.0)),
        ("random_z2", |len| random_zipf(len, 2.0)),
        ("random_s95", |len| random_sorted(len, 95.0)),
        ("all_equal", all_equal),
        ("ascending", ascending),
        ("descending", descending),
        ("saw_ascending", |len| saw_ascending(len, log2_round(len))),
        ("saw_descending", |len| saw_descending(len, log2_round(len))),
        ("saw_mixed", |len| saw_mixed(len, log2_round(len))),
        ("saw_mixed_range", |len| saw_mixed_range(len, 20..50)),
        ("pipe_organ", pipe_organ),
    ]
}

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Values drawn uniformly from `range`, e.g. `0..4` for a handful of distinct values.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    new_rng().sample_iter(dist).take(len).collect()
}

/// Values following Zipf's law, few values are very frequent and most are rare.
///
/// An empty vector for `len == 0`, the distribution needs at least one element.
#[allow(deprecated)] // `zipf` points to `rand_distr::Zipf`, which the dependency tree doesn't carry.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let Ok(dist) = zipf::ZipfDistribution::new(len, exponent) else {
        return Vec::new();
    };

    new_rng()
        .sample_iter(dist)
        .take(len)
        .map(|val| val as i32)
        .collect()
}

/// Random values where the first `sorted_percent` percent are already in ascending order.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// `saw_count` ascending runs of equal length.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, |_| (run_len(len, saw_count), Run::Ascending))
}

/// `saw_count` descending runs of equal length.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, |_| (run_len(len, saw_count), Run::Descending))
}

/// `saw_count` runs of equal length, each randomly ascending or descending.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, |rng| (run_len(len, saw_count), Run::random(rng)))
}

/// Randomly ascending or descending runs with a random length in `run_lens`.
pub fn saw_mixed_range(len: usize, run_lens: std::ops::Range<usize>) -> Vec<i32> {
    let dist = Uniform::from(run_lens);
    saws(len, |rng| (rng.sample(dist), Run::random(rng)))
}

/// An ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (first_half, second_half) = v.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// Makes every following pattern call draw from a fresh seed.
///
/// By default `patterns::random(4)` yields the same values for the whole process, which is what
/// tests want. Benchmarks call this so they don't measure one lucky input over and over.
pub fn use_random_seed_each_time() {
    assert!(
        get_or_init_seed().from_env.is_none(),
        "Using use_random_seed_each_time conflicts with the OVERRIDE_SEED environment variable."
    );

    RANDOM_EACH_TIME.store(true, Ordering::Relaxed);
}

/// The seed of the next pattern, fixed per process unless [`use_random_seed_each_time`] was
/// called.
pub fn random_init_seed() -> u64 {
    if RANDOM_EACH_TIME.load(Ordering::Relaxed) {
        thread_rng().gen()
    } else {
        get_or_init_seed().value
    }
}

// --- Private ---

#[derive(Copy, Clone)]
enum Run {
    Ascending,
    Descending,
}

impl Run {
    fn random(rng: &mut StdRng) -> Self {
        if rng.gen() {
            Run::Ascending
        } else {
            Run::Descending
        }
    }
}

#[derive(Copy, Clone)]
struct Seed {
    value: u64,
    from_env: Option<u64>,
}

static SEED: OnceCell<Seed> = OnceCell::new();
static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn get_or_init_seed() -> Seed {
    *SEED.get_or_init(|| {
        let from_env = env::var("OVERRIDE_SEED").ok().map(|seed| {
            u64::from_str(seed.trim())
                .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: {seed:?}"))
        });

        Seed {
            value: from_env.unwrap_or_else(|| thread_rng().gen()),
            from_env,
        }
    })
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn log2_round(len: usize) -> usize {
    (len as f64).log2().round().max(0.0) as usize
}

fn run_len(len: usize, saw_count: usize) -> usize {
    (len / saw_count.max(1)).max(1)
}

/// Fills `len` random values and sorts consecutive runs, `next_run` picks each run's length and
/// direction.
fn saws(len: usize, mut next_run: impl FnMut(&mut StdRng) -> (usize, Run)) -> Vec<i32> {
    let mut v = random(len);
    let mut rng = new_rng();

    let mut start = 0;
    while start < len {
        let (run_len, run) = next_run(&mut rng);
        let end = (start + run_len.max(1)).min(len);
        let chunk = &mut v[start..end];
        match run {
            Run::Ascending => chunk.sort_unstable(),
            Run::Descending => chunk.sort_unstable_by(|a, b| b.cmp(a)),
        }

        start = end;
    }

    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_patterns_have_requested_len() {
        for (name, pattern_fn) in named() {
            for len in [0, 1, 2, 7, 100] {
                assert_eq!(pattern_fn(len).len(), len, "pattern: {name}");
            }
        }
    }

    #[test]
    fn fixed_seed_per_process() {
        assert_eq!(random(20), random(20));
        assert_eq!(random_init_seed(), random_init_seed());
    }

    #[test]
    fn saws_are_sorted_runs() {
        let v = saw_ascending(100, 4);
        assert!(v.chunks(25).all(|run| run.windows(2).all(|w| w[0] <= w[1])));

        let v = saw_descending(100, 4);
        assert!(v.chunks(25).all(|run| run.windows(2).all(|w| w[0] >= w[1])));
    }

    #[test]
    fn pipe_organ_shape() {
        let v = pipe_organ(101);
        assert!(v[..50].windows(2).all(|w| w[0] <= w[1]));
        assert!(v[50..].windows(2).all(|w| w[0] >= w[1]));
    }
}
