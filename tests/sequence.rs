use std::cmp::Ordering;

use index_pdqsort::{is_sorted, sort, sort_slice_by_key, Reverse, Sequence, SliceBy};

use sort_test_tools::patterns;

/// Struct-of-arrays storage, sorted by `keys` while `names` follows along.
struct Table {
    keys: Vec<i32>,
    names: Vec<String>,
    swap_count: usize,
}

impl Table {
    fn new(keys: Vec<i32>) -> Self {
        let names = keys.iter().map(|key| format!("row-{key}")).collect();
        Self {
            keys,
            names,
            swap_count: 0,
        }
    }
}

impl Sequence for Table {
    fn len(&self) -> usize {
        self.keys.len()
    }

    fn less(&mut self, i: usize, j: usize) -> bool {
        self.keys[i] < self.keys[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.keys.swap(i, j);
        self.names.swap(i, j);
        self.swap_count += 1;
    }
}

#[test]
fn struct_of_arrays_moves_in_lockstep() {
    for len in [0, 1, 12, 13, 50, 1_000] {
        let mut table = Table::new(patterns::random_uniform(len, 0..100));
        sort(&mut table);

        assert!(table.keys.windows(2).all(|w| w[0] <= w[1]));
        for (key, name) in table.keys.iter().zip(&table.names) {
            assert_eq!(name, &format!("row-{key}"));
        }
    }
}

#[test]
fn sorted_input_needs_no_swaps() {
    let mut table = Table::new(patterns::ascending(1_000));
    sort(&mut table);

    assert_eq!(table.swap_count, 0);
    assert!(is_sorted(&mut table));
}

#[test]
fn reverse_sorts_descending() {
    let mut v = patterns::random(500);
    sort(&mut Reverse(v.as_mut_slice()));

    assert!(v.windows(2).all(|w| w[0] >= w[1]));
    assert!(is_sorted(&mut Reverse(&mut v)));
}

#[test]
fn double_reverse_is_ascending() {
    let mut v = patterns::pipe_organ(300);
    let mut expected = v.clone();
    expected.sort();

    sort(&mut Reverse(Reverse(&mut v)));
    assert_eq!(v, expected);
}

#[test]
fn slice_by_custom_order() {
    // Even numbers first, each group ascending.
    let mut v = patterns::random_uniform(200, -50..50);
    let key = |x: &i32| (x.rem_euclid(2), *x);
    sort(&mut SliceBy::new(&mut v, |a, b| key(a) < key(b)));

    let mut expected = v.clone();
    expected.sort_by_key(key);
    assert_eq!(v, expected);
}

#[test]
fn slice_by_counts_comparisons() {
    let mut v = patterns::random(1_000);
    let mut comp_count = 0usize;

    sort(&mut SliceBy::new(&mut v, |a, b| {
        comp_count += 1;
        a < b
    }));

    assert!(v.windows(2).all(|w| w[0] <= w[1]));
    assert!(comp_count > 0 && comp_count < 6 * 1_000 * 10);
}

#[test]
fn vec_and_nested_borrows() {
    let mut v = vec!["pear", "apple", "fig", "banana"];
    sort(&mut v);
    assert_eq!(v, ["apple", "banana", "fig", "pear"]);

    let mut v = vec![3u8, 1, 2];
    sort(&mut &mut v);
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn sort_slice_by_key_orders_by_key() {
    let mut v = vec!["ccc", "a", "bb", "dddd", ""];
    sort_slice_by_key(&mut v, |s| s.len());
    assert_eq!(v, ["", "a", "bb", "ccc", "dddd"]);
}

#[test]
fn sort_slice_by_partial_order() {
    let mut v = vec![2.5f64, -1.0, 0.0, 9.75, -3.5];
    index_pdqsort::sort_slice_by(&mut v, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    assert_eq!(v, [-3.5, -1.0, 0.0, 2.5, 9.75]);
}

#[test]
fn is_sorted_edge_cases() {
    assert!(is_sorted(&mut Vec::<i32>::new()));
    assert!(is_sorted(&mut vec![1]));
    assert!(is_sorted(&mut vec![1, 1, 1]));
    assert!(!is_sorted(&mut vec![2, 1]));
    assert!(!is_sorted(&mut vec![1, 2, 3, 0]));
}

#[test]
fn inconsistent_less_keeps_elements() {
    let mut v = patterns::random(2_000);
    let mut expected = v.clone();
    expected.sort();

    // Claims every pair is ordered both ways.
    sort(&mut SliceBy::new(&mut v, |_, _| true));

    v.sort();
    assert_eq!(v, expected);
}
