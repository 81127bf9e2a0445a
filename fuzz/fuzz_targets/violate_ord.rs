#![no_main]

use libfuzzer_sys::fuzz_target;

// The first half of the input drives the answers of the comparison function, the second half is
// sorted. Whatever the answers, the sort must terminate and keep every element.
fuzz_target!(|data: &[u8]| {
    let (answers, values) = data.split_at(data.len() / 2);
    if answers.is_empty() {
        return;
    }

    let mut v = values.to_vec();
    let mut answer_idx = 0;
    index_pdqsort::sort(&mut index_pdqsort::SliceBy::new(&mut v, |_, _| {
        let answer = answers[answer_idx % answers.len()] & 1 == 1;
        answer_idx += 1;
        answer
    }));

    let mut expected = values.to_vec();
    expected.sort_unstable();
    v.sort_unstable();
    assert_eq!(v, expected);
});
