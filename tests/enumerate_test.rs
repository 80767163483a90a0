use tola_ranges::prelude::*;
use tola_ranges::{category_of, enumerate, enumerate_from, END_INDEX};

mod common;

#[test]
fn test_enumerate_yields_index_value_pairs() {
    let vec = vec!['a', 'b', 'c'];
    let pairs: Vec<(isize, char)> = enumerate(&vec).into_iter().map(|(i, c)| (i, *c)).collect();
    assert_eq!(pairs, [(0, 'a'), (1, 'b'), (2, 'c')]);
}

#[test]
fn test_enumerate_writes_in_place() {
    let mut vec = vec![0; 10];

    for (idx, cur) in enumerate(Range::from_cells(&mut vec)) {
        cur.set(idx as i32);
    }

    assert_eq!(vec, (0..10).collect::<Vec<i32>>());
}

#[test]
fn test_enumerate_keeps_category() {
    let vec = vec![1];
    assert_eq!(
        category_of(&enumerate(&vec).begin()),
        CategoryLevel::RandomAccess
    );
    assert_eq!(
        category_of(&enumerate(common::list(&vec)).begin()),
        CategoryLevel::Bidirectional
    );
    assert_eq!(
        category_of(&enumerate(common::counter(0, 3)).begin()),
        CategoryLevel::Input
    );
}

#[test]
fn test_enumerate_end_carries_sentinel_index() {
    let vec = vec![5, 6];
    let rng = enumerate_from(&vec, 7);
    assert_eq!(rng.begin().count(), 7);
    assert_eq!(rng.end().count(), END_INDEX);
    assert_eq!(rng.distance(), 2);
}

#[test]
fn test_enumerate_over_input_position() {
    let numbers: Vec<(isize, u32)> = enumerate(common::counter(10, 13)).into_iter().collect();
    assert_eq!(numbers, [(0, 10), (1, 11), (2, 12)]);
}
