use tola_ranges::prelude::*;
use tola_ranges::{category_of, enumerate, zip, Forward, Input, Zip};

mod common;

#[test]
fn test_zip_writes_through_both_sequences() {
    let mut vec = vec![0i32; 5];
    let mut vec2 = vec![0.0f32; 5];

    let rng = zip(Range::from_cells(&mut vec), Range::from_cells(&mut vec2));

    for (idx, (i, f)) in enumerate(rng) {
        i.set(idx as i32);
        f.set(idx as f32);
    }

    assert_eq!(vec, [0, 1, 2, 3, 4]);
    assert_eq!(vec2, [0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_zip_yields_len_pairs() {
    let left = vec![1, 2, 3];
    let right = vec!["one", "two", "three"];
    let rng = zip(&left, &right);
    assert_eq!(rng.distance(), 3);
    assert_eq!(rng.into_iter().count(), 3);
}

#[test]
fn test_zip_category_is_the_weaker_one() {
    let vec = vec![1, 2, 3];
    let list_items = vec![4, 5, 6];

    let random = zip(&vec, &vec);
    assert_eq!(category_of(&random.begin()), CategoryLevel::RandomAccess);

    let mixed = zip(&vec, common::list(&list_items));
    assert_eq!(category_of(&mixed.begin()), CategoryLevel::Bidirectional);

    let input = zip(common::counter(0, 3), &vec);
    assert_eq!(category_of(&input.begin()), CategoryLevel::Input);
}

#[test]
fn test_zip_category_levels_meet() {
    assert_eq!(
        <Forward as Category>::LEVEL.meet(CategoryLevel::RandomAccess),
        Some(CategoryLevel::Forward)
    );
    assert_eq!(<Input as Category>::LEVEL.meet(CategoryLevel::Output), None);
}

#[test]
fn test_zip_mixed_bidirectional_steps_back() {
    let vec = vec![1, 2, 3];
    let list_items = vec![4, 5, 6];
    let rng = zip(&vec, common::list(&list_items));
    let mut pos = rng.end();
    pos.retreat();
    assert_eq!(pos.get(), (&3, &6));
}

// =============================================================================
// Unequal lengths: equality needs both sides
// =============================================================================

#[test]
fn test_zip_unequal_lengths_never_reach_end() {
    let short = vec![1, 2];
    let long = vec![1, 2, 3, 4];
    let rng = zip(&short, &long);

    let mut pos = rng.begin();
    for _ in 0..short.len() {
        assert_ne!(pos, rng.end());
        pos.advance();
    }
    // The short side sits on its end, the long side does not: still unequal.
    assert_eq!(pos.first_base(), rng.end().first_base());
    assert_ne!(pos.second_base(), rng.end().second_base());
    assert_ne!(pos, rng.end());
}

#[test]
fn test_zip_ordering_needs_both_sides() {
    let a = vec![1, 2, 3];
    let b = vec![1, 2, 3];
    let rng = zip(&a, &b);
    let begin = rng.begin();
    let second = begin.next_position();

    assert!(begin < second);
    assert!(second > begin);
    assert!(begin <= rng.begin());

    let ahead_first = Zip::new(*second.first_base(), *begin.second_base());
    let ahead_second = Zip::new(*begin.first_base(), *second.second_base());
    assert_eq!(ahead_first.partial_cmp(&ahead_second), None);
}

#[test]
fn test_zip_maker_takes_a_pair() {
    let a = vec![1, 2];
    let b = vec![10, 20];
    let sums = make::zip() | make::transform(|(x, y): (&i32, &i32)| x + y);
    let out: Vec<i32> = sums.apply((&a, &b)).into_iter().collect();
    assert_eq!(out, [11, 22]);
}

#[test]
fn test_zip_le_is_not_greater() {
    let a = vec![1, 2, 3];
    let b = vec![4, 5, 6];
    let rng = zip(&a, &b);
    let begin = rng.begin();
    let one_ahead = Zip::new(*begin.first_base(), *begin.second_base()).next_position();
    let first_only = Zip::new(*one_ahead.first_base(), *begin.second_base());

    // Ahead on the first side, level on the second.
    assert!(begin <= first_only);
    assert!(first_only >= begin);
    assert!(!begin.lt(&first_only));
    assert!(begin <= one_ahead);
    assert!(!one_ahead.le(&begin));
}
