use tola_ranges::prelude::*;
use tola_ranges::{category_of, transform, SlicePosition};

mod common;

#[test]
fn test_transform_yields_mapped_elements() {
    let vec: Vec<i32> = (0..10).collect();
    let rng = transform(&vec, |i: &i32| i * 2);

    let mut count = 0;
    for (i, cur) in rng.into_iter().enumerate() {
        assert_eq!(cur, i as i32 * 2);
        count += 1;
    }
    assert_eq!(count, vec.len());
}

#[test]
fn test_transform_keeps_category_and_distance() {
    let vec: Vec<i32> = (0..10).collect();
    let rng = transform(&vec, |i: &i32| i64::from(*i));
    let base = Range::from_slice(&vec);

    assert_eq!(category_of(&rng.begin()), category_of(&base.begin()));
    assert_eq!(rng.distance(), base.distance());
    assert_eq!(rng.end().distance_to(&rng.begin()), -10);
}

#[test]
fn test_transform_adds_no_size_for_stateless_function() {
    let vec = vec![1u16, 2, 3];
    let rng = transform(&vec, |v: &u16| u32::from(*v) << 1);
    assert_eq!(size_of_val(&rng.begin()), size_of::<SlicePosition<'_, u16>>());
}

#[test]
fn test_transform_over_bidirectional_base() {
    let items = [1, 2, 3];
    let rng = transform(common::list(&items), |v: &i32| v * 10);
    assert_eq!(category_of(&rng.begin()), CategoryLevel::Bidirectional);

    let mut pos = rng.end();
    pos.retreat();
    assert_eq!(pos.get(), 30);
    assert_eq!(rng.distance(), 3);
}

#[test]
fn test_transform_maker() {
    let vec = vec![3, 4];
    let squares = make::transform(|v: &i32| v * v);
    let out: Vec<i32> = (Range::from_slice(&vec) | &squares).into_iter().collect();
    assert_eq!(out, [9, 16]);
    // The maker is reusable.
    let again: Vec<i32> = Range::from_slice(&vec).pipe(&squares).into_iter().collect();
    assert_eq!(again, out);
}
