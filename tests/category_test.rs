//! Every position's category marker agrees with the traits it implements.

use tola_ranges::prelude::*;
use tola_ranges::{has_impl, Enumerate, Filter, Multistep, SlicePosition, Transform, Zip};

mod common;

use common::{Counter, ListPosition};

type Slice = SlicePosition<'static, i32>;
type List = ListPosition<'static, i32>;

macro_rules! assert_marker_matches {
    ($T:ty, $level:ident) => {{
        let level = <<$T as Position>::Category as Category>::LEVEL;
        assert_eq!(level, CategoryLevel::$level, stringify!($T));
        assert_eq!(
            level.supports_retreat(),
            has_impl!($T, BidirectionalPosition),
            stringify!($T)
        );
        assert_eq!(
            level.supports_jump(),
            has_impl!($T, RandomAccessPosition),
            stringify!($T)
        );
    }};
}

#[test]
fn test_sources_match_their_markers() {
    assert_marker_matches!(Slice, RandomAccess);
    assert_marker_matches!(List, Bidirectional);
    assert_marker_matches!(Counter, Input);
}

#[test]
fn test_adaptors_match_their_markers() {
    assert_marker_matches!(Transform<Slice, fn(&i32) -> i32>, RandomAccess);
    assert_marker_matches!(Transform<Counter, fn(u32) -> u32>, Input);
    assert_marker_matches!(Filter<List, fn(&&i32) -> bool>, Bidirectional);
    assert_marker_matches!(Filter<Slice, fn(&&i32) -> bool>, RandomAccess);
    assert_marker_matches!(Multistep<List>, Bidirectional);
    assert_marker_matches!(Enumerate<Counter>, Input);
    assert_marker_matches!(Enumerate<Slice>, RandomAccess);
}

#[test]
fn test_zip_matches_the_weaker_marker() {
    assert_marker_matches!(Zip<Slice, Slice>, RandomAccess);
    assert_marker_matches!(Zip<Slice, List>, Bidirectional);
    assert_marker_matches!(Zip<Counter, Slice>, Input);
    assert_marker_matches!(Zip<Enumerate<List>, Multistep<Slice>>, Bidirectional);
}
