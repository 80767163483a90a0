//! Maker factories for pipelines.
//!
//! ```
//! use tola_ranges::{make, Range};
//!
//! let data: Vec<i32> = (0..10).collect();
//! let even_indices = make::enumerate()
//!     | make::filter(|&(_, v): &(isize, &i32)| v % 2 == 0)
//!     | make::transform(|(i, _): (isize, &i32)| i);
//! let out: Vec<isize> = (Range::from_slice(&data) | even_indices).into_iter().collect();
//! assert_eq!(out, [0, 2, 4, 6, 8]);
//! ```

use crate::adaptors::{EnumerateMaker, FilterMaker, StepMaker, TransformMaker, ZipMaker};

/// Maker mapping every element through `transformer`.
pub const fn transform<F>(transformer: F) -> TransformMaker<F> {
    TransformMaker::new(transformer)
}

/// Maker keeping the elements accepted by `predicate`.
pub const fn filter<F>(predicate: F) -> FilterMaker<F> {
    FilterMaker::new(predicate)
}

/// Maker visiting every `step`-th element.
pub const fn step(step: usize) -> StepMaker {
    StepMaker::new(step)
}

/// Maker pairing elements with their index, from 0.
pub const fn enumerate() -> EnumerateMaker {
    EnumerateMaker::new(0)
}

/// Maker pairing elements with their index, from `start`.
pub const fn enumerate_from(start: isize) -> EnumerateMaker {
    EnumerateMaker::new(start)
}

/// Maker zipping a `(first, second)` pair of ranges.
pub const fn zip() -> ZipMaker {
    ZipMaker
}
