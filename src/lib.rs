#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables `IntoRange` for `&Vec<T>` in no_std

//! # tola-ranges
//!
//! Lazy, composable range adaptors with type-level traversal categories.
//!
//! **Views over sequences, never copies.**
//!
//! ## Architecture
//!
//! A [`Range`] is a pair of positions. Adaptors wrap positions; makers wrap
//! adaptors into composable pipeline steps.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Storage, CompressedPair (zero-sized when stateless)            |
//! |  - Category markers, Meet                                         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Positions                                               |
//! |  - Position / BidirectionalPosition / RandomAccessPosition        |
//! |  - SlicePosition                                                  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Ranges                                                  |
//! |  - Range, IntoRange, RangeMaker, Compose (`|`)                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Adaptors                                                |
//! |  - Transform, Filter, Multistep, Enumerate, Zip + `make::*`       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Categories
//!
//! Every position names one of five categories: `Input`, `Output`,
//! `Forward`, `Bidirectional`, `RandomAccess`. Adaptors keep their base's
//! category; `Zip` takes the meet of both. Operations a category lacks are
//! missing trait methods, so misuse is a compile error, not a runtime one.
//!
//! ## Quick Start
//!
//! ```
//! use tola_ranges::prelude::*;
//!
//! let data: Vec<i32> = (0..10).collect();
//!
//! let rng = Range::from_slice(&data)
//!     | make::enumerate()
//!     | make::filter(|&(_, v): &(isize, &i32)| v % 2 == 0)
//!     | make::transform(|(i, _): (isize, &i32)| i);
//!
//! assert_eq!(rng.into_iter().collect::<Vec<_>>(), [0, 2, 4, 6, 8]);
//! ```
//!
//! ## Caller obligations
//!
//! - `Filter` and `Multistep` do not bound-check when stepping backward.
//!   Retreating before the first reachable element is a logic error; with
//!   slice sources the following read panics.
//! - `Zip` compares equal only when both sides do, so both sequences must
//!   have the same length.

// Allow `::tola_ranges` to work inside the crate itself
extern crate self as tola_ranges;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the implements! macro
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Positions
// =============================================================================
pub mod position;

// =============================================================================
// Layer 2: Ranges and composition
// =============================================================================
pub mod range;

// =============================================================================
// Layer 3: Adaptors
// =============================================================================
pub mod adaptors;
pub mod make;

// =============================================================================
// Layer 4: Trait detection
// =============================================================================
pub mod detect;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{
    Category, CategoryLevel, Meet, MeetOf,
    Input, Output, Forward, Bidirectional, RandomAccess,
    CompressedPair, Storage,
};
pub use position::{
    Position, BidirectionalPosition, RandomAccessPosition,
    SlicePosition, category_of, linear_distance, sentinel_distance,
};
pub use range::{
    Range, RangeIter, IntoRange, RangeMaker, Compose, FnMaker, maker,
    PositionOf, ItemOf,
};
pub use adaptors::{
    transform, Transform, TransformMaker,
    filter, Filter, FilterMaker,
    step_by, Multistep, StepMaker,
    enumerate, enumerate_from, Enumerate, EnumerateMaker, END_INDEX,
    zip, Zip, ZipMaker,
};

/// Common items for building pipelines.
pub mod prelude {
    pub use crate::position::{Position, BidirectionalPosition, RandomAccessPosition};
    pub use crate::range::{Range, IntoRange, RangeMaker, maker};
    pub use crate::primitives::{Category, CategoryLevel};
    pub use crate::make;
}
