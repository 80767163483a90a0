//! # Layer 0: Primitives
//!
//! Building blocks shared by every adaptor:
//! - `storage.rs`: single-value cell, zero-sized for stateless values.
//! - `compressed_pair.rs`: two tagged cells forming a pair.
//! - `category.rs`: type-level traversal categories and their meet.

pub mod storage;
pub mod compressed_pair;
pub mod category;

// Re-export key types at this level
pub use storage::Storage;
pub use compressed_pair::{CompressedPair, First, Second};
pub use category::{
    Category, CategoryLevel, Meet, MeetOf,
    Input, Output, Forward, Bidirectional, RandomAccess,
};
