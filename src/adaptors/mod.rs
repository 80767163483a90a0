//! # Layer 3: Adaptors
//!
//! Five position wrappers, each with a range constructor and a maker:
//!
//! | Adaptor     | Range constructor        | Category            | distance |
//! |-------------|--------------------------|---------------------|----------|
//! | `Transform` | `transform(r, f)`        | base's              | base's   |
//! | `Filter`    | `filter(r, pred)`        | base's              | linear   |
//! | `Multistep` | `step_by(r, n)`          | base's              | linear   |
//! | `Enumerate` | `enumerate(r)`           | base's              | base's   |
//! | `Zip`       | `zip(r1, r2)`            | meet of both bases  | first's  |
//!
//! None of them reads ahead or caches: `get` always goes to the base.

pub mod transform;
pub mod filter;
pub mod multistep;
pub mod enumerate;
pub mod zip;

pub use transform::{transform, Transform, TransformMaker};
pub use filter::{filter, Filter, FilterMaker};
pub use multistep::{step_by, Multistep, StepMaker};
pub use enumerate::{enumerate, enumerate_from, Enumerate, EnumerateMaker, END_INDEX};
pub use zip::{zip, Zip, ZipMaker};
