//! # Layer 4: Trait Detection
//!
//! Observes which std traits a concrete type implements. Adaptor positions
//! are `Copy`, `Clone`, `Send` or `Sync` exactly when all of their parts
//! are; this module is how that is checked.
//!
//! Two entry points:
//!
//! - [`Detect<T>`](autoref::Detect): associated consts for a nameable type.
//! - [`implements!`](crate::implements): the same query on a value, for
//!   types that cannot be named (closures, positions built from closures).
//!
//! ```
//! use tola_ranges::{implements, transform};
//!
//! let data = [1, 2, 3];
//! let tag = String::from("x");
//! let copyable = transform(&data, |v: &i32| *v).begin();
//! let clone_only = transform(&data, move |v: &i32| (*v, tag.len())).begin();
//! assert!(implements!(copyable, Copy));
//! assert!(!implements!(clone_only, Copy));
//! assert!(implements!(clone_only, Clone));
//! ```
//!
//! Both only work where the type is concrete at the call site; inside a
//! generic function they always report the fallback `false`.

pub mod autoref;
pub mod by_value;

pub use autoref::Detect;
pub use by_value::ByValue;

/// Check if a concrete type implements a trait at compile time.
///
/// Uses the "Inherent Const Fallback" pattern: an inherent const shadows
/// a trait const when the bound is satisfied.
///
/// ```
/// use tola_ranges::{has_impl, Enumerate, SlicePosition, RandomAccessPosition};
///
/// assert!(has_impl!(Enumerate<SlicePosition<'static, u8>>, RandomAccessPosition));
/// assert!(!has_impl!(Enumerate<SlicePosition<'static, u8>>, Default));
/// ```
#[macro_export]
macro_rules! has_impl {
    ($T:ty, $Trait:path) => {{
        struct __Check<T>(core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T> __Fallback for __Check<T> {}

        impl<T: $Trait> __Check<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Check::<$T>::VAL
    }};
}

/// Check if the type of a value implements one of `Clone`, `Copy`,
/// `Default`, `Send`, `Sync` or `Debug`.
///
/// The value is only borrowed.
#[macro_export]
macro_rules! implements {
    ($value:expr, $Trait:ident) => {{
        #[allow(unused_imports)]
        use $crate::detect::by_value::*;
        $crate::paste::paste! {
            (&$crate::detect::ByValue::new(&$value)).[<is_ $Trait:lower>]()
        }
    }};
}
