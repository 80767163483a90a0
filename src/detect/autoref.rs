//! Autoref-based trait detection machinery.
//!
//! For each trait `T`:
//! 1. a fallback trait carries `const IS_T: bool = false`,
//! 2. it is implemented for `Detect<X>` for all `X`,
//! 3. an inherent `const IS_T = true` exists on `Detect<X>` where `X: T`.
//!
//! Resolving `Detect::<Concrete>::IS_T` picks the inherent const when the
//! bound holds and the trait const otherwise.

use core::marker::PhantomData;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a std trait.
macro_rules! impl_detect {
    ($($Trait:ident => $path:path),* $(,)?) => {
        $(
            ::paste::paste! {
                #[doc(hidden)]
                pub trait [<$Trait Fallback>] { const [<IS_ $Trait:upper>]: bool = false; }
                impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
                impl<T: ?Sized + $path> Detect<T> { pub const [<IS_ $Trait:upper>]: bool = true; }
            }
        )*
    };
}

impl_detect! {
    Clone => Clone,
    Copy => Copy,
    Debug => core::fmt::Debug,
    Default => Default,
    Send => Send,
    Sync => Sync,
}
