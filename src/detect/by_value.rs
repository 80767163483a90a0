//! Value-based detection for the [`implements!`](crate::implements) macro.
//!
//! Autoref dispatch: for each trait, `*Present::is_*` is implemented for
//! `ByValue<T>` when `T` has the trait, and `*Absent::is_*` for
//! `&ByValue<T>` unconditionally. Calling the method on `&ByValue<T>` finds
//! the by-value candidate first and only falls back to the autoref one when
//! the bound does not hold.

/// Borrowed value under inspection.
#[doc(hidden)]
pub struct ByValue<'a, T>(&'a T);

impl<'a, T> ByValue<'a, T> {
    pub const fn new(value: &'a T) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> &'a T {
        self.0
    }
}

macro_rules! impl_by_value {
    ($($Trait:ident => $path:path),* $(,)?) => {
        $(
            ::paste::paste! {
                #[doc(hidden)]
                pub trait [<$Trait Present>] {
                    fn [<is_ $Trait:lower>](&self) -> bool { true }
                }
                impl<T: $path> [<$Trait Present>] for ByValue<'_, T> {}

                #[doc(hidden)]
                pub trait [<$Trait Absent>] {
                    fn [<is_ $Trait:lower>](&self) -> bool { false }
                }
                impl<T> [<$Trait Absent>] for &ByValue<'_, T> {}
            }
        )*
    };
}

impl_by_value! {
    Clone => Clone,
    Copy => Copy,
    Debug => core::fmt::Debug,
    Default => Default,
    Send => Send,
    Sync => Sync,
}
