//! Dual storage: two tagged cells side by side.
//!
//! Each half is a [`Storage`] with its own tag, so `CompressedPair<T, T>` is
//! well-formed and a zero-sized half costs nothing. Adaptor positions keep
//! their base position in `first` and their auxiliary state in `second`.

use core::fmt;

use super::storage::Storage;

/// Tag of the first half.
pub enum First {}

/// Tag of the second half.
pub enum Second {}

/// Pair of values whose zero-sized members take no space.
pub struct CompressedPair<T, U> {
    first: Storage<T, First>,
    second: Storage<U, Second>,
}

impl<T, U> CompressedPair<T, U> {
    #[inline(always)]
    pub const fn new(first: T, second: U) -> Self {
        Self {
            first: Storage::new(first),
            second: Storage::new(second),
        }
    }

    #[inline(always)]
    pub const fn first(&self) -> &T {
        self.first.get()
    }

    #[inline(always)]
    pub const fn second(&self) -> &U {
        self.second.get()
    }

    #[inline(always)]
    pub fn first_mut(&mut self) -> &mut T {
        self.first.get_mut()
    }

    #[inline(always)]
    pub fn second_mut(&mut self) -> &mut U {
        self.second.get_mut()
    }

    /// Borrows both halves mutably at once.
    #[inline(always)]
    pub fn both_mut(&mut self) -> (&mut T, &mut U) {
        (self.first.get_mut(), self.second.get_mut())
    }

    #[inline(always)]
    pub fn into_first(self) -> T {
        self.first.into_inner()
    }

    #[inline(always)]
    pub fn into_second(self) -> U {
        self.second.into_inner()
    }

    #[inline(always)]
    pub fn into_parts(self) -> (T, U) {
        (self.first.into_inner(), self.second.into_inner())
    }

    /// Whether the first half is zero-sized.
    pub const FIRST_USES_EBO: bool = Storage::<T, First>::USES_EBO;

    /// Whether the second half is zero-sized.
    pub const SECOND_USES_EBO: bool = Storage::<U, Second>::USES_EBO;
}

impl<T: Clone, U: Clone> Clone for CompressedPair<T, U> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

impl<T: Copy, U: Copy> Copy for CompressedPair<T, U> {}

impl<T: Default, U: Default> Default for CompressedPair<T, U> {
    fn default() -> Self {
        Self::new(T::default(), U::default())
    }
}

impl<T: fmt::Debug, U: fmt::Debug> fmt::Debug for CompressedPair<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompressedPair")
            .field(self.first())
            .field(self.second())
            .finish()
    }
}

impl<T, U> From<(T, U)> for CompressedPair<T, U> {
    fn from((first, second): (T, U)) -> Self {
        Self::new(first, second)
    }
}
