//! Single-value storage cell.
//!
//! `Storage<T, Tag>` holds exactly one `T`. When `T` is zero-sized (a
//! non-capturing closure, a unit marker) the cell occupies no storage inside
//! its enclosing aggregate, which is the Rust form of the empty-base
//! optimization.
//!
//! `Tag` never holds data. It only gives two cells of the same `T` distinct
//! types so that they can sit side by side in one aggregate.

use core::fmt;
use core::marker::PhantomData;

/// Holds one value of type `T`, tagged by `Tag`.
pub struct Storage<T, Tag = ()> {
    value: T,
    _tag: PhantomData<fn() -> Tag>,
}

impl<T, Tag> Storage<T, Tag> {
    /// `true` when the stored value takes no space.
    pub const USES_EBO: bool = core::mem::size_of::<T>() == 0;

    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self { value, _tag: PhantomData }
    }

    #[inline(always)]
    pub const fn get(&self) -> &T {
        &self.value
    }

    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Moves the value out of the cell.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }
}

// Manual impls: derives would put bounds on `Tag`.

impl<T: Clone, Tag> Clone for Storage<T, Tag> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, Tag> Copy for Storage<T, Tag> {}

impl<T: Default, Tag> Default for Storage<T, Tag> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq, Tag> PartialEq for Storage<T, Tag> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, Tag> Eq for Storage<T, Tag> {}

impl<T: fmt::Debug, Tag> fmt::Debug for Storage<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Storage").field(&self.value).finish()
    }
}

impl<T, Tag> From<T> for Storage<T, Tag> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    #[derive(Clone, Copy, Default, PartialEq, Debug)]
    struct Marker;

    #[test]
    fn test_zero_sized_value_uses_ebo() {
        assert!(<Storage<Marker>>::USES_EBO);
        assert_eq!(size_of::<Storage<Marker>>(), 0);
        assert!(!<Storage<u32>>::USES_EBO);
        assert_eq!(size_of::<Storage<u32>>(), size_of::<u32>());
    }

    #[test]
    fn test_accessors_forward_value() {
        let mut cell: Storage<String, Marker> = Storage::new(String::from("abc"));
        assert_eq!(cell.get(), "abc");
        cell.get_mut().push('d');
        assert_eq!(cell.into_inner(), "abcd");
    }

    #[test]
    fn test_tag_does_not_affect_traits() {
        struct NotClone;
        let cell: Storage<u8, NotClone> = Storage::new(7);
        let copy = cell;
        assert_eq!(cell, copy);
    }
}
