//! Random-access position over a borrowed slice.

use core::cmp::Ordering;
use core::fmt;

use super::{BidirectionalPosition, Position, RandomAccessPosition};
use crate::primitives::RandomAccess;

/// Index into a borrowed slice.
///
/// Reading outside `0..len` panics like slice indexing does. Stepping past
/// either bound is allowed, only reading there is not.
pub struct SlicePosition<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SlicePosition<'a, T> {
    #[inline(always)]
    pub const fn new(slice: &'a [T], index: usize) -> Self {
        Self { slice, index }
    }

    #[inline(always)]
    pub const fn begin(slice: &'a [T]) -> Self {
        Self::new(slice, 0)
    }

    #[inline(always)]
    pub const fn end(slice: &'a [T]) -> Self {
        Self::new(slice, slice.len())
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    #[inline(always)]
    fn same_slice(&self, other: &Self) -> bool {
        core::ptr::eq(self.slice, other.slice)
    }
}

impl<T> Clone for SlicePosition<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlicePosition<'_, T> {}

impl<T> PartialEq for SlicePosition<'_, T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.same_slice(other)
    }
}

impl<T> Eq for SlicePosition<'_, T> {}

/// Positions into different slices are unordered.
impl<T> PartialOrd for SlicePosition<'_, T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_slice(other) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl<T> fmt::Debug for SlicePosition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlicePosition")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Position for SlicePosition<'a, T> {
    type Category = RandomAccess;
    type Item = &'a T;

    #[inline(always)]
    fn get(&self) -> &'a T {
        &self.slice[self.index]
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.index = self.index.wrapping_add(1);
    }

    #[inline(always)]
    fn distance_to(&self, end: &Self) -> isize {
        end.index.wrapping_sub(self.index) as isize
    }
}

impl<T> BidirectionalPosition for SlicePosition<'_, T> {
    #[inline(always)]
    fn retreat(&mut self) {
        self.index = self.index.wrapping_sub(1);
    }
}

impl<T> RandomAccessPosition for SlicePosition<'_, T> {
    #[inline(always)]
    fn jump(&mut self, n: isize) {
        self.index = self.index.wrapping_add_signed(n);
    }
}
