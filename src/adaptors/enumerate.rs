//! Enumerate: pairs each element with a running index.
//!
//! The index is bookkeeping, not identity. Two positions on the same base
//! element compare equal whatever their indices; within one traversal only
//! one index is ever live for a given base position.

use core::cmp::Ordering;

use crate::position::{BidirectionalPosition, Position, RandomAccessPosition};
use crate::primitives::CompressedPair;
use crate::range::{impl_maker_ops, IntoRange, PositionOf, Range, RangeMaker};

/// Index carried by end positions. Never read.
pub const END_INDEX: isize = -1;

/// Position yielding `(index, element)` pairs.
#[must_use = "positions do nothing unless read or advanced"]
#[derive(Debug, Clone, Copy)]
pub struct Enumerate<P> {
    inner: CompressedPair<P, isize>,
}

impl<P> Enumerate<P> {
    #[inline(always)]
    pub const fn new(base: P, start: isize) -> Self {
        Self { inner: CompressedPair::new(base, start) }
    }

    #[inline(always)]
    pub const fn base(&self) -> &P {
        self.inner.first()
    }

    /// Index the next read reports.
    #[inline(always)]
    pub const fn count(&self) -> isize {
        *self.inner.second()
    }

    pub fn into_base(self) -> P {
        self.inner.into_first()
    }

    #[inline(always)]
    fn parts_mut(&mut self) -> (&mut P, &mut isize) {
        self.inner.both_mut()
    }
}

impl<P: PartialEq> PartialEq for Enumerate<P> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.base() == other.base()
    }
}

impl<P: PartialOrd> PartialOrd for Enumerate<P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base().partial_cmp(other.base())
    }
}

impl<P: Position> Position for Enumerate<P> {
    type Category = P::Category;
    type Item = (isize, P::Item);

    #[inline(always)]
    fn get(&self) -> Self::Item {
        (self.count(), self.base().get())
    }

    #[inline(always)]
    fn advance(&mut self) {
        let (base, count) = self.parts_mut();
        base.advance();
        *count += 1;
    }

    #[inline(always)]
    fn distance_to(&self, end: &Self) -> isize {
        self.base().distance_to(end.base())
    }
}

impl<P: BidirectionalPosition> BidirectionalPosition for Enumerate<P> {
    #[inline(always)]
    fn retreat(&mut self) {
        let (base, count) = self.parts_mut();
        base.retreat();
        *count -= 1;
    }
}

impl<P: RandomAccessPosition> RandomAccessPosition for Enumerate<P> {
    #[inline(always)]
    fn jump(&mut self, n: isize) {
        let (base, count) = self.parts_mut();
        base.jump(n);
        *count += n;
    }
}

/// Pairs every element of `range` with its index, counting from 0.
pub fn enumerate<R: IntoRange>(range: R) -> Range<Enumerate<PositionOf<R>>> {
    enumerate_from(range, 0)
}

/// Pairs every element of `range` with its index, counting from `start`.
///
/// ```
/// use tola_ranges::enumerate_from;
///
/// let data = ['a', 'b'];
/// let pairs: Vec<(isize, char)> = enumerate_from(&data, 1)
///     .into_iter()
///     .map(|(i, c)| (i, *c))
///     .collect();
/// assert_eq!(pairs, [(1, 'a'), (2, 'b')]);
/// ```
pub fn enumerate_from<R: IntoRange>(range: R, start: isize) -> Range<Enumerate<PositionOf<R>>> {
    let (begin, end) = range.into_range().into_parts();
    Range::new(Enumerate::new(begin, start), Enumerate::new(end, END_INDEX))
}

/// Maker produced by [`make::enumerate`](crate::make::enumerate).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumerateMaker {
    start: isize,
}

impl EnumerateMaker {
    pub const fn new(start: isize) -> Self {
        Self { start }
    }
}

impl<R: IntoRange> RangeMaker<R> for EnumerateMaker {
    type Output = Range<Enumerate<PositionOf<R>>>;

    #[inline]
    fn apply(&self, range: R) -> Self::Output {
        enumerate_from(range, self.start)
    }
}

impl_maker_ops!(EnumerateMaker);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_not_identity() {
        let data = [1, 2, 3];
        let range = enumerate(&data);
        let shifted = enumerate_from(&data, 100);
        assert_eq!(range.begin(), shifted.begin());
        assert_eq!(range.end().count(), END_INDEX);
    }

    #[test]
    fn test_index_follows_every_move() {
        let data = [10, 20, 30, 40];
        let mut pos = enumerate(&data).begin();
        pos.jump(3);
        assert_eq!(pos.get(), (3, &40));
        pos.retreat();
        assert_eq!(pos.get(), (2, &30));
        pos.advance();
        assert_eq!(pos.count(), 3);
        assert_eq!(pos.distance_to(&enumerate(&data).end()), 1);
    }
}
