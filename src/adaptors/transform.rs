//! Transform: reads the base element through a function.
//!
//! The function runs on every `get`, never once per visited position, so a
//! transformer with side effects observes each read.

use core::cmp::Ordering;
use core::fmt;

use crate::position::{BidirectionalPosition, Position, RandomAccessPosition};
use crate::primitives::CompressedPair;
use crate::range::{impl_maker_ops, IntoRange, ItemOf, PositionOf, Range, RangeMaker};

/// Position applying `F` to each element of `P`.
///
/// Category, distance and identity are the base's.
#[must_use = "positions do nothing unless read or advanced"]
#[derive(Clone, Copy)]
pub struct Transform<P, F> {
    inner: CompressedPair<P, F>,
}

impl<P, F> Transform<P, F> {
    #[inline(always)]
    pub const fn new(base: P, transformer: F) -> Self {
        Self { inner: CompressedPair::new(base, transformer) }
    }

    #[inline(always)]
    pub const fn base(&self) -> &P {
        self.inner.first()
    }

    #[inline(always)]
    pub fn base_mut(&mut self) -> &mut P {
        self.inner.first_mut()
    }

    #[inline(always)]
    pub const fn transformer(&self) -> &F {
        self.inner.second()
    }

    pub fn into_base(self) -> P {
        self.inner.into_first()
    }
}

impl<P: PartialEq, F> PartialEq for Transform<P, F> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.base() == other.base()
    }
}

impl<P: PartialOrd, F> PartialOrd for Transform<P, F> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base().partial_cmp(other.base())
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Transform<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("base", self.base())
            .finish_non_exhaustive()
    }
}

impl<P, F, O> Position for Transform<P, F>
where
    P: Position,
    F: Fn(P::Item) -> O + Clone,
{
    type Category = P::Category;
    type Item = O;

    #[inline(always)]
    fn get(&self) -> O {
        (self.transformer())(self.base().get())
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.base_mut().advance();
    }

    #[inline(always)]
    fn distance_to(&self, end: &Self) -> isize {
        self.base().distance_to(end.base())
    }
}

impl<P, F, O> BidirectionalPosition for Transform<P, F>
where
    P: BidirectionalPosition,
    F: Fn(P::Item) -> O + Clone,
{
    #[inline(always)]
    fn retreat(&mut self) {
        self.base_mut().retreat();
    }
}

impl<P, F, O> RandomAccessPosition for Transform<P, F>
where
    P: RandomAccessPosition,
    F: Fn(P::Item) -> O + Clone,
{
    #[inline(always)]
    fn jump(&mut self, n: isize) {
        self.base_mut().jump(n);
    }
}

/// Lazily maps every element of `range` through `transformer`.
///
/// ```
/// use tola_ranges::transform;
///
/// let data = [1, 2, 3];
/// let doubled: Vec<i32> = transform(&data, |v: &i32| v * 2).into_iter().collect();
/// assert_eq!(doubled, [2, 4, 6]);
/// ```
pub fn transform<R, F, O>(range: R, transformer: F) -> Range<Transform<PositionOf<R>, F>>
where
    R: IntoRange,
    F: Fn(ItemOf<R>) -> O + Clone,
{
    let (begin, end) = range.into_range().into_parts();
    Range::new(
        Transform::new(begin, transformer.clone()),
        Transform::new(end, transformer),
    )
}

/// Maker produced by [`make::transform`](crate::make::transform).
#[derive(Clone, Copy, Debug, Default)]
pub struct TransformMaker<F> {
    transformer: F,
}

impl<F> TransformMaker<F> {
    pub const fn new(transformer: F) -> Self {
        Self { transformer }
    }
}

impl<R, F, O> RangeMaker<R> for TransformMaker<F>
where
    R: IntoRange,
    F: Fn(ItemOf<R>) -> O + Clone,
{
    type Output = Range<Transform<PositionOf<R>, F>>;

    #[inline]
    fn apply(&self, range: R) -> Self::Output {
        transform(range, self.transformer.clone())
    }
}

impl_maker_ops!(TransformMaker<F>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::SlicePosition;
    use core::cell::Cell;
    use core::mem::size_of;

    #[test]
    fn test_stateless_transformer_adds_no_size() {
        let data = [1u8, 2, 3];
        let range = transform(&data, |v: &u8| u32::from(*v));
        assert_eq!(size_of_val(&range.begin()), size_of::<SlicePosition<'_, u8>>());
    }

    #[test]
    fn test_transformer_runs_per_read() {
        let calls = Cell::new(0);
        let data = [5, 6];
        let range = transform(&data, |v: &i32| {
            calls.set(calls.get() + 1);
            *v
        });
        let pos = range.begin();
        assert_eq!(pos.get(), 5);
        assert_eq!(pos.get(), 5);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_arithmetic_delegates_to_base() {
        let data = [0, 10, 20, 30];
        let range = transform(&data, |v: &i32| v + 1);
        let mut pos = range.begin();
        pos.jump(3);
        assert_eq!(pos.get(), 31);
        pos.retreat();
        assert_eq!(pos.get(), 21);
        assert_eq!(pos.distance_to(&range.end()), 2);
        assert!(range.begin() < pos);
    }
}
