//! # Layer 2: Ranges and Composition
//!
//! A [`Range`] is a `(begin, end)` pair of positions over a sequence it
//! borrows. A [`RangeMaker`] turns one range-like input into an adapted
//! range. Two rules combine them:
//!
//! ```text
//! maker | maker  ->  Compose (left maker runs first)
//! range | maker  ->  maker applied to range
//! ```
//!
//! Nothing is evaluated while composing: pipelines only nest position types.
//!
//! ```
//! use tola_ranges::{make, Range};
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! let odd_squares = make::filter(|v: &&i32| **v % 2 == 1) | make::transform(|v: &i32| v * v);
//! let out: Vec<i32> = (Range::from_slice(&data) | odd_squares).into_iter().collect();
//! assert_eq!(out, [1, 9, 25]);
//! ```

use core::cell::Cell;
use core::iter::FusedIterator;
use core::ops::BitOr;

use crate::position::{Position, SlicePosition};
use crate::primitives::CompressedPair;

// =============================================================================
// Range
// =============================================================================

/// Non-owning view delimited by two positions.
#[must_use = "ranges are lazy and do nothing unless iterated"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<P> {
    begin: P,
    end: P,
}

impl<P> Range<P> {
    #[inline(always)]
    pub const fn new(begin: P, end: P) -> Self {
        Self { begin, end }
    }

    pub fn into_parts(self) -> (P, P) {
        (self.begin, self.end)
    }

    /// Applies `maker` to this range. Same as `self | maker`.
    #[inline]
    pub fn pipe<M: RangeMaker<Self>>(self, maker: M) -> M::Output {
        maker.apply(self)
    }
}

impl<P: Clone> Range<P> {
    #[inline(always)]
    pub fn begin(&self) -> P {
        self.begin.clone()
    }

    #[inline(always)]
    pub fn end(&self) -> P {
        self.end.clone()
    }
}

impl<P: Position> Range<P> {
    /// Signed number of elements, at the cost of `P::distance_to`.
    #[inline]
    pub fn distance(&self) -> isize {
        self.begin.distance_to(&self.end)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Iterates a copy of the range, leaving `self` reusable.
    #[inline]
    pub fn iter(&self) -> RangeIter<P> {
        RangeIter::new(self.begin.clone(), self.end.clone())
    }
}

impl<'a, T> Range<SlicePosition<'a, T>> {
    #[inline]
    pub const fn from_slice(slice: &'a [T]) -> Self {
        Self::new(SlicePosition::begin(slice), SlicePosition::end(slice))
    }

    /// Views `slice` as cells so that elements can be written through the
    /// items a pipeline yields.
    ///
    /// ```
    /// use tola_ranges::{enumerate, Range};
    ///
    /// let mut data = [0; 4];
    /// for (i, cell) in enumerate(Range::from_cells(&mut data)) {
    ///     cell.set(i as i32 * 10);
    /// }
    /// assert_eq!(data, [0, 10, 20, 30]);
    /// ```
    #[inline]
    pub fn from_cells(slice: &'a mut [T]) -> Range<SlicePosition<'a, Cell<T>>> {
        Range::from_slice(Cell::from_mut(slice).as_slice_of_cells())
    }
}

impl<'a, T> From<&'a [T]> for Range<SlicePosition<'a, T>> {
    fn from(slice: &'a [T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<P, M> BitOr<M> for Range<P>
where
    M: RangeMaker<Range<P>>,
{
    type Output = M::Output;

    #[inline]
    fn bitor(self, maker: M) -> M::Output {
        maker.apply(self)
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Iterator walking a range from begin to end.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct RangeIter<P> {
    cur: P,
    end: P,
}

impl<P> RangeIter<P> {
    pub const fn new(cur: P, end: P) -> Self {
        Self { cur, end }
    }

    /// The position the next call to `next` reads.
    pub fn position(&self) -> &P {
        &self.cur
    }
}

impl<P: Position> Iterator for RangeIter<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        if self.cur == self.end {
            return None;
        }
        let item = self.cur.get();
        self.cur.advance();
        Some(item)
    }
}

impl<P: Position> FusedIterator for RangeIter<P> {}

impl<P: Position> IntoIterator for Range<P> {
    type Item = P::Item;
    type IntoIter = RangeIter<P>;

    #[inline]
    fn into_iter(self) -> RangeIter<P> {
        RangeIter::new(self.begin, self.end)
    }
}

impl<P: Position> IntoIterator for &Range<P> {
    type Item = P::Item;
    type IntoIter = RangeIter<P>;

    #[inline]
    fn into_iter(self) -> RangeIter<P> {
        self.iter()
    }
}

// =============================================================================
// IntoRange
// =============================================================================

/// Anything an adaptor can be built over.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be viewed as a range",
    label = "expected a `Range`, a slice, an array reference or a `&Vec`",
    note = "wrap other sequences with `Range::new(begin, end)`"
)]
pub trait IntoRange {
    type Position: Position;

    fn into_range(self) -> Range<Self::Position>;
}

impl<P: Position> IntoRange for Range<P> {
    type Position = P;

    #[inline(always)]
    fn into_range(self) -> Range<P> {
        self
    }
}

impl<P: Position> IntoRange for &Range<P> {
    type Position = P;

    #[inline(always)]
    fn into_range(self) -> Range<P> {
        self.clone()
    }
}

impl<'a, T> IntoRange for &'a [T] {
    type Position = SlicePosition<'a, T>;

    #[inline(always)]
    fn into_range(self) -> Range<Self::Position> {
        Range::from_slice(self)
    }
}

impl<'a, T, const N: usize> IntoRange for &'a [T; N] {
    type Position = SlicePosition<'a, T>;

    #[inline(always)]
    fn into_range(self) -> Range<Self::Position> {
        Range::from_slice(self.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> IntoRange for &'a alloc::vec::Vec<T> {
    type Position = SlicePosition<'a, T>;

    #[inline(always)]
    fn into_range(self) -> Range<Self::Position> {
        Range::from_slice(self.as_slice())
    }
}

/// Position type of a range-like input.
pub type PositionOf<R> = <R as IntoRange>::Position;

/// Item type read from a range-like input.
pub type ItemOf<R> = <PositionOf<R> as Position>::Item;

// =============================================================================
// Range makers
// =============================================================================

/// Composable step of a pipeline.
///
/// Implementing this trait is what marks a type as a range maker.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be applied to `{R}`",
    label = "not a range maker for `{R}`",
    note = "check that the closure given to the maker accepts the item type of `{R}`"
)]
pub trait RangeMaker<R> {
    type Output;

    fn apply(&self, input: R) -> Self::Output;
}

impl<R, M: RangeMaker<R>> RangeMaker<R> for &M {
    type Output = M::Output;

    #[inline(always)]
    fn apply(&self, input: R) -> M::Output {
        (**self).apply(input)
    }
}

/// Two makers applied one after the other.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compose<A, B> {
    makers: CompressedPair<A, B>,
}

impl<A, B> Compose<A, B> {
    #[inline(always)]
    pub const fn new(first: A, second: B) -> Self {
        Self { makers: CompressedPair::new(first, second) }
    }

    pub fn into_parts(self) -> (A, B) {
        self.makers.into_parts()
    }
}

impl<R, A, B> RangeMaker<R> for Compose<A, B>
where
    A: RangeMaker<R>,
    B: RangeMaker<A::Output>,
{
    type Output = B::Output;

    #[inline(always)]
    fn apply(&self, input: R) -> B::Output {
        self.makers.second().apply(self.makers.first().apply(input))
    }
}

/// Plain function used as a maker.
#[derive(Clone, Copy, Debug, Default)]
pub struct FnMaker<F>(F);

impl<R, F, O> RangeMaker<R> for FnMaker<F>
where
    F: Fn(R) -> O,
{
    type Output = O;

    #[inline(always)]
    fn apply(&self, input: R) -> O {
        (self.0)(input)
    }
}

/// Wraps a closure as a range maker.
///
/// ```
/// use tola_ranges::{make, maker, Position, Range, SlicePosition};
///
/// fn skip_first(r: Range<SlicePosition<'_, i32>>) -> Range<SlicePosition<'_, i32>> {
///     let (begin, end) = r.into_parts();
///     Range::new(begin.next_position(), end)
/// }
///
/// let data = [1, 2, 3];
/// let rest: Vec<i32> = (Range::from_slice(&data) | maker(skip_first) | make::transform(|v: &i32| *v))
///     .into_iter()
///     .collect();
/// assert_eq!(rest, [2, 3]);
/// ```
pub const fn maker<F>(f: F) -> FnMaker<F> {
    FnMaker(f)
}

/// Gives a maker type `|` composition and a `then` method.
macro_rules! impl_maker_ops {
    ($name:ident $(<$($g:ident),*>)?) => {
        impl<$($($g,)*)? Next> core::ops::BitOr<Next> for $name $(<$($g),*>)? {
            type Output = $crate::range::Compose<Self, Next>;

            #[inline(always)]
            fn bitor(self, next: Next) -> Self::Output {
                $crate::range::Compose::new(self, next)
            }
        }

        impl<$($($g),*)?> $name $(<$($g),*>)? {
            /// Composes with `next`, which runs on this maker's output.
            #[inline(always)]
            pub fn then<Next>(self, next: Next) -> $crate::range::Compose<Self, Next> {
                $crate::range::Compose::new(self, next)
            }
        }
    };
}

pub(crate) use impl_maker_ops;

impl_maker_ops!(Compose<A, B>);
impl_maker_ops!(FnMaker<F>);
