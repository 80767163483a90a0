//! Zip: walks two sequences in lockstep.
//!
//! The category is the meet of both bases' categories. Equality and ordering
//! hold only when they hold on *both* sides:
//!
//! - `a == b` iff both firsts and both seconds are equal,
//! - `a < b` iff both firsts and both seconds are ordered the same way,
//! - `a <= b` iff not `b < a`, and `a >= b` iff not `a < b`,
//! - `partial_cmp` is `None` for mixed orderings.
//!
//! So `<=` is not "`<` or `==`": a pair ahead on one side and level on the
//! other is `<=` its partner in both directions.
//!
//! Consequently a zip over sequences of different lengths never compares
//! equal to its end: one side reaches its own end while the other does not.
//! Both sequences must have the same length.
//!
//! Zipping an input-only with an output-only range has no common category
//! and is rejected at compile time:
//!
//! ```compile_fail
//! use tola_ranges::{Position, Range, Input, Output, zip};
//!
//! #[derive(Clone, PartialEq)]
//! struct Reader;
//! impl Position for Reader {
//!     type Category = Input;
//!     type Item = u8;
//!     fn get(&self) -> u8 { 0 }
//!     fn advance(&mut self) {}
//! }
//!
//! #[derive(Clone, PartialEq)]
//! struct Writer;
//! impl Position for Writer {
//!     type Category = Output;
//!     type Item = ();
//!     fn get(&self) {}
//!     fn advance(&mut self) {}
//! }
//!
//! let _ = zip(Range::new(Reader, Reader), Range::new(Writer, Writer));
//! ```

use core::cmp::Ordering;

use crate::position::{BidirectionalPosition, Position, RandomAccessPosition};
use crate::primitives::{CompressedPair, Meet, MeetOf};
use crate::range::{impl_maker_ops, IntoRange, PositionOf, Range, RangeMaker};

/// Position pairing `A` and `B`.
#[must_use = "positions do nothing unless read or advanced"]
#[derive(Debug, Clone, Copy)]
pub struct Zip<A, B> {
    inner: CompressedPair<A, B>,
}

impl<A, B> Zip<A, B> {
    #[inline(always)]
    pub const fn new(first: A, second: B) -> Self {
        Self { inner: CompressedPair::new(first, second) }
    }

    #[inline(always)]
    pub const fn first_base(&self) -> &A {
        self.inner.first()
    }

    #[inline(always)]
    pub const fn second_base(&self) -> &B {
        self.inner.second()
    }

    pub fn into_bases(self) -> (A, B) {
        self.inner.into_parts()
    }

    #[inline(always)]
    fn bases_mut(&mut self) -> (&mut A, &mut B) {
        self.inner.both_mut()
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for Zip<A, B> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.first_base() == other.first_base() && self.second_base() == other.second_base()
    }
}

impl<A: PartialOrd, B: PartialOrd> PartialOrd for Zip<A, B> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (
            self.first_base().partial_cmp(other.first_base()),
            self.second_base().partial_cmp(other.second_base()),
        ) {
            (Some(first), Some(second)) if first == second => Some(first),
            _ => None,
        }
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        !other.lt(self)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl<A, B> Position for Zip<A, B>
where
    A: Position,
    B: Position,
    A::Category: Meet<B::Category>,
{
    type Category = MeetOf<A::Category, B::Category>;
    type Item = (A::Item, B::Item);

    #[inline(always)]
    fn get(&self) -> Self::Item {
        (self.first_base().get(), self.second_base().get())
    }

    #[inline(always)]
    fn advance(&mut self) {
        let (first, second) = self.bases_mut();
        first.advance();
        second.advance();
    }

    /// Measured on the first sequence only.
    #[inline(always)]
    fn distance_to(&self, end: &Self) -> isize {
        self.first_base().distance_to(end.first_base())
    }
}

impl<A, B> BidirectionalPosition for Zip<A, B>
where
    A: BidirectionalPosition,
    B: BidirectionalPosition,
    A::Category: Meet<B::Category>,
{
    #[inline(always)]
    fn retreat(&mut self) {
        let (first, second) = self.bases_mut();
        first.retreat();
        second.retreat();
    }
}

impl<A, B> RandomAccessPosition for Zip<A, B>
where
    A: RandomAccessPosition,
    B: RandomAccessPosition,
    A::Category: Meet<B::Category>,
{
    #[inline(always)]
    fn jump(&mut self, n: isize) {
        let (first, second) = self.bases_mut();
        first.jump(n);
        second.jump(n);
    }
}

/// Pairs the elements of two equally long ranges.
///
/// ```
/// use tola_ranges::zip;
///
/// let names = ["a", "b"];
/// let sizes = [1, 2];
/// let pairs: Vec<(&str, i32)> = zip(&names, &sizes)
///     .into_iter()
///     .map(|(n, s)| (*n, *s))
///     .collect();
/// assert_eq!(pairs, [("a", 1), ("b", 2)]);
/// ```
pub fn zip<R1, R2>(first: R1, second: R2) -> Range<Zip<PositionOf<R1>, PositionOf<R2>>>
where
    R1: IntoRange,
    R2: IntoRange,
    <PositionOf<R1> as Position>::Category: Meet<<PositionOf<R2> as Position>::Category>,
{
    let (begin1, end1) = first.into_range().into_parts();
    let (begin2, end2) = second.into_range().into_parts();
    Range::new(Zip::new(begin1, begin2), Zip::new(end1, end2))
}

/// Maker produced by [`make::zip`](crate::make::zip), applied to a pair of
/// range-like values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZipMaker;

impl<R1, R2> RangeMaker<(R1, R2)> for ZipMaker
where
    R1: IntoRange,
    R2: IntoRange,
    <PositionOf<R1> as Position>::Category: Meet<<PositionOf<R2> as Position>::Category>,
{
    type Output = Range<Zip<PositionOf<R1>, PositionOf<R2>>>;

    #[inline]
    fn apply(&self, (first, second): (R1, R2)) -> Self::Output {
        zip(first, second)
    }
}

impl_maker_ops!(ZipMaker);
