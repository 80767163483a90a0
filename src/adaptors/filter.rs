//! Filter: skips elements rejected by a predicate.
//!
//! Invariant: a `Filter` always rests on its sentinel or on an element the
//! predicate accepts. Construction, `advance` and `retreat` step until that
//! holds again.
//!
//! The category is the base's, but skipping has no closed form: `jump` and
//! `distance_to` walk element by element even over a random-access base.

use core::cmp::Ordering;
use core::fmt;

use crate::position::{
    linear_jump, sentinel_distance, BidirectionalPosition, Position, RandomAccessPosition,
};
use crate::range::{impl_maker_ops, IntoRange, ItemOf, PositionOf, Range, RangeMaker};

/// Position over the elements of `P` accepted by `F`.
#[must_use = "positions do nothing unless read or advanced"]
#[derive(Clone, Copy)]
pub struct Filter<P, F> {
    base: P,
    end: P,
    predicate: F,
}

impl<P, F> Filter<P, F>
where
    P: Position,
    F: Fn(&P::Item) -> bool,
{
    /// Builds a filter at `base`, moved forward to the first accepted
    /// element (or to `end`).
    pub fn new(base: P, predicate: F, end: P) -> Self {
        let mut filter = Self { base, end, predicate };
        filter.settle_forward();
        filter
    }

    #[inline(always)]
    fn is_satisfying(&self) -> bool {
        self.base == self.end || (self.predicate)(&self.base.get())
    }

    #[inline]
    fn settle_forward(&mut self) {
        while !self.is_satisfying() {
            self.base.advance();
        }
    }
}

impl<P, F> Filter<P, F> {
    #[inline(always)]
    pub const fn base(&self) -> &P {
        &self.base
    }

    #[inline(always)]
    pub const fn sentinel(&self) -> &P {
        &self.end
    }

    #[inline(always)]
    pub const fn predicate(&self) -> &F {
        &self.predicate
    }

    pub fn into_base(self) -> P {
        self.base
    }
}

impl<P: PartialEq, F> PartialEq for Filter<P, F> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<P: PartialOrd, F> PartialOrd for Filter<P, F> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base.partial_cmp(&other.base)
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Filter<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("base", &self.base)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl<P, F> Position for Filter<P, F>
where
    P: Position,
    F: Fn(&P::Item) -> bool + Clone,
{
    type Category = P::Category;
    type Item = P::Item;

    #[inline(always)]
    fn get(&self) -> P::Item {
        self.base.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.base.advance();
        self.settle_forward();
    }

    /// Linear: counts accepted elements between the two, negative when
    /// `end` comes first.
    fn distance_to(&self, end: &Self) -> isize {
        sentinel_distance(self, end, |f| f.base == f.end)
    }
}

/// Retreating has no lower bound check: an accepted element must exist
/// before the current one.
impl<P, F> BidirectionalPosition for Filter<P, F>
where
    P: BidirectionalPosition,
    F: Fn(&P::Item) -> bool + Clone,
{
    #[inline]
    fn retreat(&mut self) {
        self.base.retreat();
        while !self.is_satisfying() {
            self.base.retreat();
        }
    }
}

impl<P, F> RandomAccessPosition for Filter<P, F>
where
    P: RandomAccessPosition,
    F: Fn(&P::Item) -> bool + Clone,
{
    /// Linear in `n` and in the number of rejected elements crossed.
    fn jump(&mut self, n: isize) {
        linear_jump(self, n);
    }
}

/// Lazily keeps the elements of `range` accepted by `predicate`.
///
/// ```
/// use tola_ranges::filter;
///
/// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// let even = filter(&data, |v: &&i32| **v % 2 == 0);
/// assert_eq!(even.distance(), 5);
/// assert_eq!(even.into_iter().copied().collect::<Vec<_>>(), [2, 4, 6, 8, 10]);
/// ```
pub fn filter<R, F>(range: R, predicate: F) -> Range<Filter<PositionOf<R>, F>>
where
    R: IntoRange,
    F: Fn(&ItemOf<R>) -> bool + Clone,
{
    let (begin, end) = range.into_range().into_parts();
    Range::new(
        Filter::new(begin, predicate.clone(), end.clone()),
        Filter::new(end.clone(), predicate, end),
    )
}

/// Maker produced by [`make::filter`](crate::make::filter).
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterMaker<F> {
    predicate: F,
}

impl<F> FilterMaker<F> {
    pub const fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<R, F> RangeMaker<R> for FilterMaker<F>
where
    R: IntoRange,
    F: Fn(&ItemOf<R>) -> bool + Clone,
{
    type Output = Range<Filter<PositionOf<R>, F>>;

    #[inline]
    fn apply(&self, range: R) -> Self::Output {
        filter(range, self.predicate.clone())
    }
}

impl_maker_ops!(FilterMaker<F>);
