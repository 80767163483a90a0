//! Multistep: visits every `step`-th element.
//!
//! Advancing stops early on the sentinel, so a partial last stride lands on
//! the end rather than past it. Retreating is unbounded: it always steps back
//! `step` times.

use core::cmp::Ordering;

use crate::position::{
    linear_jump, sentinel_distance, BidirectionalPosition, Position, RandomAccessPosition,
};
use crate::range::{impl_maker_ops, IntoRange, PositionOf, Range, RangeMaker};

/// Strided position over `P`.
#[must_use = "positions do nothing unless read or advanced"]
#[derive(Debug, Clone, Copy)]
pub struct Multistep<P> {
    base: P,
    end: P,
    step: usize,
}

impl<P> Multistep<P> {
    /// A `step` of 0 moves like a `step` of 1.
    #[inline(always)]
    pub const fn new(base: P, step: usize, end: P) -> Self {
        Self { base, end, step }
    }

    #[inline(always)]
    pub const fn base(&self) -> &P {
        &self.base
    }

    #[inline(always)]
    pub const fn step(&self) -> usize {
        self.step
    }

    #[inline(always)]
    pub const fn sentinel(&self) -> &P {
        &self.end
    }
}

impl<P: PartialEq> PartialEq for Multistep<P> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<P: PartialOrd> PartialOrd for Multistep<P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base.partial_cmp(&other.base)
    }
}

impl<P: Position> Position for Multistep<P> {
    type Category = P::Category;
    type Item = P::Item;

    #[inline(always)]
    fn get(&self) -> P::Item {
        self.base.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.base.advance();
        for _ in 1..self.step {
            if self.base == self.end {
                break;
            }
            self.base.advance();
        }
    }

    fn distance_to(&self, end: &Self) -> isize {
        sentinel_distance(self, end, |m| m.base == m.end)
    }
}

impl<P: BidirectionalPosition> BidirectionalPosition for Multistep<P> {
    /// No lower bound: the caller guarantees `step` elements precede this one.
    #[inline]
    fn retreat(&mut self) {
        self.base.retreat();
        for _ in 1..self.step {
            self.base.retreat();
        }
    }
}

impl<P: RandomAccessPosition> RandomAccessPosition for Multistep<P> {
    fn jump(&mut self, n: isize) {
        linear_jump(self, n);
    }
}

/// Lazily visits every `step`-th element of `range`, starting with the first.
///
/// ```
/// use tola_ranges::step_by;
///
/// let data = [0, 1, 2, 3, 4, 5, 6];
/// let every_third: Vec<i32> = step_by(&data, 3).into_iter().copied().collect();
/// assert_eq!(every_third, [0, 3, 6]);
/// ```
pub fn step_by<R: IntoRange>(range: R, step: usize) -> Range<Multistep<PositionOf<R>>> {
    let (begin, end) = range.into_range().into_parts();
    Range::new(
        Multistep::new(begin, step, end.clone()),
        Multistep::new(end.clone(), step, end),
    )
}

/// Maker produced by [`make::step`](crate::make::step).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepMaker {
    step: usize,
}

impl StepMaker {
    pub const fn new(step: usize) -> Self {
        Self { step }
    }
}

impl<R: IntoRange> RangeMaker<R> for StepMaker {
    type Output = Range<Multistep<PositionOf<R>>>;

    #[inline]
    fn apply(&self, range: R) -> Self::Output {
        step_by(range, self.step)
    }
}

impl_maker_ops!(StepMaker);

#[cfg(test)]
mod tests {
    use super::*;

    fn visited(data: &[i32], step: usize) -> Vec<i32> {
        step_by(data, step).into_iter().copied().collect()
    }

    #[test]
    fn test_partial_last_stride_stops_at_end() {
        assert_eq!(visited(&[0, 1, 2, 3, 4], 2), [0, 2, 4]);
        assert_eq!(visited(&[0, 1, 2, 3, 4, 5], 4), [0, 4]);
        assert_eq!(visited(&[0, 1, 2], 10), [0]);
        assert_eq!(visited(&[], 3), Vec::<i32>::new());
    }

    #[test]
    fn test_zero_step_moves_one() {
        assert_eq!(visited(&[7, 8, 9], 0), [7, 8, 9]);
    }

    #[test]
    fn test_distance_counts_strides() {
        let data = [0; 10];
        assert_eq!(step_by(&data, 3).distance(), 4);
        assert_eq!(step_by(&data, 5).distance(), 2);
    }

    #[test]
    fn test_retreat_steps_back_full_stride() {
        let data = [0, 1, 2, 3, 4, 5, 6];
        let range = step_by(&data, 3);
        let mut pos = range.begin().offset(2);
        assert_eq!(*pos.get(), 6);
        pos.retreat();
        assert_eq!(*pos.get(), 3);
        pos.jump(-1);
        assert_eq!(pos, range.begin());
    }

    #[test]
    fn test_reversed_distance_is_negative() {
        let data = [0; 10];
        let range = step_by(&data, 3);
        assert_eq!(range.end().distance_to(&range.begin()), -4);
        assert_eq!(range.begin().offset(3).distance_to(&range.begin().offset(1)), -2);
    }
}
