//! # Layer 1: Positions
//!
//! A position is a cursor into a sequence. Which operations a position
//! supports is decided by the trait it implements:
//!
//! ```text
//! Position                 get, advance, distance_to (linear by default)
//!   └─ BidirectionalPosition   retreat
//!        └─ RandomAccessPosition   jump (plus PartialOrd)
//! ```
//!
//! Each implementor also names its [`Category`] marker. The marker and the
//! trait set must agree; adaptors derive both from their bases.

pub mod slice;

pub use slice::SlicePosition;

use crate::primitives::{Category, CategoryLevel};

/// Cursor over a sequence, readable at its current location.
///
/// Output-only positions implement `get` as well; for them it yields the
/// write handle (for example a `&Cell<T>`) rather than a value.
pub trait Position: Clone + PartialEq {
    /// Traversal category of this position.
    type Category: Category;

    /// What reading the position yields (usually a reference).
    type Item;

    /// Reads the current element. Never cached: every call recomputes.
    fn get(&self) -> Self::Item;

    /// Moves one element forward.
    fn advance(&mut self);

    /// Signed number of `advance` calls needed to reach `end`, negative when
    /// `end` comes first.
    ///
    /// The default walks a copy forward until it compares equal to `end`,
    /// so it requires `end` to be reachable from `self`. Adaptors that know
    /// their sentinel override it with [`sentinel_distance`], which accepts
    /// either order; random-access sources use constant-time arithmetic.
    fn distance_to(&self, end: &Self) -> isize {
        linear_distance(self, end)
    }

    /// A copy of this position, advanced once.
    #[inline]
    fn next_position(&self) -> Self {
        let mut next = self.clone();
        next.advance();
        next
    }
}

/// Position that can also step backward.
///
/// A position's `Category` marker must agree with the traits it implements:
/// `Bidirectional` and `RandomAccess` positions implement this trait, and
/// `RandomAccess` ones also [`RandomAccessPosition`]. The compiler cannot
/// enforce the pairing, and [`category_of`] reports the marker as declared.
pub trait BidirectionalPosition: Position {
    /// Moves one element backward.
    fn retreat(&mut self);

    /// A copy of this position, retreated once.
    #[inline]
    fn prev_position(&self) -> Self {
        let mut prev = self.clone();
        prev.retreat();
        prev
    }
}

/// Position supporting signed jumps.
pub trait RandomAccessPosition: BidirectionalPosition + PartialOrd {
    /// Moves `n` elements, backward when `n` is negative.
    fn jump(&mut self, n: isize);

    /// A copy of this position, moved by `n`.
    #[inline]
    fn offset(&self, n: isize) -> Self {
        let mut moved = self.clone();
        moved.jump(n);
        moved
    }
}

/// Runtime category of a position, as declared by its `Category` marker.
pub fn category_of<P: Position>(_: &P) -> CategoryLevel {
    <P::Category as Category>::LEVEL
}

/// Counts forward steps from `from` until it equals `to`.
pub fn linear_distance<P: Position>(from: &P, to: &P) -> isize {
    let mut cur = from.clone();
    let mut n = 0;
    while cur != *to {
        cur.advance();
        n += 1;
    }
    n
}

/// Steps forward from `from` until it equals `to`. Gives up on a position
/// for which `is_last` holds, since advancing it would leave the sequence.
fn steps_until<P, L>(from: &P, to: &P, is_last: &L) -> Option<isize>
where
    P: Position,
    L: Fn(&P) -> bool,
{
    let mut cur = from.clone();
    let mut n = 0;
    loop {
        if cur == *to {
            return Some(n);
        }
        if is_last(&cur) {
            return None;
        }
        cur.advance();
        n += 1;
    }
}

/// Signed linear distance between two positions bounded by a sentinel.
///
/// Scans forward from `from`; when the sentinel is hit first, `to` lies
/// behind, so the scan runs from `to` instead and the count is negated.
/// Positions that reach each other in neither direction are 0 apart.
pub fn sentinel_distance<P, L>(from: &P, to: &P, is_last: L) -> isize
where
    P: Position,
    L: Fn(&P) -> bool,
{
    match steps_until(from, to, &is_last) {
        Some(n) => n,
        None => steps_until(to, from, &is_last).map_or(0, |n| -n),
    }
}

/// Jumps by repeated single steps, for positions whose skip cost is linear.
pub fn linear_jump<P: BidirectionalPosition>(pos: &mut P, n: isize) {
    if n >= 0 {
        for _ in 0..n {
            pos.advance();
        }
    } else {
        for _ in 0..n.unsigned_abs() {
            pos.retreat();
        }
    }
}
