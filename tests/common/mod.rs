//! Positions with weaker categories than a slice, for category tests.

#![allow(dead_code)]

use tola_ranges::{
    Bidirectional, BidirectionalPosition, Input, Position, Range, SlicePosition,
};

/// Cursor that can only step, like a linked-list iterator.
#[derive(Debug)]
pub struct ListPosition<'a, T>(SlicePosition<'a, T>);

impl<T> Clone for ListPosition<'_, T> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl<T> PartialEq for ListPosition<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<'a, T> Position for ListPosition<'a, T> {
    type Category = Bidirectional;
    type Item = &'a T;

    fn get(&self) -> &'a T {
        self.0.get()
    }

    fn advance(&mut self) {
        self.0.advance();
    }
}

impl<T> BidirectionalPosition for ListPosition<'_, T> {
    fn retreat(&mut self) {
        self.0.retreat();
    }
}

pub fn list<T>(items: &[T]) -> Range<ListPosition<'_, T>> {
    Range::new(
        ListPosition(SlicePosition::begin(items)),
        ListPosition(SlicePosition::end(items)),
    )
}

/// Single-pass counter: reads the current number, then moves on.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    pub current: u32,
}

impl Position for Counter {
    type Category = Input;
    type Item = u32;

    fn get(&self) -> u32 {
        self.current
    }

    fn advance(&mut self) {
        self.current += 1;
    }
}

pub fn counter(from: u32, to: u32) -> Range<Counter> {
    Range::new(Counter { current: from }, Counter { current: to })
}
