//! Type-level traversal categories.
//!
//! Core types: the five markers `Input`, `Output`, `Forward`,
//! `Bidirectional`, `RandomAccess`, the `Category` trait and `Meet`.
//!
//! Ordering, weakest first:
//!
//! ```text
//! Input ─┐
//!        ├─ Forward ── Bidirectional ── RandomAccess
//! Output    (Output meets only Output)
//! ```
//!
//! `Meet` picks the weaker of two categories. Pairs without a common
//! category have no impl, so combining them fails to compile:
//!
//! ```compile_fail
//! use tola_ranges::{Input, Output, MeetOf};
//! let _: Option<MeetOf<Input, Output>> = None;
//! ```

/// Runtime view of a category, for inspection and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryLevel {
    Input,
    Output,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl CategoryLevel {
    /// Weaker of two levels, `None` if they are incompatible.
    pub const fn meet(self, other: CategoryLevel) -> Option<CategoryLevel> {
        use CategoryLevel::*;
        match (self, other) {
            (Output, Output) => Some(Output),
            (Output, _) | (_, Output) => None,
            (Input, _) | (_, Input) => Some(Input),
            (Forward, _) | (_, Forward) => Some(Forward),
            (Bidirectional, _) | (_, Bidirectional) => Some(Bidirectional),
            (RandomAccess, RandomAccess) => Some(RandomAccess),
        }
    }

    /// `true` if a position of this level also supports everything `other`
    /// requires.
    pub const fn refines(self, other: CategoryLevel) -> bool {
        matches!(self.meet(other), Some(level) if level as u8 == other as u8)
    }

    pub const fn supports_retreat(self) -> bool {
        self.refines(CategoryLevel::Bidirectional)
    }

    pub const fn supports_jump(self) -> bool {
        self.refines(CategoryLevel::RandomAccess)
    }
}

/// Type-level traversal category.
pub trait Category: 'static {
    const LEVEL: CategoryLevel;
}

macro_rules! define_category {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl Category for $name {
                const LEVEL: CategoryLevel = CategoryLevel::$name;
            }
        )*
    };
}

define_category! {
    /// Single pass, read only.
    Input,
    /// Single pass, write only.
    Output,
    /// Multi pass, forward only.
    Forward,
    /// Forward and backward stepping.
    Bidirectional,
    /// Constant-time jumps and distances.
    RandomAccess,
}

/// Weakest category supported by both `Self` and `Other`.
#[diagnostic::on_unimplemented(
    message = "traversal categories `{Self}` and `{Other}` cannot be combined",
    label = "no common category for `{Self}` and `{Other}`",
    note = "input-only and output-only positions never combine with each other, and output-only positions only combine with output-only positions"
)]
pub trait Meet<Other: Category>: Category {
    type Out: Category;
}

/// Shorthand for `<A as Meet<B>>::Out`.
pub type MeetOf<A, B> = <A as Meet<B>>::Out;

macro_rules! impl_meet {
    ($($a:ident & $b:ident => $out:ident;)*) => {
        $(
            impl Meet<$b> for $a { type Out = $out; }
        )*
    };
}

// Symmetric pairs spelled out both ways.
impl_meet! {
    Input & Input => Input;
    Output & Output => Output;

    Input & Forward => Input;
    Forward & Input => Input;
    Input & Bidirectional => Input;
    Bidirectional & Input => Input;
    Input & RandomAccess => Input;
    RandomAccess & Input => Input;

    Forward & Forward => Forward;
    Forward & Bidirectional => Forward;
    Bidirectional & Forward => Forward;
    Forward & RandomAccess => Forward;
    RandomAccess & Forward => Forward;

    Bidirectional & Bidirectional => Bidirectional;
    Bidirectional & RandomAccess => Bidirectional;
    RandomAccess & Bidirectional => Bidirectional;

    RandomAccess & RandomAccess => RandomAccess;
}
