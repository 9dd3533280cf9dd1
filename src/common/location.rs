//!
//! Things that help trace trivia and tokens: [Span] and [Loc].
//!

use std::ops::{Add, Bound, Range, RangeBounds};

///
/// Represents the index of a character in source code.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Loc(pub(crate) usize);

impl From<usize> for Loc {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Loc> for usize {
    fn from(value: Loc) -> Self {
        value.0
    }
}

impl<A> Add<A> for Loc
where
    usize: Add<A, Output = usize>,
{
    type Output = Loc;

    fn add(self, rhs: A) -> Self::Output {
        Self(self.0 + rhs)
    }
}

///
/// Represents the location of a token (or trivia) in source code.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    ///
    /// Start index: inclusive lower bound.
    ///
    pub(crate) start: Loc,

    ///
    /// End index: exclusive upper bound.
    ///
    pub(crate) end: Loc,
}

impl Span {
    ///
    /// The span between two locations.
    ///
    pub fn new(start: Loc, end: Loc) -> Self {
        Self { start, end }
    }

    ///
    /// A zero-width span at a location.
    ///
    pub fn empty(at: Loc) -> Self {
        Self { start: at, end: at }
    }

    pub fn start(&self) -> Loc {
        self.start
    }

    pub fn end(&self) -> Loc {
        self.end
    }

    ///
    /// Length of this span in characters.
    ///
    pub fn len(&self) -> usize {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Use this [Span] as a start, taking the range between this span's start,
    /// and the end of the last of the passed in iterator (including itself).
    ///
    pub fn combine(self, others: impl IntoIterator<Item = Span>) -> Span {
        let Self { start, end } = self;

        // Take the end bound of the last Span,
        // if others is not empty, and use that instead.
        let last = others.into_iter().last();
        if let Some(Self { end, .. }) = last {
            return Self { start, end };
        }

        Self { start, end }
    }

    ///
    /// Return the start and end bounds as a Rust [Range]
    ///
    pub fn as_range(&self) -> Range<usize> {
        self.start.0..self.end.0
    }
}

impl From<Loc> for Span {
    ///
    /// The single character at `loc`.
    ///
    fn from(loc: Loc) -> Self {
        Self {
            start: loc,
            end: loc + 1,
        }
    }
}

///
/// Utility trait for handling multiple spans.
///
pub trait SpanIter: Sized + IntoIterator<Item = Span> {
    ///
    /// Combine all of this iterator's spans,
    /// resulting in a [Span] encompassing all
    /// passed in [Span]s (assuming this iter is in ascending order).
    ///
    fn combine(self) -> Option<Span>;
}

impl<Iter: IntoIterator<Item = Span>> SpanIter for Iter {
    fn combine(self) -> Option<Span> {
        let mut iter = self.into_iter();
        iter.next().map(|s| s.combine(iter))
    }
}

impl RangeBounds<usize> for Span {
    fn start_bound(&self) -> Bound<&usize> {
        Bound::Included(&self.start.0)
    }

    fn end_bound(&self) -> Bound<&usize> {
        Bound::Excluded(&self.end.0)
    }
}

///
/// Returns the span attached to this
/// object.
///
pub trait Spanned {
    ///
    /// Returns the span attached to this
    /// object.
    ///
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

impl<T: Spanned> Spanned for &T {
    fn span(&self) -> Span {
        T::span(self)
    }
}
