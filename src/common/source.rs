//!
//! Sources of query text.
//!

use std::ops::{Bound, Range, RangeBounds};

use thiserror::Error;

use super::{Loc, Span, Spanned};
use crate::lexing::utils::SourceStream;

///
/// Errors raised while obtaining or addressing source text.
///
/// Scanning itself never fails: these only concern the host side.
///
#[derive(Debug, Error)]
pub enum SourceError {
    ///
    /// The query file could not be read.
    ///
    #[error("Could not read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    ///
    /// A location past the end of the source.
    ///
    #[error("Location {loc} is out of bounds (source has {len} characters)")]
    OutOfBounds { loc: usize, len: usize },
}

///
/// Generic idea of source text: could be a file,
/// or a simple string.
///
/// Hosts hand a [Source] to a [SourceStream], which is
/// the cursor the scanner drives.
///
pub trait Source {
    ///
    /// A friendly appropriate format to point
    /// to a location of a token.
    ///
    /// This could be line-column information, or simply an index.
    ///
    type Location<'a>
    where
        Self: 'a;

    ///
    /// Find the location of this span,
    /// and put it into a friendly appropriate format.
    ///
    fn locate(&self, span: Span) -> Option<Self::Location<'_>>;

    ///
    /// Returns the start and (exclusive) end index of this source.
    ///
    fn bounds(&self) -> Range<Loc>;

    ///
    /// Checks if a given [Span] is within bounds.
    ///
    fn in_bounds(&self, span: &Span) -> bool {
        span.start <= span.end && self.bounds().end >= span.end
    }

    ///
    /// Returns the source text at a given [Span], if within bounds.
    ///
    fn source_at(&self, span: impl Spanned) -> Option<String> {
        let span = span.span();
        if self.in_bounds(&span) {
            return Some(self.characters()[span.as_range()].iter().collect());
        }

        None
    }

    ///
    /// Get the characters in this [Source].
    ///
    fn characters(&self) -> &[char];

    ///
    /// Create a stream from the start of this source.
    ///
    fn stream(&self) -> SourceStream<'_, Self>
    where
        Self: Sized,
    {
        SourceStream::new(self)
    }
}

///
/// Utility conversion into a [Span], given
/// boundary information from the origin [Source].
///
pub trait ToSpan {
    fn to_span(self, source: &impl Source) -> Span;
}

impl<R: RangeBounds<usize>> ToSpan for R {
    fn to_span(self, source: &impl Source) -> Span {
        let Range {
            start: start_bound,
            end: end_bound,
        } = source.bounds();

        let start = match self.start_bound() {
            Bound::Included(included) => Loc(*included),
            Bound::Excluded(excluded) => Loc(*excluded + 1),
            Bound::Unbounded => start_bound,
        };

        let end = match self.end_bound() {
            Bound::Included(included) => Loc(included + 1),
            Bound::Excluded(excluded) => Loc(*excluded),
            Bound::Unbounded => end_bound,
        };

        Span { start, end }
    }
}
