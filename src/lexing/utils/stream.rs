use logscale_scanner_macros::Spanned;

use crate::{
    common::{Loc, Source, SourceError, Span, SpanIter},
    lexing::tokens::{Token, TokenKind},
};

use super::Lexer;

///
/// Things that a [Lexer] can
/// check are coming up.
///
pub trait Lookahead {
    fn upcoming(self, next: Option<char>) -> bool;
}

impl Lookahead for char {
    fn upcoming(self, next: Option<char>) -> bool {
        next == Some(self)
    }
}

impl<F: Fn(&char) -> bool> Lookahead for F {
    fn upcoming(self, next: Option<char>) -> bool {
        next.as_ref().map(self).unwrap_or(false)
    }
}

///
/// A character skipped as insignificant whitespace.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Spanned)]
pub struct Trivia {
    span: Span,
}

///
/// An in-memory host cursor over a [Source].
///
/// Follows the same contract as a tree-sitter lexer:
/// * skipped characters are trivia and move the token start along,
/// * [Lexer::mark_end] pins the token end (otherwise the token
///   ends wherever the cursor stopped),
/// * advancing at the end of input does nothing.
///
#[derive(Debug, Clone)]
pub struct SourceStream<'a, S: Source> {
    index: usize,
    source: &'a S,
    token_start: usize,
    token_end: Option<usize>,
    trivia: Vec<Trivia>,
    result: Option<TokenKind>,
}

impl<'a, S: Source> SourceStream<'a, S> {
    ///
    /// Create a new stream from a source.
    ///
    pub fn new(source: &'a S) -> Self {
        Self {
            index: 0,
            source,
            token_start: 0,
            token_end: None,
            trivia: vec![],
            result: None,
        }
    }

    ///
    /// Create a stream resuming at `loc`, as a host re-lexing
    /// from a cached position would.
    ///
    pub fn at(source: &'a S, loc: Loc) -> Result<Self, SourceError> {
        let len = source.characters().len();
        if loc.0 > len {
            return Err(SourceError::OutOfBounds { loc: loc.0, len });
        }

        let mut stream = Self::new(source);
        stream.index = loc.0;
        stream.token_start = loc.0;
        Ok(stream)
    }

    ///
    /// Returns the source where this [SourceStream]
    /// came from.
    ///
    pub fn source(&self) -> &S {
        self.source
    }

    ///
    /// The cursor's current location.
    ///
    pub fn position(&self) -> Loc {
        Loc(self.index)
    }

    ///
    /// Every character skipped as trivia so far.
    ///
    pub fn trivia(&self) -> &[Trivia] {
        &self.trivia
    }

    ///
    /// The span covered by all trivia, if any was skipped.
    ///
    pub fn trivia_span(&self) -> Option<Span> {
        use crate::common::Spanned;

        self.trivia.iter().map(Spanned::span).combine()
    }

    ///
    /// The committed token, if a result symbol was set.
    ///
    pub fn token(&self) -> Option<Token> {
        let kind = self.result?;
        let end = self.token_end.unwrap_or(self.index);

        Some(Token::new(kind, Span::new(Loc(self.token_start), Loc(end))))
    }

    ///
    /// The marked end of the token, if [Lexer::mark_end] was called.
    ///
    pub fn marked_end(&self) -> Option<Loc> {
        self.token_end.map(Loc)
    }

    ///
    /// Everything from the cursor onwards.
    ///
    pub fn left(&self) -> Option<String> {
        self.source
            .characters()
            .get(self.index..)
            .map(|s| s.iter().collect())
    }
}

impl<'a, S: Source> Lexer for SourceStream<'a, S> {
    fn lookahead(&self) -> Option<char> {
        self.source.characters().get(self.index).copied()
    }

    fn advance(&mut self, skip: bool) {
        if self.index >= self.source.characters().len() {
            return;
        }

        if skip {
            self.trivia.push(Trivia {
                span: Span::from(Loc(self.index)),
            });
            self.token_start = self.index + 1;
        }

        self.index += 1;
    }

    fn mark_end(&mut self) {
        self.token_end = Some(self.index);
    }

    fn set_result_symbol(&mut self, kind: TokenKind) {
        self.result = Some(kind);
    }
}
