//!
//! Utilities for lexing.
//!

pub mod result;
pub mod stream;

pub use self::{
    result::{Decline, ScanResult},
    stream::{Lookahead, SourceStream, Trivia},
};

use super::tokens::TokenKind;

///
/// The capabilities a host lexer exposes to the scanner.
///
/// This is the whole of the host contract: peek at one character,
/// advance (optionally as trivia), commit a token end, and tag the
/// result. The scanner never holds on to a [Lexer] past one call.
///
pub trait Lexer {
    ///
    /// The upcoming character, or `None` at the end of input.
    ///
    fn lookahead(&self) -> Option<char>;

    ///
    /// Move past the upcoming character.
    ///
    /// With `skip`, the character is insignificant whitespace (trivia)
    /// and is not part of the token being scanned.
    ///
    fn advance(&mut self, skip: bool);

    ///
    /// Commit the current position as the end of the token.
    ///
    fn mark_end(&mut self);

    ///
    /// Tag the token being produced.
    ///
    fn set_result_symbol(&mut self, kind: TokenKind);

    ///
    /// Checks if a lookahead pattern is next.
    ///
    fn upcoming<L: Lookahead>(&self, lookahead: L) -> bool
    where
        Self: Sized,
    {
        lookahead.upcoming(self.lookahead())
    }
}
