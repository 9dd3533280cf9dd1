//!
//! ## Horizontal whitespace
//! Space that never contributes syntactically where a regex may start.
//!
//! Newlines are deliberately not included: the grammar gives them
//! meaning elsewhere, so the scanner must not step over one.
//!

use crate::lexing::utils::Lexer;

///
/// Is this character horizontal whitespace?
///
/// Space, tab, carriage return and form feed.
///
pub fn is_horizontal_whitespace(ch: &char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\u{000C}')
}

///
/// Advance past a run of horizontal whitespace, as trivia.
///
/// Returns how many characters were skipped.
///
pub fn skip_horizontal_whitespace<L: Lexer>(lexer: &mut L) -> usize {
    let mut skipped = 0;
    while lexer.upcoming(is_horizontal_whitespace) {
        lexer.advance(true);
        skipped += 1;
    }

    skipped
}
