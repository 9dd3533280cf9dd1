//!
//! ## Division context
//!
//! A `/` right after something that ends an expression is division:
//! `count / 2`, `(a + b) / c`, `x[0] / y`, `"1" / 2`.
//!
//! The grammar already says this: in those positions it does not offer
//! [TokenKind::RegexStart] at all, and the scanner trusts that signal.
//! The helpers here are for hosts that drive the scanner without grammar
//! tables, and derive an admissibility set from the previous significant
//! character instead.
//!

use finl_unicode::categories::{CharacterCategories, MinorCategory};

use super::{TokenKind, ValidSymbols};

///
/// Can this character end an expression (so a following `/` divides)?
///
/// * letters and decimal digits (field names, numbers),
/// * field-name punctuation: `_ . # % & @ \ ^`,
/// * closing `)` and `]`,
/// * a closing `"`.
///
pub fn is_expression_end(ch: &char) -> bool {
    use MinorCategory::*;

    match ch {
        '_' | '.' | '#' | '%' | '&' | '@' | '\\' | '^' => true,
        ')' | ']' | '"' => true,
        c if matches!(c.get_minor_category(), Lu | Ll | Lt | Lm | Lo | Nd) => true,
        _ => false,
    }
}

impl ValidSymbols {
    ///
    /// Admissible external tokens after `previous`, the last significant
    /// character before the cursor (`None` at the start of a query).
    ///
    pub fn following(previous: Option<char>) -> Self {
        match previous {
            Some(ch) if is_expression_end(&ch) => Self::none(),
            _ => [TokenKind::RegexStart].into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexing::tokens::{TokenKind, ValidSymbols};

    use super::is_expression_end;

    #[test]
    fn expression_ends() {
        for ch in [
            'a', 'Z', '7', '_', '.', '#', '%', '&', '@', '\\', '^', ')', ']', '"', 'é', 'ß',
        ] {
            assert!(is_expression_end(&ch), "{ch:?}");
        }
    }

    #[test]
    fn not_expression_ends() {
        for ch in ['|', '(', '[', '=', ',', '!', '<', '>', '+', '-', '*', '/', ' ', '\n', '{'] {
            assert!(!is_expression_end(&ch), "{ch:?}");
        }
    }

    #[test]
    fn division_after_identifier() {
        assert!(!ValidSymbols::following(Some('t')).contains(TokenKind::RegexStart));
        assert!(!ValidSymbols::following(Some(')')).contains(TokenKind::RegexStart));
        assert!(!ValidSymbols::following(Some('"')).contains(TokenKind::RegexStart));
    }

    #[test]
    fn regex_after_operator() {
        assert!(ValidSymbols::following(None).contains(TokenKind::RegexStart));
        assert!(ValidSymbols::following(Some('|')).contains(TokenKind::RegexStart));
        assert!(ValidSymbols::following(Some('=')).contains(TokenKind::RegexStart));
        assert!(ValidSymbols::following(Some('(')).contains(TokenKind::RegexStart));
    }
}
