//!
//! ## Regex-start disambiguation
//!
//! In the LogScale grammar a `/` may be:
//! * the start of a regex literal: `| /error/i`, `field = /^5\d\d$/`,
//! * a division operator: `eval(x := bytes / 1024)`,
//! * half of a `//` line comment.
//!
//! The grammar only offers [TokenKind::RegexStart] where a regex literal
//! is valid, so the [Scanner] has a narrow job: skip horizontal
//! whitespace, check for a single `/` that does not open a comment, and
//! commit it as a one-character token.
//!

use log::trace;

use super::{
    tokens::{
        comment::{continues_line_comment, SLASH},
        whitespace::skip_horizontal_whitespace,
        TokenKind, ValidSymbols,
    },
    utils::{Decline, Lexer, ScanResult},
};

///
/// The lifecycle a host runtime drives for every external scanner.
///
/// `Drop` stands in for the host's destroy hook.
///
pub trait ExternalScanner: Sized {
    ///
    /// Create a fresh scanner instance.
    ///
    fn create() -> Self;

    ///
    /// Write the scanner's state into `buffer`,
    /// returning how many bytes were written.
    ///
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    ///
    /// Restore state previously written by [ExternalScanner::serialize].
    ///
    fn deserialize(&mut self, buffer: &[u8]);

    ///
    /// Try to produce one of the `valid` tokens at the lexer's position.
    ///
    fn scan<L: Lexer>(&mut self, lexer: &mut L, valid: &ValidSymbols) -> bool;
}

///
/// The external scanner for the LogScale grammar.
///
/// It carries no state: every decision depends only on the admissibility
/// set and the characters ahead, so re-lexing from any cached position
/// after an edit is always safe.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scanner;

impl ExternalScanner for Scanner {
    fn create() -> Self {
        Scanner
    }

    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    fn deserialize(&mut self, _buffer: &[u8]) {}

    fn scan<L: Lexer>(&mut self, lexer: &mut L, valid: &ValidSymbols) -> bool {
        try_regex_start(lexer, valid).into()
    }
}

///
/// Decide whether a regex literal starts at the lexer's position.
///
/// Looks at most at a run of horizontal whitespace and two characters.
/// On a match, the result symbol is [TokenKind::RegexStart] and the token
/// is exactly the `/`. On no match, horizontal whitespace already skipped
/// stays consumed as trivia.
///
pub fn try_regex_start<L: Lexer>(lexer: &mut L, valid: &ValidSymbols) -> ScanResult {
    // Must come before anything advances the lexer.
    if !valid.contains(TokenKind::RegexStart) {
        return decline(Decline::NotAdmissible, 0);
    }

    let skipped = skip_horizontal_whitespace(lexer);

    if !lexer.upcoming(SLASH) {
        return decline(Decline::NoSlash, skipped);
    }

    lexer.mark_end();
    lexer.advance(false);

    if continues_line_comment(&*lexer) {
        return decline(Decline::LineComment, skipped);
    }

    lexer.set_result_symbol(TokenKind::RegexStart);
    lexer.mark_end();
    trace!("matched {} after {skipped} trivia", TokenKind::RegexStart);

    ScanResult::Matched(TokenKind::RegexStart)
}

fn decline(reason: Decline, skipped: usize) -> ScanResult {
    trace!("declined: {reason} (after {skipped} trivia)");
    ScanResult::Declined(reason)
}

#[cfg(test)]
mod tests {
    use crate::{
        common::{file::SourceFile, Loc, Source, Spanned},
        lexing::{
            tokens::{TokenKind, ValidSymbols},
            utils::{Decline, Lexer, ScanResult, SourceStream},
        },
    };

    use super::{try_regex_start, ExternalScanner, Scanner};

    fn regex_admissible() -> ValidSymbols {
        [TokenKind::RegexStart].into_iter().collect()
    }

    #[test]
    fn regex_literal() {
        let source = SourceFile::dummy_file("/abc/");
        let input = &mut source.stream();

        let result = try_regex_start(input, &regex_admissible());
        assert_eq!(result, ScanResult::Matched(TokenKind::RegexStart));

        let token = input.token().expect("Committed token");
        assert_eq!(token.kind(), TokenKind::RegexStart);
        assert_eq!(source.source_at(token), Some("/".to_string()));
        assert!(input.trivia().is_empty());
    }

    #[test]
    fn line_comment() {
        let source = SourceFile::dummy_file("//comment");
        let input = &mut source.stream();

        let result = try_regex_start(input, &regex_admissible());
        assert_eq!(result, ScanResult::Declined(Decline::LineComment));
        assert_eq!(input.token(), None);
    }

    #[test]
    fn not_admissible() {
        let source = SourceFile::dummy_file("/abc/");
        let input = &mut source.stream();

        let result = try_regex_start(input, &ValidSymbols::none());
        assert_eq!(result, ScanResult::Declined(Decline::NotAdmissible));
        assert_eq!(input.position(), Loc(0));
        assert_eq!(input.marked_end(), None);
    }

    #[test]
    fn not_admissible_consumes_no_whitespace() {
        let source = SourceFile::dummy_file("   /abc/");
        let input = &mut source.stream();

        let result = try_regex_start(input, &ValidSymbols::none());
        assert_eq!(result.declined(), Some(Decline::NotAdmissible));
        assert_eq!(input.position(), Loc(0));
        assert!(input.trivia().is_empty());
    }

    #[test]
    fn leading_whitespace_is_trivia() {
        let source = SourceFile::dummy_file("  /x");
        let input = &mut source.stream();

        assert!(try_regex_start(input, &regex_admissible()).is_match());
        assert_eq!(
            input.trivia_span().and_then(|span| source.source_at(span)),
            Some("  ".to_string())
        );

        let token = input.token().expect("Committed token");
        assert_eq!(token.span().as_range(), 2..3);
    }

    #[test]
    fn slash_at_end_of_input() {
        let source = SourceFile::dummy_file("/");
        let input = &mut source.stream();

        assert!(try_regex_start(input, &regex_admissible()).is_match());
        assert_eq!(input.token().map(|t| t.span().as_range()), Some(0..1));
    }

    #[test]
    fn no_slash_keeps_skipped_whitespace() {
        let source = SourceFile::dummy_file(" \tcount()");
        let input = &mut source.stream();

        let result = try_regex_start(input, &regex_admissible());
        assert_eq!(result, ScanResult::Declined(Decline::NoSlash));
        assert_eq!(input.trivia().len(), 2);
        assert_eq!(input.lookahead(), Some('c'));
        assert_eq!(input.token(), None);
    }

    #[test]
    fn comment_keeps_skipped_whitespace() {
        let source = SourceFile::dummy_file("  // note");
        let input = &mut source.stream();

        let result = try_regex_start(input, &regex_admissible());
        assert_eq!(result, ScanResult::Declined(Decline::LineComment));
        assert_eq!(input.trivia().len(), 2);
        // The end stays marked before the first `/`.
        assert_eq!(input.marked_end(), Some(Loc(2)));
    }

    #[test]
    fn newline_is_not_skipped() {
        let source = SourceFile::dummy_file(" \n/x/");
        let input = &mut source.stream();

        let result = try_regex_start(input, &regex_admissible());
        assert_eq!(result, ScanResult::Declined(Decline::NoSlash));
        assert_eq!(input.lookahead(), Some('\n'));
        assert_eq!(input.position(), Loc(1));
    }

    #[test]
    fn empty_input() {
        let source = SourceFile::dummy_file("");
        let input = &mut source.stream();

        let result = try_regex_start(input, &regex_admissible());
        assert_eq!(result, ScanResult::Declined(Decline::NoSlash));
    }

    #[test]
    fn slash_then_space() {
        let source = SourceFile::dummy_file("/ /");
        let input = &mut source.stream();

        assert!(try_regex_start(input, &regex_admissible()).is_match());
        assert_eq!(input.token().map(|t| t.span().as_range()), Some(0..1));
    }

    #[test]
    fn resumed_scan_matches_fresh_scan() {
        let source = SourceFile::dummy_file("#type=http | \t/5\\d\\d/");

        let fresh = &mut SourceStream::at(&source, Loc(12)).expect("In bounds");
        let fresh_result = try_regex_start(fresh, &regex_admissible());

        // Round-trip the (empty) state, as a host does before re-lexing.
        let scanner = Scanner::create();
        let mut buffer = [0xAAu8; 16];
        let written = scanner.serialize(&mut buffer);
        assert_eq!(written, 0);

        let mut restored = Scanner::create();
        restored.deserialize(&buffer[..written]);

        let resumed = &mut SourceStream::at(&source, Loc(12)).expect("In bounds");
        assert!(restored.scan(resumed, &regex_admissible()));
        assert_eq!(fresh_result, ScanResult::Matched(TokenKind::RegexStart));
        assert_eq!(fresh.token(), resumed.token());
        assert_eq!(
            source.source_at(resumed.token().expect("Committed token")),
            Some("/".to_string())
        );
    }

    #[test]
    fn scan_agrees_with_decision() {
        for text in ["/abc/", "//c", " x", "\t/"] {
            let source = SourceFile::new("agree.logscale", text);
            let decision = try_regex_start(&mut source.stream(), &regex_admissible());
            let scanned = Scanner::create().scan(&mut source.stream(), &regex_admissible());
            assert_eq!(scanned, bool::from(decision), "{text:?}");
        }
    }

    #[test]
    fn deserialize_ignores_input() {
        let mut scanner = Scanner::create();
        scanner.deserialize(b"\x01\x02garbage");
        assert_eq!(scanner, Scanner);

        let source = SourceFile::dummy_file("//x");
        assert!(!scanner.scan(&mut source.stream(), &regex_admissible()));
    }
}
