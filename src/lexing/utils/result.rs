use std::fmt::Display;

use crate::lexing::tokens::TokenKind;

///
/// Why the scanner declined to produce a token.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decline {
    ///
    /// The grammar does not admit a regex here
    /// (for example, right after an identifier, `/` is division).
    ///
    NotAdmissible,

    ///
    /// The next significant character is not `/`.
    ///
    NoSlash,

    ///
    /// `//` opens a line comment.
    ///
    LineComment,
}

impl Display for Decline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decline::NotAdmissible => write!(f, "regex start not admissible"),
            Decline::NoSlash => write!(f, "no `/` ahead"),
            Decline::LineComment => write!(f, "`//` opens a comment"),
        }
    }
}

///
/// The outcome of one scanner decision.
///
/// There is no error case: a decision is either a match
/// or a (reasoned) refusal.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanResult {
    ///
    /// A token of this kind was committed on the lexer.
    ///
    Matched(TokenKind),

    ///
    /// No token was produced.
    ///
    /// Trivia skipped before the decision stays consumed.
    ///
    Declined(Decline),
}

impl ScanResult {
    pub fn is_match(&self) -> bool {
        matches!(self, ScanResult::Matched(_))
    }

    ///
    /// The reason for declining, if this is not a match.
    ///
    pub fn declined(&self) -> Option<Decline> {
        match self {
            ScanResult::Matched(_) => None,
            ScanResult::Declined(reason) => Some(*reason),
        }
    }
}

impl From<ScanResult> for bool {
    fn from(value: ScanResult) -> Self {
        value.is_match()
    }
}
