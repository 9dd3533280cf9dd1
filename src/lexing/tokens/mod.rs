//!
//! External tokens, and the character classes used to find them.
//!

pub mod comment;
pub mod expression_end;
pub mod whitespace;

use std::fmt::Display;

use logscale_scanner_macros::Spanned;

use crate::common::Span;

///
/// Tokens produced by the external scanner.
///
/// The discriminant is the symbol index the host grammar
/// assigns to the token in its `externals` list.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum TokenKind {
    ///
    /// The `/` opening a regex literal, as in `| /error/i`.
    ///
    RegexStart = 0,
}

impl TokenKind {
    ///
    /// How many external tokens there are.
    ///
    pub const COUNT: usize = 1;

    pub const ALL: [TokenKind; TokenKind::COUNT] = [TokenKind::RegexStart];

    ///
    /// The host grammar's symbol for this token.
    ///
    pub fn symbol(self) -> u16 {
        self as u16
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::RegexStart => write!(f, "REGEX_START"),
        }
    }
}

///
/// A token committed by the scanner.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Spanned)]
pub struct Token {
    kind: TokenKind,
    span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

///
/// The admissibility set: which external tokens the grammar
/// considers valid at the current position.
///
/// This is read-only to the scanner.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValidSymbols([bool; TokenKind::COUNT]);

impl ValidSymbols {
    ///
    /// Nothing is admissible.
    ///
    pub const fn none() -> Self {
        Self([false; TokenKind::COUNT])
    }

    ///
    /// Everything is admissible.
    ///
    pub const fn all() -> Self {
        Self([true; TokenKind::COUNT])
    }

    ///
    /// Reads the host's flag array, indexed by [TokenKind::index].
    ///
    /// Missing entries are absent; extra entries are ignored.
    ///
    pub fn from_slice(flags: &[bool]) -> Self {
        let mut valid = Self::none();
        for (slot, flag) in valid.0.iter_mut().zip(flags) {
            *slot = *flag;
        }

        valid
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.0[kind.index()]
    }

    pub fn insert(&mut self, kind: TokenKind) {
        self.0[kind.index()] = true;
    }

    pub fn remove(&mut self, kind: TokenKind) {
        self.0[kind.index()] = false;
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|flag| *flag)
    }
}

impl FromIterator<TokenKind> for ValidSymbols {
    fn from_iter<T: IntoIterator<Item = TokenKind>>(iter: T) -> Self {
        let mut valid = Self::none();
        for kind in iter {
            valid.insert(kind);
        }

        valid
    }
}
