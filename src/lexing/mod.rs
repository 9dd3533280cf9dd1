//!
//! Lexing support for the LogScale grammar's external tokens.
//!
//! The grammar's ordinary rules produce almost every token. The one
//! exception is [tokens::TokenKind::RegexStart]: whether a `/` opens a
//! regex literal, is a division operator, or begins a `//` comment
//! depends on context, so the host lexer defers to [scanner::Scanner]
//! whenever the grammar says a regex may start.
//!

pub mod scanner;
pub mod tokens;
pub mod utils;

pub use self::{
    scanner::{try_regex_start, ExternalScanner, Scanner},
    tokens::{Token, TokenKind, ValidSymbols},
    utils::{Decline, Lexer, ScanResult, SourceStream},
};
