//!
//! ## logscale-scanner
//!
//! The external scanner for the [LogScale](https://library.humio.com/)
//! query grammar.
//!
//! A `/` in a LogScale query can start a regex literal (`| /error/i`),
//! divide (`bytes / 1024`), or open a `//` comment. The grammar decides
//! where a regex is admissible; the [lexing::Scanner] decides whether the
//! characters ahead really are a regex start, and commits a one-character
//! `REGEX_START` token when they are.
//!
//! The scanner is host-agnostic: it drives anything implementing
//! [lexing::Lexer]. [lexing::SourceStream] is an in-memory host, and
//! [ffi] exports the tree-sitter external-scanner hooks.
//!

pub mod common;
pub mod ffi;
pub mod lexing;

pub use lexing::{
    try_regex_start, Decline, ExternalScanner, Lexer, ScanResult, Scanner, SourceStream, Token,
    TokenKind, ValidSymbols,
};
