//!
//! ## tree-sitter ABI
//!
//! The C entry points a tree-sitter parser looks up for the grammar's
//! external scanner, and the `TSLexer` layout they receive.
//!

use std::{
    os::raw::{c_char, c_uint, c_void},
    ptr::NonNull,
};

use crate::lexing::{ExternalScanner, Lexer, Scanner, TokenKind, ValidSymbols};

///
/// The lexer handed to external scanners by the tree-sitter runtime.
///
/// Field order and types mirror `TSLexer` in `tree_sitter/parser.h`.
///
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub log: Option<unsafe extern "C" fn(*const TSLexer, *const c_char, ...)>,
}

///
/// A [Lexer] over a runtime-owned [TSLexer].
///
/// Only lives for the duration of one scan call.
///
struct HostLexer {
    raw: NonNull<TSLexer>,
}

impl HostLexer {
    ///
    /// # Safety
    /// `raw` must point to a live [TSLexer] for as long as this value exists.
    ///
    unsafe fn new(raw: NonNull<TSLexer>) -> Self {
        Self { raw }
    }
}

impl Lexer for HostLexer {
    fn lookahead(&self) -> Option<char> {
        let raw = self.raw.as_ptr();

        // SAFETY: valid for the lifetime of `self` (see HostLexer::new).
        unsafe {
            if ((*raw).eof)(raw) {
                return None;
            }

            char::from_u32((*raw).lookahead as u32)
        }
    }

    fn advance(&mut self, skip: bool) {
        let raw = self.raw.as_ptr();

        // SAFETY: as above.
        unsafe { ((*raw).advance)(raw, skip) }
    }

    fn mark_end(&mut self) {
        let raw = self.raw.as_ptr();

        // SAFETY: as above.
        unsafe { ((*raw).mark_end)(raw) }
    }

    fn set_result_symbol(&mut self, kind: TokenKind) {
        // SAFETY: as above.
        unsafe { (*self.raw.as_ptr()).result_symbol = kind.symbol() }
    }
}

#[no_mangle]
pub extern "C" fn tree_sitter_logscale_external_scanner_create() -> *mut c_void {
    // Stateless: there is no payload to allocate.
    std::ptr::null_mut()
}

#[no_mangle]
pub extern "C" fn tree_sitter_logscale_external_scanner_destroy(_payload: *mut c_void) {}

#[no_mangle]
pub extern "C" fn tree_sitter_logscale_external_scanner_serialize(
    _payload: *mut c_void,
    _buffer: *mut c_char,
) -> c_uint {
    Scanner::create().serialize(&mut []) as c_uint
}

#[no_mangle]
pub extern "C" fn tree_sitter_logscale_external_scanner_deserialize(
    _payload: *mut c_void,
    _buffer: *const c_char,
    _length: c_uint,
) {
    Scanner::create().deserialize(&[]);
}

///
/// # Safety
/// `lexer` must be a live [TSLexer] and `valid_symbols` must point to at
/// least [TokenKind::COUNT] flags, as the tree-sitter runtime guarantees.
/// Null pointers are tolerated and yield `false`.
///
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_logscale_external_scanner_scan(
    _payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    let Some(raw) = NonNull::new(lexer) else {
        return false;
    };

    if valid_symbols.is_null() {
        return false;
    }

    // SAFETY: non-null, and sized by the grammar's external token count.
    let flags = unsafe { std::slice::from_raw_parts(valid_symbols, TokenKind::COUNT) };
    let valid = ValidSymbols::from_slice(flags);

    // SAFETY: the runtime keeps `lexer` alive for this call.
    let mut host = unsafe { HostLexer::new(raw) };
    Scanner::create().scan(&mut host, &valid)
}
