//! Low-level command-line tokenizer.
//!
//! Splits a single text buffer into shell-like argument tokens under
//! quoting and escaping rules. This crate is the standalone bottom layer:
//! it produces raw token *spans* into the caller's line with zero heap
//! allocation and never copies or rewrites the text. Removing the quote
//! and escape characters from a token (normalization) lives one layer up,
//! in the `argtok` crate.
//!
//! # Grammar
//!
//! - Tokens are separated by maximal runs of the six ASCII delimiters:
//!   space, tab, newline, carriage return, vertical tab, form feed.
//! - `\` escapes the next byte (the next byte loses any structural or
//!   delimiter meaning). Inside single quotes `\` is an ordinary byte.
//! - `'...'` and `"..."` quote their contents; a delimiter inside an open
//!   quote does not end the token. The quote byte of the *other* kind is
//!   ordinary content while a quote is open, so the two modes never nest.
//! - A line ending with a quote still open is an error
//!   ([`QuoteError`]); a line ending mid-escape is not.
//!
//! All structural bytes are ASCII, so token boundaries always fall on
//! UTF-8 character boundaries and spans can be resolved back to `&str`
//! without validation.

mod cursor;
mod scan;

pub use cursor::Cursor;
pub use scan::{is_delimiter, scan_next, ByteClass, QuoteError, RawToken, Scan, ScanState};
