//! The canonical quote/escape state machine and the raw scanner.
//!
//! One transition function, [`ScanState::step`], defines the entire
//! grammar. The scanner here drives it to find token boundaries; the
//! normalizer in `argtok` drives the same function to decide which bytes
//! to copy. Keeping a single machine is deliberate: the historical code
//! this replaces carried several slightly divergent copies.

use crate::cursor::Cursor;

/// Returns `true` for the six bytes that separate tokens when unquoted.
///
/// The set is fixed ASCII whitespace: space, tab, newline, carriage
/// return, vertical tab (0x0B), form feed (0x0C). No Unicode whitespace
/// classification is performed.
#[inline]
#[must_use]
pub fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Which quote was left open when the line ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum QuoteError {
    /// The line ended inside a `'...'` section.
    #[error("unterminated single quote in argument list")]
    UnmatchedSingleQuote,
    /// The line ended inside a `"..."` section.
    #[error("unterminated double quote in argument list")]
    UnmatchedDoubleQuote,
}

/// How [`ScanState::step`] classified a byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteClass {
    /// Ordinary content; part of the token's logical value.
    Content,
    /// Consumed by the grammar itself (an escaping `\` or a quote
    /// toggle); never part of the logical value.
    Structural,
    /// An unquoted, unescaped delimiter: the token ends here.
    Boundary,
}

/// Quoting/escaping state carried between bytes.
///
/// # Invariant
///
/// At most one of `in_single`/`in_double` is ever true: each quote arm in
/// [`step`](Self::step) is guarded on the other mode being off, so the
/// byte that would open the second mode is classified as content instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    escaping: bool,
    in_single: bool,
    in_double: bool,
}

impl ScanState {
    /// Feed one byte through the grammar.
    #[inline]
    pub fn step(&mut self, byte: u8) -> ByteClass {
        if self.escaping {
            // The escaped byte is plain content whatever its value.
            self.escaping = false;
            return ByteClass::Content;
        }
        match byte {
            b'\\' if !self.in_single => {
                self.escaping = true;
                ByteClass::Structural
            }
            b'\'' if !self.in_double => {
                self.in_single = !self.in_single;
                ByteClass::Structural
            }
            b'"' if !self.in_single => {
                self.in_double = !self.in_double;
                ByteClass::Structural
            }
            _ if is_delimiter(byte) && !self.in_single && !self.in_double => ByteClass::Boundary,
            _ => ByteClass::Content,
        }
    }

    /// The quote left open, if any.
    ///
    /// A pending escape at end of line is not an error; the dangling `\`
    /// is simply dropped by normalization.
    #[inline]
    pub fn unbalanced(&self) -> Option<QuoteError> {
        if self.in_single {
            Some(QuoteError::UnmatchedSingleQuote)
        } else if self.in_double {
            Some(QuoteError::UnmatchedDoubleQuote)
        } else {
            None
        }
    }

    /// `true` while single quotes are open.
    #[inline]
    pub fn in_single(&self) -> bool {
        self.in_single
    }

    /// `true` while double quotes are open.
    #[inline]
    pub fn in_double(&self) -> bool {
        self.in_double
    }

    /// `true` when the previous byte was an unconsumed escaping `\`.
    ///
    /// Never true while single quotes are open: `\` is ordinary content
    /// there, and an escaped `'` cannot open single-quote mode.
    #[inline]
    pub fn escaping(&self) -> bool {
        self.escaping
    }
}

/// Span of one raw argument within the line.
///
/// Quote and escape bytes are left intact; resolve the logical value with
/// `argtok::normalize`. A token produced by [`scan_next`] is non-empty,
/// contains no unquoted unescaped delimiter, and leaves no quote section
/// open, so normalizing it cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    /// Byte offset of the first token byte.
    pub start: usize,
    /// Byte offset one past the last token byte.
    pub end: usize,
}

impl RawToken {
    /// Resolve the span against the line it was scanned from.
    #[must_use]
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }

    /// Span length in bytes. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Never true for scanner-produced tokens; present for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Outcome of scanning for one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// Next token found; resume subsequent scans at `resume`.
    Token {
        /// The raw argument span.
        token: RawToken,
        /// Offset of the delimiter (or end of line) that ended the token.
        resume: usize,
    },
    /// Only delimiters (or nothing) remained. Not an error.
    Exhausted,
    /// The line ended with a quote still open.
    Unbalanced(QuoteError),
}

/// Scan the next raw token starting at `offset`.
///
/// Pure function of `(line, offset)`; no allocation. Skips a maximal
/// delimiter run, then walks [`ScanState::step`] until an unquoted,
/// unescaped delimiter or the end of the line. Long quoted runs are
/// skipped with `memchr` rather than stepped byte-by-byte, which is
/// valid because every skipped byte is content in those modes.
///
/// # Panics
///
/// Panics if `offset` is past the end of `line` or inside a UTF-8
/// sequence (see [`Cursor::new`]).
#[must_use]
pub fn scan_next(line: &str, offset: usize) -> Scan {
    let mut cursor = Cursor::new(line, offset);
    cursor.eat_delimiters();
    if cursor.is_eof() {
        return Scan::Exhausted;
    }

    let start = cursor.pos();
    let mut state = ScanState::default();
    while !cursor.is_eof() {
        match state.step(cursor.current()) {
            ByteClass::Boundary => break,
            ByteClass::Content | ByteClass::Structural => cursor.advance(),
        }
        // Fast-forward through quoted runs. Must not skip while an escape
        // is pending: the escaped byte has to pass through `step`.
        if state.in_single() {
            cursor.skip_single_quoted_run();
        } else if state.in_double() && !state.escaping() {
            cursor.skip_double_quoted_run();
        }
    }

    if let Some(error) = state.unbalanced() {
        return Scan::Unbalanced(error);
    }
    Scan::Token {
        token: RawToken {
            start,
            end: cursor.pos(),
        },
        resume: cursor.pos(),
    }
}
