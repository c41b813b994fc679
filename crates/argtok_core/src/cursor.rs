//! Byte cursor over a borrowed command line.
//!
//! The cursor advances through the line byte-by-byte. Unlike a
//! sentinel-terminated buffer there is no padding to lean on -- the line is
//! borrowed directly from the caller -- so end-of-line is an explicit
//! [`is_eof()`](Cursor::is_eof) check rather than a sentinel byte. The
//! quoted-run skip methods use `memchr` so that long quoted stretches are
//! not walked one byte at a time.

use crate::scan::is_delimiter;

/// Cursor over the bytes of a borrowed command line.
///
/// The cursor is [`Copy`], enabling cheap state snapshots: `scan_next`
/// works on a local copy and only its returned offset is kept.
///
/// # Invariant
///
/// `pos <= line.len()`, and `pos` always falls on a UTF-8 character
/// boundary. Every advancing method either moves by one ASCII byte or
/// stops *at* an ASCII byte found by `memchr`, so the boundary invariant
/// holds by construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    line: &'a str,
    /// Current read position (byte index into `line`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is past the end of `line` or not on a character
    /// boundary. Offsets obtained from a previous scan always qualify.
    pub fn new(line: &'a str, offset: usize) -> Self {
        assert!(
            line.is_char_boundary(offset),
            "offset {offset} is not a char boundary of the line"
        );
        Self { line, pos: offset }
    }

    /// Returns the byte at the current position.
    ///
    /// Must not be called at end of line; check [`is_eof()`](Self::is_eof)
    /// first. Scan loops are structured so this holds.
    #[inline]
    pub fn current(&self) -> u8 {
        self.line.as_bytes()[self.pos]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Returns `true` once the cursor has consumed the whole line.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Current byte offset into the line.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Resolve a span back to the line text.
    ///
    /// `start..end` must have been produced by cursor positions, which
    /// guarantees character boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.line[start..end]
    }

    /// Advance past a maximal run of token delimiters.
    ///
    /// A simple byte loop: runs between arguments are short (typically a
    /// single space), so this beats setting up a vectorized search.
    #[inline]
    pub fn eat_delimiters(&mut self) {
        while !self.is_eof() && is_delimiter(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `'` or end of line.
    ///
    /// Used while single quotes are open: every byte other than the
    /// closing quote is ordinary content there (including `\`), so the
    /// whole run can be skipped with a SIMD search.
    pub fn skip_single_quoted_run(&mut self) {
        let rest = &self.line.as_bytes()[self.pos..];
        match memchr::memchr(b'\'', rest) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.line.len(),
        }
    }

    /// Advance to the next `"` or `\` or end of line.
    ///
    /// Used while double quotes are open: only the closing quote and the
    /// escape byte are structural there.
    pub fn skip_double_quoted_run(&mut self) {
        let rest = &self.line.as_bytes()[self.pos..];
        match memchr::memchr2(b'"', b'\\', rest) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.line.len(),
        }
    }
}
