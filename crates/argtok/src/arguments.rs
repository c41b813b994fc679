//! Lazy argument iteration over a borrowed command line.
//!
//! Two iterators over the same scanner, differing only in error posture.
//! [`Arguments`] keeps the legacy contract: an unterminated quote ends
//! iteration as if the line were exhausted, and the error kind is lost.
//! [`StrictArguments`] yields the error. Both are cheap to construct, hold
//! only the line reference and a scan offset, and restart by constructing
//! a fresh iterator.

use argtok_core::{is_delimiter, scan_next, QuoteError, Scan};
use std::iter::FusedIterator;
use tracing::trace;

/// Lazy iterator over raw arguments, masking quoting errors.
///
/// Yields each argument as a borrowed `&str` with quotes and escapes
/// intact; callers normalize explicitly. On an unterminated quote the
/// iterator stops as if at end of line -- but the scan offset is left at
/// the offending argument, so [`remainder()`](Self::remainder) still shows
/// the un-scanned tail and [`stopped_short()`](Self::stopped_short) can
/// tell a clean exhaustion from a masked error.
#[derive(Clone, Debug)]
pub struct Arguments<'a> {
    line: &'a str,
    offset: usize,
}

impl<'a> Arguments<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        Self { line, offset: 0 }
    }

    /// The line tail the iterator has not consumed.
    ///
    /// Empty (or about to be skipped delimiters) after a clean exhaustion;
    /// the whole malformed argument after a masked quoting error.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        &self.line[self.offset..]
    }

    /// `true` if iteration has stopped (or will stop) before consuming all
    /// non-delimiter content -- the signature of a masked quoting error.
    #[must_use]
    pub fn stopped_short(&self) -> bool {
        matches!(scan_next(self.line, self.offset), Scan::Unbalanced(_))
            && self.remainder().bytes().any(|byte| !is_delimiter(byte))
    }
}

impl<'a> Iterator for Arguments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        match scan_next(self.line, self.offset) {
            Scan::Token { token, resume } => {
                self.offset = resume;
                let raw = token.text(self.line);
                trace!(start = token.start, end = token.end, raw, "argument");
                Some(raw)
            }
            Scan::Exhausted => {
                self.offset = self.line.len();
                None
            }
            // Legacy contract: the error is masked. The offset stays put
            // so remainder() exposes the un-scanned tail.
            Scan::Unbalanced(error) => {
                trace!(offset = self.offset, %error, "masking quote error");
                None
            }
        }
    }
}

impl FusedIterator for Arguments<'_> {}

/// Lazy iterator over raw arguments, surfacing quoting errors.
///
/// Identical to [`Arguments`] until the line ends with a quote still open;
/// then it yields `Err(QuoteError)` once and is done.
#[derive(Clone, Debug)]
pub struct StrictArguments<'a> {
    line: &'a str,
    offset: usize,
    done: bool,
}

impl<'a> StrictArguments<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        Self {
            line,
            offset: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for StrictArguments<'a> {
    type Item = Result<&'a str, QuoteError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match scan_next(self.line, self.offset) {
            Scan::Token { token, resume } => {
                self.offset = resume;
                Some(Ok(token.text(self.line)))
            }
            Scan::Exhausted => {
                self.done = true;
                None
            }
            Scan::Unbalanced(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for StrictArguments<'_> {}

#[cfg(test)]
mod tests;
