//! Shell-like argument splitting and normalization for command lines.
//!
//! Built on the raw scanner in [`argtok_core`]. Two layers:
//!
//! - [`tokenize`] / [`tokenize_strict`] walk a borrowed line and yield the
//!   raw arguments lazily, quotes and escapes intact.
//! - [`normalize`] turns a raw argument (or any text) into its logical
//!   value: a fresh `String` with the structural quote and escape bytes
//!   removed.
//!
//! The two iteration modes differ only in what happens when the line ends
//! with a quote still open. [`tokenize`] keeps the legacy contract of the
//! code this library replaces: iteration simply stops, as if the line had
//! ended at the offending argument ([`Arguments::remainder`] exposes the
//! un-scanned tail so the truncation is detectable). [`tokenize_strict`]
//! yields the [`QuoteError`] instead. New call sites should prefer the
//! strict mode; the masking mode exists for callers that treat a malformed
//! tail as "no more arguments".
//!
//! ```
//! use argtok::{normalize, tokenize, QuoteError};
//!
//! let raw: Vec<&str> = tokenize("say \"hi there\"").collect();
//! assert_eq!(raw, ["say", "\"hi there\""]);
//! assert_eq!(normalize(raw[1]), Ok("hi there".to_owned()));
//! assert_eq!(normalize("'open"), Err(QuoteError::UnmatchedSingleQuote));
//! ```

mod arguments;
mod normalize;

pub use argtok_core::{is_delimiter, scan_next, ByteClass, QuoteError, RawToken, Scan, ScanState};
pub use arguments::{Arguments, StrictArguments};
pub use normalize::normalize;

/// Split a line into raw arguments, masking quoting errors.
///
/// Legacy contract: an unterminated quote silently ends iteration (see the
/// crate docs). Restart by constructing a fresh iterator.
pub fn tokenize(line: &str) -> Arguments<'_> {
    Arguments::new(line)
}

/// Split a line into raw arguments, surfacing quoting errors.
///
/// Yields `Err` once if the line ends with a quote still open, then stops.
pub fn tokenize_strict(line: &str) -> StrictArguments<'_> {
    StrictArguments::new(line)
}

/// Split a line and normalize every argument.
///
/// The strict pairing of [`tokenize_strict`] and [`normalize`]: the
/// logical argument values, or the quoting error for a malformed line.
pub fn parse(line: &str) -> Result<Vec<String>, QuoteError> {
    tokenize_strict(line)
        .map(|raw| normalize(raw?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_splits_and_normalizes() {
        assert_eq!(
            parse("say \"hi there\" 'and bye'"),
            Ok(vec!["say".to_owned(), "hi there".to_owned(), "and bye".to_owned()])
        );
    }

    #[test]
    fn parse_reports_quote_errors() {
        assert_eq!(parse("ok \"open"), Err(QuoteError::UnmatchedDoubleQuote));
        assert_eq!(parse("ok 'open"), Err(QuoteError::UnmatchedSingleQuote));
    }

    #[test]
    fn parse_of_empty_line_is_empty() {
        assert_eq!(parse(""), Ok(Vec::new()));
        assert_eq!(parse("   "), Ok(Vec::new()));
    }
}
