//! Normalization: strip the structural quote and escape bytes from text.
//!
//! Runs the same [`ScanState`] machine as the scanner, but instead of
//! tracking a token boundary it copies the literal runs between structural
//! bytes into a fresh `String`. Delimiters are ordinary content here:
//! normalization accepts arbitrary text, not only scanner-produced tokens,
//! and performs its own quote-balance check.

use argtok_core::{ByteClass, QuoteError, ScanState};

/// Convert text into its logical value.
///
/// Quote toggles and escaping backslashes are removed; everything else is
/// kept, including any delimiters. An escaped byte is always kept whatever
/// its value (`\"`, `\\` and `\ ` all degrade to the plain byte). A
/// dangling `\` at the end of the text is dropped, not an error. Text with
/// a quote left open is the only failure.
///
/// One linear pass; allocates at most once, never more than `text.len()`
/// bytes. Plain text (no `\`, `'` or `"`) round-trips unchanged.
///
/// ```
/// use argtok::{normalize, QuoteError};
///
/// assert_eq!(normalize("a\\ b"), Ok("a b".to_owned()));
/// assert_eq!(normalize("'a\\b'"), Ok("a\\b".to_owned()));
/// assert_eq!(normalize("\"unterminated"), Err(QuoteError::UnmatchedDoubleQuote));
/// ```
pub fn normalize(text: &str) -> Result<String, QuoteError> {
    let bytes = text.as_bytes();

    // Fast path: nothing structural anywhere, the value is the text.
    if memchr::memchr3(b'\\', b'\'', b'"', bytes).is_none() {
        return Ok(text.to_owned());
    }

    let mut normalized = String::with_capacity(text.len());
    let mut state = ScanState::default();
    // Start of the literal run pending a copy.
    let mut first = 0;

    for (position, &byte) in bytes.iter().enumerate() {
        match state.step(byte) {
            // Boundary only means "token ends here" to the scanner; for
            // normalization a delimiter is content like any other byte.
            ByteClass::Content | ByteClass::Boundary => {}
            ByteClass::Structural => {
                normalized.push_str(&text[first..position]);
                first = position + 1;
            }
        }
    }

    if let Some(error) = state.unbalanced() {
        return Err(error);
    }

    // A trailing dangling escape needs no handling here: the `\` was
    // already elided when it was classified structural, leaving an empty
    // final run.
    normalized.push_str(&text[first..]);
    Ok(normalized)
}
