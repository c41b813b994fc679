use crate::{tokenize, tokenize_strict, QuoteError};
use pretty_assertions::assert_eq;

// === Masking mode ===

#[test]
fn yields_raw_arguments_in_order() {
    let raw: Vec<&str> = tokenize("foo bar   baz").collect();
    assert_eq!(raw, ["foo", "bar", "baz"]);
}

#[test]
fn raw_arguments_keep_quotes_and_escapes() {
    let raw: Vec<&str> = tokenize("say \"hi there\" a\\ b").collect();
    assert_eq!(raw, ["say", "\"hi there\"", "a\\ b"]);
}

#[test]
fn empty_and_blank_lines_yield_nothing() {
    assert_eq!(tokenize("").count(), 0);
    assert_eq!(tokenize("   ").count(), 0);
    assert_eq!(tokenize("\t\n\x0b\x0c\r").count(), 0);
}

#[test]
fn unterminated_quote_silently_ends_iteration() {
    let raw: Vec<&str> = tokenize("ok \"open").collect();
    assert_eq!(raw, ["ok"]);
}

#[test]
fn unterminated_quote_in_first_argument_yields_nothing() {
    assert_eq!(tokenize("\"open").count(), 0);
}

#[test]
fn masked_error_is_detectable_through_remainder() {
    let mut args = tokenize("ok \"open sesame");
    assert_eq!(args.next(), Some("ok"));
    assert_eq!(args.next(), None);
    // Iteration claims exhaustion, but the tail was never consumed. The
    // remainder starts at the last consumed offset, so the delimiter run
    // before the malformed argument is still in it.
    assert_eq!(args.remainder(), " \"open sesame");
    assert!(args.stopped_short());
}

#[test]
fn clean_exhaustion_leaves_no_remainder() {
    let mut args = tokenize("a b  ");
    assert_eq!(args.by_ref().count(), 2);
    assert_eq!(args.remainder(), "");
    assert!(!args.stopped_short());
}

#[test]
fn iterator_is_fused_after_masked_error() {
    let mut args = tokenize("\"open");
    assert_eq!(args.next(), None);
    assert_eq!(args.next(), None);
}

#[test]
fn fresh_iterator_restarts_from_the_beginning() {
    let line = "one two";
    let first: Vec<&str> = tokenize(line).collect();
    let second: Vec<&str> = tokenize(line).collect();
    assert_eq!(first, second);
}

#[test]
fn clone_snapshots_iteration_state() {
    let mut args = tokenize("a b c");
    assert_eq!(args.next(), Some("a"));
    let mut snapshot = args.clone();
    assert_eq!(args.next(), Some("b"));
    assert_eq!(snapshot.next(), Some("b"));
}

// === Strict mode ===

#[test]
fn strict_mode_yields_the_error() {
    let mut args = tokenize_strict("\"open");
    assert_eq!(args.next(), Some(Err(QuoteError::UnmatchedDoubleQuote)));
    assert_eq!(args.next(), None);
}

#[test]
fn strict_mode_yields_leading_arguments_then_the_error() {
    let results: Vec<_> = tokenize_strict("ok 'open").collect();
    assert_eq!(
        results,
        [Ok("ok"), Err(QuoteError::UnmatchedSingleQuote)]
    );
}

#[test]
fn strict_mode_matches_masking_mode_on_well_formed_lines() {
    let line = "say \"hi there\" 'and bye' a\\ b";
    let masked: Vec<&str> = tokenize(line).collect();
    let strict: Result<Vec<&str>, QuoteError> = tokenize_strict(line).collect();
    assert_eq!(strict, Ok(masked));
}

#[test]
fn strict_mode_is_fused_after_the_error() {
    let mut args = tokenize_strict("'open");
    assert_eq!(args.next(), Some(Err(QuoteError::UnmatchedSingleQuote)));
    assert_eq!(args.next(), None);
    assert_eq!(args.next(), None);
}

// === Both modes on the same malformed line (the contract split) ===

#[test]
fn default_masks_where_strict_reports() {
    let line = "\"open";
    assert_eq!(tokenize(line).count(), 0);
    assert_eq!(
        tokenize_strict(line).next(),
        Some(Err(QuoteError::UnmatchedDoubleQuote))
    );
}
