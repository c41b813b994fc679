//! Property-based tests for argument splitting and normalization.
//!
//! These tests use proptest to generate lines mixing content, delimiters,
//! quotes, and escapes, and verify the cross-cutting guarantees:
//! 1. No raw argument contains a top-level delimiter.
//! 2. Every raw argument normalizes cleanly (scanner tokens are balanced).
//! 3. Plain text round-trips through normalization unchanged.
//! 4. Strict and masking iteration agree wherever both produce arguments.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::arc_with_non_send_sync,
    reason = "Proptest macros internally use Arc"
)]

use argtok::{is_delimiter, normalize, tokenize, tokenize_strict, ByteClass, ScanState};
use proptest::prelude::*;

/// Generate lines biased towards structural bytes so the quoting and
/// escaping paths are actually exercised.
fn line_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => prop::char::range('a', 'z'),
            2 => Just(' '),
            1 => Just('\t'),
            1 => Just('\n'),
            1 => Just('\''),
            1 => Just('"'),
            1 => Just('\\'),
            1 => Just('é'),
        ],
        0..80,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn no_raw_argument_contains_a_top_level_delimiter(line in line_strategy()) {
        for raw in tokenize(&line) {
            let mut state = ScanState::default();
            for &byte in raw.as_bytes() {
                prop_assert_ne!(
                    state.step(byte),
                    ByteClass::Boundary,
                    "top-level delimiter in argument {:?} of line {:?}",
                    raw,
                    line
                );
            }
        }
    }

    #[test]
    fn every_raw_argument_normalizes_cleanly(line in line_strategy()) {
        for raw in tokenize(&line) {
            prop_assert!(
                normalize(raw).is_ok(),
                "scanner produced unnormalizable argument {:?} from line {:?}",
                raw,
                line
            );
        }
    }

    #[test]
    fn plain_text_normalizes_to_itself(text in "[a-z0-9 \t.,:/=-]{0,60}") {
        prop_assert_eq!(normalize(&text), Ok(text.clone()));
    }

    #[test]
    fn strict_and_masking_modes_agree_on_the_argument_prefix(line in line_strategy()) {
        let masked: Vec<&str> = tokenize(&line).collect();
        let strict: Vec<&str> = tokenize_strict(&line)
            .map_while(Result::ok)
            .collect();
        prop_assert_eq!(masked, strict);
    }

    #[test]
    fn masked_iteration_consumes_everything_or_flags_the_stop(line in line_strategy()) {
        let mut args = tokenize(&line);
        args.by_ref().for_each(drop);
        if args.stopped_short() {
            prop_assert!(args.remainder().bytes().any(|b| !is_delimiter(b)));
        } else {
            prop_assert!(args.remainder().bytes().all(is_delimiter));
        }
    }

    #[test]
    fn parse_agrees_with_tokenize_plus_normalize(line in line_strategy()) {
        let expected: Result<Vec<String>, _> = tokenize_strict(&line)
            .map(|raw| normalize(raw?))
            .collect();
        prop_assert_eq!(argtok::parse(&line), expected);
    }
}
