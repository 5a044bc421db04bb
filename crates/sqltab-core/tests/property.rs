//! Property tests for the normalizer and matcher laws.

use proptest::prelude::*;
use sqltab_core::{escape, find_matches, unescape, Label, MatchOptions};

/// Every character of `key` appears in `target`, in order, possibly with
/// gaps.
fn is_subsequence(key: &str, target: &str) -> bool {
    let mut chars = key.chars().peekable();
    for c in target.chars() {
        if chars.peek() == Some(&c) {
            chars.next();
        }
    }
    chars.peek().is_none()
}

proptest! {
    #[test]
    fn escape_round_trips_quote_free_names(name in "[a-zA-Z0-9_$ ]{0,16}") {
        let escaped = escape(&name);
        prop_assert_eq!(unescape(&escaped), name);
    }

    #[test]
    fn escape_is_idempotent_on_its_own_output(name in ".{0,16}") {
        let once = escape(&name);
        prop_assert_eq!(escape(&once), once.clone());
    }

    #[test]
    fn fuzzy_matches_are_subsequence_supersets(
        key in "[a-z]{0,6}",
        candidates in proptest::collection::vec("[a-zA-Z_]{0,10}", 0..8),
    ) {
        let matches = find_matches(&key, &candidates, MatchOptions::fuzzy(), Label::None);
        prop_assert!(matches.len() <= candidates.len());
        for m in &matches {
            prop_assert!(
                is_subsequence(&key, &m.text.to_lowercase()),
                "{:?} does not contain {:?} as a subsequence",
                m.text,
                key
            );
        }
    }

    #[test]
    fn start_only_matches_share_the_key_as_prefix(
        key in "[a-z]{0,6}",
        candidates in proptest::collection::vec("[a-zA-Z_]{0,10}", 0..8),
    ) {
        let matches = find_matches(&key, &candidates, MatchOptions::prefix(), Label::None);
        for m in &matches {
            prop_assert!(m.text.to_lowercase().starts_with(&key));
        }
    }

    #[test]
    fn empty_candidates_always_yield_empty_results(text in "[a-z .(),:]{0,12}") {
        let candidates: Vec<String> = Vec::new();
        let matches = find_matches(&text, &candidates, MatchOptions::fuzzy(), Label::None);
        prop_assert!(matches.is_empty());
    }

    #[test]
    fn match_spans_replace_exactly_the_last_token(
        prefix in "[a-z]{0,6}",
        key in "[a-z]{1,6}",
    ) {
        let text = format!("{prefix} {key}");
        let candidates = vec![key.clone()];
        let matches = find_matches(&text, &candidates, MatchOptions::fuzzy(), Label::None);
        prop_assert_eq!(matches.len(), 1);
        prop_assert_eq!(matches[0].start_position, -(key.chars().count() as i32));
    }
}
