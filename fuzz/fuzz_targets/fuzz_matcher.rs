//! Fuzz target for the matcher.
//!
//! Matching never panics on arbitrary text or candidates, in any mode.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sqltab_core::{find_matches, Label, MatchOptions};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    text: String,
    candidates: Vec<String>,
    fuzzy: bool,
    start_only: bool,
}

fuzz_target!(|input: FuzzInput| {
    let options = MatchOptions {
        fuzzy: input.fuzzy,
        start_only: input.start_only,
    };
    let matches = find_matches(&input.text, &input.candidates, options, Label::None);
    assert!(matches.len() <= input.candidates.len());
});
