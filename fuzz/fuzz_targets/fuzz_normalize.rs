//! Fuzz target for identifier escaping.
//!
//! `escape` is idempotent and `unescape` total on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sqltab_core::{escape, unescape};

fuzz_target!(|name: &str| {
    let escaped = escape(name);
    let _ = unescape(&escaped);
    assert_eq!(escape(&escaped), escaped);
});
