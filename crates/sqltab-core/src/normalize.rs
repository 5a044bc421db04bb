//! Identifier escaping and unescaping.
//!
//! Every name stored in the catalog is kept in *escaped* form: wrapped in
//! double quotes when quoting would be required to use it in a statement
//! (reserved words, names that are not plain lower-snake identifiers, names
//! colliding with a built-in function). Names that need no quoting are
//! stored verbatim, so escaped and display form coincide for the common
//! case.
//!
//! Both operations are pure and total. [`escape`] is idempotent: feeding an
//! already-quoted name back in returns it unchanged. [`unescape`] strips
//! exactly one bounding quote pair and makes no attempt to handle embedded
//! quote characters.

use std::sync::OnceLock;

use regex::Regex;

use crate::vocab;

/// Names matching this pattern never need quoting.
fn plain_name_pattern() -> &'static Regex {
    static PLAIN_NAME: OnceLock<Regex> = OnceLock::new();
    PLAIN_NAME.get_or_init(|| {
        Regex::new(r"^[_a-z][_a-z0-9$]*$").expect("plain-name pattern is valid")
    })
}

/// Quote `name` if using it as an identifier would require quoting.
///
/// Empty input and already-quoted input are returned unchanged.
pub fn escape(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    if is_escaped(name) {
        return name.to_string();
    }

    let upper = name.to_uppercase();
    let needs_quoting = !plain_name_pattern().is_match(name)
        || vocab::reserved_words().contains(upper.as_str())
        || vocab::is_builtin_function(&upper);

    if needs_quoting {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}

/// Strip one bounding quote pair, if present.
pub fn unescape(name: &str) -> &str {
    if is_escaped(name) {
        &name[1..name.len() - 1]
    } else {
        name
    }
}

fn is_escaped(name: &str) -> bool {
    name.len() >= 2 && name.starts_with('"') && name.ends_with('"')
}

/// Escape a batch of names, preserving order.
pub fn escape_all<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names.iter().map(|name| escape(name.as_ref())).collect()
}
