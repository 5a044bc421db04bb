//! Fuzzy and prefix matching over candidate collections.
//!
//! Matching always keys on the last token of the typed text, so a
//! completion replaces exactly that token and nothing before it. Two
//! strategies share one deterministic ranking contract:
//!
//! - **Fuzzy**: the key's characters must appear in order, possibly with
//!   gaps, anywhere in the candidate. Tighter matched spans rank first,
//!   then earlier match starts.
//! - **Prefix**: plain case-insensitive substring search; with
//!   `start_only` the match window is bounded by the key length, pinning
//!   the match to the candidate's start. Earlier offsets rank first.
//!
//! Ties preserve candidate input order: the sort is stable, so callers
//! control the order of equally ranked results by the order they supply
//! candidates in.

use regex::Regex;

use crate::normalize::unescape;
use crate::types::Completion;

/// Characters that terminate the last token, besides whitespace.
const TOKEN_DELIMITERS: &[char] = &['.', '(', ')', ':', ','];

/// Maximum label length before truncation.
const LABEL_LIMIT: usize = 50;

/// How [`find_matches`] matches and ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub fuzzy: bool,
    pub start_only: bool,
}

impl MatchOptions {
    /// Subsequence matching, the default for catalog names.
    pub fn fuzzy() -> Self {
        Self {
            fuzzy: true,
            start_only: false,
        }
    }

    /// Substring matching anchored at the candidate start.
    pub fn prefix() -> Self {
        Self {
            fuzzy: false,
            start_only: true,
        }
    }

    /// Substring matching at any offset.
    pub fn substring() -> Self {
        Self {
            fuzzy: false,
            start_only: false,
        }
    }
}

/// Descriptive label attached to matches.
#[derive(Debug, Clone, Copy)]
pub enum Label<'a> {
    /// No label.
    None,
    /// The same label for every match ("column", "keyword", ...).
    Uniform(&'a str),
    /// One label per candidate, indexed in candidate order.
    PerCandidate(&'a [String]),
}

/// Extract the last token of `text`: the longest suffix containing neither
/// whitespace nor a token delimiter. Text ending in whitespace has no last
/// token.
pub fn last_word(text: &str) -> &str {
    if text.is_empty() || text.ends_with(char::is_whitespace) {
        return "";
    }
    match text.rfind(|c: char| c.is_whitespace() || TOKEN_DELIMITERS.contains(&c)) {
        Some(idx) => {
            let delimiter_len = text[idx..].chars().next().map_or(1, char::len_utf8);
            &text[idx + delimiter_len..]
        }
        None => text,
    }
}

/// Match the last token of `text` against `candidates` and return ranked
/// completions.
///
/// An empty key matches every candidate. The candidate collection is never
/// mutated and may be empty. Each completion's `start_position` is the
/// negated key length, so applying it replaces the matched token.
pub fn find_matches<S: AsRef<str>>(
    text: &str,
    candidates: &[S],
    options: MatchOptions,
    label: Label<'_>,
) -> Vec<Completion> {
    let key = last_word(text).to_lowercase();
    let start_position = -(key.chars().count() as i32);

    let fuzzy_pattern = if options.fuzzy {
        match fuzzy_regex(&key) {
            Some(pattern) => Some(pattern),
            // A key so large the pattern will not compile matches nothing.
            None => return Vec::new(),
        }
    } else {
        None
    };

    let rank = |candidate: &str| -> Option<(usize, usize)> {
        if let Some(pattern) = &fuzzy_pattern {
            let target = unescape(candidate);
            let found = pattern.find(target)?;
            let span = target[found.start()..found.end()].chars().count();
            let offset = target[..found.start()].chars().count();
            Some((span, offset))
        } else if options.start_only {
            // The window is bounded by the key length, so only offset zero
            // can hold a match.
            candidate
                .to_lowercase()
                .starts_with(&key)
                .then_some((0, 0))
        } else {
            let lowered = candidate.to_lowercase();
            let at = lowered.find(&key)?;
            Some((lowered[..at].chars().count(), 0))
        }
    };

    let mut ranked: Vec<((usize, usize), Completion)> = Vec::new();
    for (index, candidate) in candidates.iter().enumerate() {
        let candidate = candidate.as_ref();
        let Some(sort_key) = rank(candidate) else {
            continue;
        };
        let display_meta = match label {
            Label::None => None,
            Label::Uniform(meta) => Some(truncate_label(meta)),
            Label::PerCandidate(metas) => metas.get(index).map(|meta| truncate_label(meta)),
        };
        ranked.push((
            sort_key,
            Completion {
                text: candidate.to_string(),
                start_position,
                display_meta,
            },
        ));
    }

    // Stable: equal sort keys keep candidate input order.
    ranked.sort_by_key(|(sort_key, _)| *sort_key);
    ranked.into_iter().map(|(_, completion)| completion).collect()
}

/// Case-insensitive "key characters in order, any gaps" pattern.
fn fuzzy_regex(key: &str) -> Option<Regex> {
    let mut pattern = String::from("(?i)");
    let mut first = true;
    for c in key.chars() {
        if !first {
            pattern.push_str(".*?");
        }
        pattern.push_str(&regex::escape(&c.to_string()));
        first = false;
    }
    Regex::new(&pattern).ok()
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() > LABEL_LIMIT {
        let head: String = label.chars().take(LABEL_LIMIT - 3).collect();
        format!("{head}...")
    } else {
        label.to_string()
    }
}
