//! Public API types shared with the classifier and frontend.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which of the two relation mappings an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    Tables,
    Views,
}

/// A table reference in scope at the cursor, as reported by the classifier.
///
/// `schema` is absent for unqualified references, which are then resolved
/// through the active search path. `alias` is carried for classifier
/// round-trips; column resolution keys on `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScopedTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl ScopedTable {
    pub fn new(schema: Option<&str>, name: &str) -> Self {
        Self {
            schema: schema.map(str::to_string),
            name: name.to_string(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }
}

/// One completion request emitted by the SQL-context classifier.
///
/// The set is closed on purpose: the orchestrator matches exhaustively, so
/// a new context kind is a compile error at the dispatch site instead of a
/// silently swallowed tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SuggestionRequest {
    /// Columns of the referenced tables. With `drop_unique`, only columns
    /// appearing in more than one referenced table survive (USING-clause
    /// completion).
    #[serde(rename_all = "camelCase")]
    Column {
        tables: Vec<ScopedTable>,
        #[serde(default)]
        drop_unique: bool,
    },
    /// User-defined functions, plus built-ins when unqualified.
    Function {
        #[serde(default)]
        schema: Option<String>,
    },
    /// Schema names from the catalog.
    Schema,
    /// Tables from a schema or the search path.
    Table {
        #[serde(default)]
        schema: Option<String>,
    },
    /// Views from a schema or the search path.
    View {
        #[serde(default)]
        schema: Option<String>,
    },
    /// Table aliases collected by the classifier.
    Alias { aliases: Vec<String> },
    /// Database names.
    Database,
    /// SQL keywords.
    Keyword,
    /// Registered special (backslash) commands.
    Special,
    /// User-defined datatypes, plus built-ins when unqualified.
    Datatype {
        #[serde(default)]
        schema: Option<String>,
    },
    /// Saved named queries.
    NamedQuery,
}

/// One ranked completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    /// Replacement text.
    pub text: String,
    /// Start of the replacement span relative to the cursor. Always zero or
    /// negative: the negated length of the matched token, so applying the
    /// completion replaces exactly the last token under the cursor.
    pub start_position: i32,
    /// Short descriptive label ("column", "table alias", a special
    /// command's description).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_meta: Option<String>,
}

impl Completion {
    pub fn new(text: impl Into<String>, start_position: i32) -> Self {
        Self {
            text: text.into(),
            start_position,
            display_meta: None,
        }
    }
}

/// A registered special command: its invocation name and a one-line
/// description used as the completion label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpecialCommand {
    pub name: String,
    pub description: String,
}

/// Session-level completion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CompleterOptions {
    /// Context-aware completion. When false every call falls back to
    /// prefix-matching the all-completions set against the current token.
    pub smart_completion: bool,
}

impl Default for CompleterOptions {
    fn default() -> Self {
        Self {
            smart_completion: true,
        }
    }
}
