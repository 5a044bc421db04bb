//! Completion orchestration.
//!
//! [`SqlCompleter`] is the per-session entry point: it owns the catalog
//! snapshot, the completion settings, and handles to the external
//! registries, and turns the classifier's suggestion requests into one
//! ordered completion list. Each call is synchronous and self-contained;
//! the only state carried between calls is the catalog itself.
//!
//! Contributions are concatenated in the order the classifier emitted its
//! requests. Ranking happens per suggestion type inside the matcher; there
//! is no global re-sort across types.

use crate::catalog::Catalog;
use crate::matcher::{find_matches, Label, MatchOptions};
use crate::registry::{NamedQueryStore, SpecialRegistry};
use crate::scope;
use crate::types::{Completion, CompleterOptions, RelationKind, SuggestionRequest};
use crate::vocab;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Schemas with this prefix are implementation detail; they are hidden
/// until the user types toward them.
const SYSTEM_SCHEMA_PREFIX: &str = "pg_";

/// One session's completion engine.
pub struct SqlCompleter {
    catalog: Catalog,
    options: CompleterOptions,
    special: Option<Box<dyn SpecialRegistry>>,
    named_queries: Option<Box<dyn NamedQueryStore>>,
}

impl SqlCompleter {
    pub fn new(options: CompleterOptions) -> Self {
        Self {
            catalog: Catalog::new(),
            options,
            special: None,
            named_queries: None,
        }
    }

    /// Attach the frontend's special-command registry.
    pub fn with_special(mut self, registry: Box<dyn SpecialRegistry>) -> Self {
        self.special = Some(registry);
        self
    }

    /// Attach the named-query store.
    pub fn with_named_queries(mut self, store: Box<dyn NamedQueryStore>) -> Self {
        self.named_queries = Some(store);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable catalog access for introspection batches. Callers must not
    /// interleave extension with completion calls.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Drop all introspected metadata, e.g. on reconnect or `USE`.
    pub fn reset(&mut self) {
        self.catalog.reset();
    }

    /// Complete with the session's configured smart-completion setting.
    pub fn complete(
        &self,
        word_before_cursor: &str,
        suggestions: &[SuggestionRequest],
    ) -> Vec<Completion> {
        self.complete_with(
            word_before_cursor,
            suggestions,
            self.options.smart_completion,
        )
    }

    /// Complete with an explicit smart-completion override for this call.
    ///
    /// When smart completion is off, the suggestion requests are ignored
    /// and the whole all-completions set is prefix-matched against the
    /// current token.
    pub fn complete_with(
        &self,
        word_before_cursor: &str,
        suggestions: &[SuggestionRequest],
        smart_completion: bool,
    ) -> Vec<Completion> {
        if !smart_completion {
            let all: Vec<&String> = self.catalog.all_completions().iter().collect();
            return find_matches(
                word_before_cursor,
                &all,
                MatchOptions::prefix(),
                Label::None,
            );
        }

        let mut completions = Vec::new();

        for suggestion in suggestions {
            #[cfg(feature = "tracing")]
            debug!(?suggestion, "dispatching suggestion");

            match suggestion {
                SuggestionRequest::Column {
                    tables,
                    drop_unique,
                } => {
                    let mut columns = scope::resolve_columns(&self.catalog, tables);
                    if *drop_unique {
                        columns = scope::shared_columns(&columns);
                    }
                    completions.extend(find_matches(
                        word_before_cursor,
                        &columns,
                        MatchOptions::fuzzy(),
                        Label::Uniform("column"),
                    ));
                }
                SuggestionRequest::Function { schema } => {
                    let functions = self.catalog.function_names(schema.as_deref());
                    completions.extend(find_matches(
                        word_before_cursor,
                        &functions,
                        MatchOptions::fuzzy(),
                        Label::Uniform("function"),
                    ));
                    if schema.is_none() {
                        completions.extend(find_matches(
                            word_before_cursor,
                            vocab::FUNCTIONS,
                            MatchOptions::prefix(),
                            Label::Uniform("function"),
                        ));
                    }
                }
                SuggestionRequest::Schema => {
                    let mut schemas = self.catalog.schema_names();
                    suppress_system_schemas(&mut schemas, word_before_cursor);
                    completions.extend(find_matches(
                        word_before_cursor,
                        &schemas,
                        MatchOptions::prefix(),
                        Label::Uniform("schema"),
                    ));
                }
                SuggestionRequest::Table { schema } => {
                    let mut tables = self
                        .catalog
                        .relation_names(RelationKind::Tables, schema.as_deref());
                    if schema.is_none() {
                        suppress_system_schemas(&mut tables, word_before_cursor);
                    }
                    completions.extend(find_matches(
                        word_before_cursor,
                        &tables,
                        MatchOptions::fuzzy(),
                        Label::Uniform("table"),
                    ));
                }
                SuggestionRequest::View { schema } => {
                    let mut views = self
                        .catalog
                        .relation_names(RelationKind::Views, schema.as_deref());
                    if schema.is_none() {
                        suppress_system_schemas(&mut views, word_before_cursor);
                    }
                    completions.extend(find_matches(
                        word_before_cursor,
                        &views,
                        MatchOptions::fuzzy(),
                        Label::Uniform("view"),
                    ));
                }
                SuggestionRequest::Alias { aliases } => {
                    completions.extend(find_matches(
                        word_before_cursor,
                        aliases,
                        MatchOptions::fuzzy(),
                        Label::Uniform("table alias"),
                    ));
                }
                SuggestionRequest::Database => {
                    completions.extend(find_matches(
                        word_before_cursor,
                        self.catalog.databases(),
                        MatchOptions::prefix(),
                        Label::Uniform("database"),
                    ));
                }
                SuggestionRequest::Keyword => {
                    completions.extend(find_matches(
                        word_before_cursor,
                        self.catalog.keywords(),
                        MatchOptions::prefix(),
                        Label::Uniform("keyword"),
                    ));
                }
                SuggestionRequest::Special => {
                    let Some(registry) = &self.special else {
                        continue;
                    };
                    match registry.commands() {
                        Ok(commands) => {
                            let names: Vec<&str> =
                                commands.iter().map(|c| c.name.as_str()).collect();
                            let descriptions: Vec<String> =
                                commands.iter().map(|c| c.description.clone()).collect();
                            completions.extend(find_matches(
                                word_before_cursor,
                                &names,
                                MatchOptions::prefix(),
                                Label::PerCandidate(&descriptions),
                            ));
                        }
                        Err(_error) => {
                            #[cfg(feature = "tracing")]
                            warn!(error = %_error, "special-command registry failed");
                        }
                    }
                }
                SuggestionRequest::Datatype { schema } => {
                    let datatypes = self.catalog.datatype_names(schema.as_deref());
                    completions.extend(find_matches(
                        word_before_cursor,
                        &datatypes,
                        MatchOptions::fuzzy(),
                        Label::Uniform("datatype"),
                    ));
                    if schema.is_none() {
                        completions.extend(find_matches(
                            word_before_cursor,
                            vocab::DATATYPES,
                            MatchOptions::prefix(),
                            Label::Uniform("datatype"),
                        ));
                    }
                }
                SuggestionRequest::NamedQuery => {
                    let Some(store) = &self.named_queries else {
                        continue;
                    };
                    match store.names() {
                        Ok(names) => {
                            completions.extend(find_matches(
                                word_before_cursor,
                                &names,
                                MatchOptions::fuzzy(),
                                Label::Uniform("named query"),
                            ));
                        }
                        Err(_error) => {
                            #[cfg(feature = "tracing")]
                            warn!(error = %_error, "named-query store failed");
                        }
                    }
                }
            }
        }

        completions
    }
}

impl Default for SqlCompleter {
    fn default() -> Self {
        Self::new(CompleterOptions::default())
    }
}

/// Hide `pg_`-prefixed names unless the user has typed toward them.
fn suppress_system_schemas(names: &mut Vec<String>, word_before_cursor: &str) {
    if !word_before_cursor.starts_with(SYSTEM_SCHEMA_PREFIX) {
        names.retain(|name| !name.starts_with(SYSTEM_SCHEMA_PREFIX));
    }
}
