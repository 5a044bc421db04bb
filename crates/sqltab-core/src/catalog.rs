//! In-memory catalog of database metadata.
//!
//! The catalog holds one snapshot of the connected database's schemas,
//! tables, views, functions, and datatypes, plus the active search path,
//! the database name list, and the all-completions set used by non-smart
//! completion. It is written by introspection batches pushed in from the
//! connection layer and read by completion calls; the two must not be
//! interleaved, and the catalog performs no internal locking.
//!
//! Every key is stored in escaped form (see [`crate::normalize`]). Lookups
//! return `Option` or empty collections; absence is a normal outcome here,
//! never an error. Extension calls likewise skip entries they cannot place
//! (a relation announced under a schema the catalog has never seen) with
//! at most an advisory log line.

use std::collections::{BTreeMap, BTreeSet};

use crate::normalize::escape;
use crate::types::RelationKind;
use crate::vocab;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Placeholder column entry for relations whose columns have not been
/// introspected yet.
pub const WILDCARD: &str = "*";

type Relations = BTreeMap<String, BTreeMap<String, Vec<String>>>;
type NamedObjects = BTreeMap<String, BTreeSet<String>>;

/// One session's metadata snapshot.
///
/// Created empty, extended by introspection, wholesale-reset on reconnect
/// or database switch. Ordered maps keep candidate enumeration (and with
/// it completion tie-breaking) deterministic.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// schema -> table -> ordered column names.
    tables: Relations,
    /// schema -> view -> ordered column names.
    views: Relations,
    /// schema -> function names. Presence-only: no further metadata is
    /// stored per function yet.
    functions: NamedObjects,
    /// schema -> datatype names. Presence-only, as for functions.
    datatypes: NamedObjects,
    /// Shadowing order for unqualified lookups. Replaced wholesale.
    search_path: Vec<String>,
    /// Database names, kept separate from the schema catalog.
    databases: Vec<String>,
    /// Keyword list: the static baseline plus caller additions.
    keywords: Vec<String>,
    /// Union of static keywords and functions with every name ever added.
    /// Grows monotonically until [`Catalog::reset`].
    all_completions: BTreeSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            tables: Relations::new(),
            views: Relations::new(),
            functions: NamedObjects::new(),
            datatypes: NamedObjects::new(),
            search_path: Vec::new(),
            databases: Vec::new(),
            keywords: vocab::KEYWORDS.iter().map(|k| k.to_string()).collect(),
            all_completions: vocab::KEYWORDS
                .iter()
                .chain(vocab::FUNCTIONS)
                .map(|name| name.to_string())
                .collect(),
        }
    }

    /// Register schemas across all four mappings.
    ///
    /// Re-announcing a schema is a no-op for its contents; only missing
    /// entries are created.
    pub fn extend_schemas<S: AsRef<str>>(&mut self, schemas: &[S]) {
        for schema in schemas {
            let schema = escape(schema.as_ref());
            if schema.is_empty() {
                continue;
            }
            self.tables.entry(schema.clone()).or_default();
            self.views.entry(schema.clone()).or_default();
            self.functions.entry(schema.clone()).or_default();
            self.datatypes.entry(schema.clone()).or_default();
            self.all_completions.insert(schema);
        }
    }

    /// Register tables or views as `(schema, relation)` pairs.
    ///
    /// Each relation starts with a wildcard column list until
    /// [`Catalog::extend_columns`] fills it in. Relations under a schema
    /// the catalog does not know are skipped.
    pub fn extend_relations<S, R>(&mut self, entries: &[(S, R)], kind: RelationKind)
    where
        S: AsRef<str>,
        R: AsRef<str>,
    {
        for (schema, relation) in entries {
            let schema = escape(schema.as_ref());
            let relation = escape(relation.as_ref());
            if schema.is_empty() || relation.is_empty() {
                continue;
            }
            match self.relations_mut(kind).get_mut(&schema) {
                Some(relations) => {
                    relations.insert(relation.clone(), vec![WILDCARD.to_string()]);
                }
                None => {
                    #[cfg(feature = "tracing")]
                    warn!(
                        ?kind,
                        schema = %schema,
                        relation = %relation,
                        "relation listed under unrecognized schema"
                    );
                }
            }
            // The bare name still completes even when the schema was
            // unrecognized.
            self.all_completions.insert(relation);
        }
    }

    /// Append columns as `(schema, relation, column)` triples.
    ///
    /// Entries for unknown relations are dropped silently. Repeated
    /// announcements of the same column append again; the catalog does not
    /// deduplicate column lists.
    pub fn extend_columns<S, R, C>(&mut self, entries: &[(S, R, C)], kind: RelationKind)
    where
        S: AsRef<str>,
        R: AsRef<str>,
        C: AsRef<str>,
    {
        for (schema, relation, column) in entries {
            let schema = escape(schema.as_ref());
            let relation = escape(relation.as_ref());
            let column = escape(column.as_ref());
            if schema.is_empty() || relation.is_empty() || column.is_empty() {
                continue;
            }
            let existing = self
                .relations_mut(kind)
                .get_mut(&schema)
                .and_then(|relations| relations.get_mut(&relation));
            if let Some(columns) = existing {
                columns.push(column.clone());
                self.all_completions.insert(column);
            }
        }
    }

    /// Register user-defined functions as `(schema, function)` pairs.
    pub fn extend_functions<S, F>(&mut self, entries: &[(S, F)])
    where
        S: AsRef<str>,
        F: AsRef<str>,
    {
        Self::extend_named_objects(
            &mut self.functions,
            &mut self.all_completions,
            entries,
            "function",
        );
    }

    /// Register user-defined datatypes as `(schema, type)` pairs.
    pub fn extend_datatypes<S, T>(&mut self, entries: &[(S, T)])
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self::extend_named_objects(
            &mut self.datatypes,
            &mut self.all_completions,
            entries,
            "datatype",
        );
    }

    fn extend_named_objects<S, N>(
        map: &mut NamedObjects,
        all_completions: &mut BTreeSet<String>,
        entries: &[(S, N)],
        _what: &str,
    ) where
        S: AsRef<str>,
        N: AsRef<str>,
    {
        for (schema, name) in entries {
            let schema = escape(schema.as_ref());
            let name = escape(name.as_ref());
            if schema.is_empty() || name.is_empty() {
                continue;
            }
            match map.get_mut(&schema) {
                Some(names) => {
                    names.insert(name.clone());
                }
                None => {
                    #[cfg(feature = "tracing")]
                    warn!(
                        what = _what,
                        schema = %schema,
                        name = %name,
                        "object listed under unrecognized schema"
                    );
                }
            }
            all_completions.insert(name);
        }
    }

    /// Append database names.
    pub fn extend_database_names<S: AsRef<str>>(&mut self, names: &[S]) {
        for name in names {
            let name = escape(name.as_ref());
            if name.is_empty() {
                continue;
            }
            self.databases.push(name);
        }
    }

    /// Append keywords beyond the static baseline.
    pub fn extend_keywords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            self.keywords.push(word.to_string());
            self.all_completions.insert(word.to_string());
        }
    }

    /// Replace the search path wholesale.
    pub fn set_search_path<S: AsRef<str>>(&mut self, schemas: &[S]) {
        self.search_path = schemas
            .iter()
            .map(|schema| escape(schema.as_ref()))
            .filter(|schema| !schema.is_empty())
            .collect();
    }

    /// Drop everything introspected and return to the static baseline.
    pub fn reset(&mut self) {
        *self = Catalog::new();
    }

    pub fn search_path(&self) -> &[String] {
        &self.search_path
    }

    pub fn databases(&self) -> &[String] {
        &self.databases
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn all_completions(&self) -> &BTreeSet<String> {
        &self.all_completions
    }

    /// Schema names, in stored (escaped, sorted) order.
    pub fn schema_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    /// Column list of an exact relation, keyed by already-escaped names.
    pub fn columns(&self, kind: RelationKind, schema: &str, relation: &str) -> Option<&[String]> {
        self.relations(kind)
            .get(schema)?
            .get(relation)
            .map(Vec::as_slice)
    }

    /// Relation names visible in `schema`, or through the search path when
    /// `schema` is `None`.
    pub fn relation_names(&self, kind: RelationKind, schema: Option<&str>) -> Vec<String> {
        let map = self.relations(kind);
        match schema {
            Some(schema) => {
                let schema = escape(schema);
                map.get(&schema)
                    .map(|relations| relations.keys().cloned().collect())
                    .unwrap_or_default()
            }
            None => self
                .search_path
                .iter()
                .filter_map(|schema| map.get(schema))
                .flat_map(|relations| relations.keys().cloned())
                .collect(),
        }
    }

    /// Function names visible in `schema` or through the search path.
    pub fn function_names(&self, schema: Option<&str>) -> Vec<String> {
        Self::named_object_names(&self.functions, schema, &self.search_path)
    }

    /// Datatype names visible in `schema` or through the search path.
    pub fn datatype_names(&self, schema: Option<&str>) -> Vec<String> {
        Self::named_object_names(&self.datatypes, schema, &self.search_path)
    }

    fn named_object_names(
        map: &NamedObjects,
        schema: Option<&str>,
        search_path: &[String],
    ) -> Vec<String> {
        match schema {
            Some(schema) => {
                let schema = escape(schema);
                map.get(&schema)
                    .map(|names| names.iter().cloned().collect())
                    .unwrap_or_default()
            }
            None => search_path
                .iter()
                .filter_map(|schema| map.get(schema))
                .flat_map(|names| names.iter().cloned())
                .collect(),
        }
    }

    fn relations(&self, kind: RelationKind) -> &Relations {
        match kind {
            RelationKind::Tables => &self.tables,
            RelationKind::Views => &self.views,
        }
    }

    fn relations_mut(&mut self, kind: RelationKind) -> &mut Relations {
        match kind {
            RelationKind::Tables => &mut self.tables,
            RelationKind::Views => &mut self.views,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_relation_defaults_to_wildcard() {
        let mut catalog = Catalog::new();
        catalog.extend_schemas(&["public"]);
        catalog.extend_relations(&[("public", "users")], RelationKind::Tables);
        assert_eq!(
            catalog.columns(RelationKind::Tables, "public", "users"),
            Some(&[WILDCARD.to_string()][..])
        );
    }

    #[test]
    fn test_unrecognized_schema_is_skipped_but_name_still_completes() {
        let mut catalog = Catalog::new();
        catalog.extend_relations(&[("ghost", "orders")], RelationKind::Tables);
        assert_eq!(catalog.columns(RelationKind::Tables, "ghost", "orders"), None);
        assert!(catalog.all_completions().contains("orders"));
    }

    #[test]
    fn test_reannouncing_schema_keeps_contents() {
        let mut catalog = Catalog::new();
        catalog.extend_schemas(&["public"]);
        catalog.extend_relations(&[("public", "users")], RelationKind::Tables);
        catalog.extend_schemas(&["public"]);
        assert!(catalog
            .columns(RelationKind::Tables, "public", "users")
            .is_some());
    }

    #[test]
    fn test_names_are_stored_escaped() {
        let mut catalog = Catalog::new();
        catalog.extend_schemas(&["Public"]);
        catalog.extend_relations(&[("Public", "Order")], RelationKind::Tables);
        assert!(catalog
            .columns(RelationKind::Tables, "\"Public\"", "\"Order\"")
            .is_some());
        // Lookup helpers escape the qualifier themselves.
        assert_eq!(
            catalog.relation_names(RelationKind::Tables, Some("Public")),
            vec!["\"Order\""]
        );
    }

    #[test]
    fn test_empty_names_are_noop_inputs() {
        let mut catalog = Catalog::new();
        catalog.extend_schemas(&[""]);
        assert!(catalog.schema_names().is_empty());
        catalog.extend_schemas(&["public"]);
        catalog.extend_relations(&[("public", "")], RelationKind::Tables);
        assert!(catalog
            .relation_names(RelationKind::Tables, Some("public"))
            .is_empty());
    }
}
