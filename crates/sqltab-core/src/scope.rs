//! Column scope resolution across referenced tables.
//!
//! Given the tables the classifier saw referenced at the cursor, collect
//! the columns visible through them. Qualified references look in exactly
//! one schema, trying tables strictly before views (the two mappings may
//! share a name). Unqualified references walk the search path in order and
//! stop at the first schema holding a matching table or view, so an entry
//! earlier in the path shadows a same-named relation later in it.

use std::collections::{HashMap, HashSet};

use crate::catalog::{Catalog, WILDCARD};
use crate::normalize::escape;
use crate::types::{RelationKind, ScopedTable};

/// Collect the columns visible through `scoped_tables`, in reference
/// order. Unresolvable entries contribute nothing.
pub fn resolve_columns(catalog: &Catalog, scoped_tables: &[ScopedTable]) -> Vec<String> {
    let mut columns = Vec::new();

    for scoped in scoped_tables {
        let relation = escape(&scoped.name);
        match scoped.schema.as_deref() {
            Some(schema) => {
                let schema = escape(schema);
                if let Some(cols) = catalog.columns(RelationKind::Tables, &schema, &relation) {
                    columns.extend_from_slice(cols);
                } else if let Some(cols) = catalog.columns(RelationKind::Views, &schema, &relation)
                {
                    columns.extend_from_slice(cols);
                }
            }
            None => {
                for schema in catalog.search_path() {
                    if let Some(cols) = catalog.columns(RelationKind::Tables, schema, &relation) {
                        columns.extend_from_slice(cols);
                        break;
                    }
                    if let Some(cols) = catalog.columns(RelationKind::Views, schema, &relation) {
                        columns.extend_from_slice(cols);
                        break;
                    }
                }
            }
        }
    }

    columns
}

/// USING-clause filter: keep only column names contributed by more than
/// one table, excluding the wildcard placeholder. First-occurrence order.
pub fn shared_columns(columns: &[String]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for column in columns {
        *counts.entry(column.as_str()).or_insert(0) += 1;
    }

    let mut seen = HashSet::new();
    columns
        .iter()
        .filter(|column| seen.insert(column.as_str()))
        .filter(|column| column.as_str() != WILDCARD && counts[column.as_str()] > 1)
        .cloned()
        .collect()
}
