//! Catalog extension and reset lifecycle.

mod common;

use sqltab_core::{Catalog, RelationKind, WILDCARD};

#[test]
fn extension_batches_build_incrementally() {
    let mut catalog = Catalog::new();
    catalog.extend_schemas(&["public"]);
    catalog.extend_relations(&[("public", "orders")], RelationKind::Tables);
    catalog.extend_columns(
        &[("public", "orders", "id"), ("public", "orders", "total")],
        RelationKind::Tables,
    );

    assert_eq!(
        catalog.columns(RelationKind::Tables, "public", "orders"),
        Some(&[WILDCARD.to_string(), "id".into(), "total".into()][..])
    );
}

#[test]
fn duplicate_column_batches_duplicate_entries() {
    // Repeated introspection of the same column appends again; the catalog
    // keeps both entries rather than deduplicating behind the caller's back.
    let mut catalog = Catalog::new();
    catalog.extend_schemas(&["public"]);
    catalog.extend_relations(&[("public", "orders")], RelationKind::Tables);
    catalog.extend_columns(&[("public", "orders", "id")], RelationKind::Tables);
    catalog.extend_columns(&[("public", "orders", "id")], RelationKind::Tables);

    let columns = catalog
        .columns(RelationKind::Tables, "public", "orders")
        .unwrap();
    assert_eq!(columns, &[WILDCARD.to_string(), "id".into(), "id".into()][..]);
}

#[test]
fn columns_for_unknown_relation_are_dropped() {
    let mut catalog = Catalog::new();
    catalog.extend_schemas(&["public"]);
    catalog.extend_columns(&[("public", "ghost", "id")], RelationKind::Tables);

    assert_eq!(catalog.columns(RelationKind::Tables, "public", "ghost"), None);
    assert!(!catalog.all_completions().contains("id"));
}

#[test]
fn relations_can_shadow_across_kinds() {
    // The same name may exist as a table and as a view under one schema.
    let mut catalog = Catalog::new();
    catalog.extend_schemas(&["public"]);
    catalog.extend_relations(&[("public", "dual")], RelationKind::Tables);
    catalog.extend_relations(&[("public", "dual")], RelationKind::Views);

    assert!(catalog
        .columns(RelationKind::Tables, "public", "dual")
        .is_some());
    assert!(catalog
        .columns(RelationKind::Views, "public", "dual")
        .is_some());
}

#[test]
fn qualified_listing_escapes_the_qualifier() {
    let mut catalog = Catalog::new();
    catalog.extend_schemas(&["Sales"]);
    catalog.extend_relations(&[("Sales", "Leads")], RelationKind::Tables);

    assert_eq!(
        catalog.relation_names(RelationKind::Tables, Some("Sales")),
        vec!["\"Leads\""]
    );
    assert!(catalog
        .relation_names(RelationKind::Tables, Some("missing"))
        .is_empty());
}

#[test]
fn unqualified_listing_walks_the_search_path() {
    let mut catalog = Catalog::new();
    catalog.extend_schemas(&["a", "b"]);
    catalog.extend_relations(&[("a", "t1"), ("b", "t2")], RelationKind::Tables);

    catalog.set_search_path(&["b"]);
    assert_eq!(catalog.relation_names(RelationKind::Tables, None), vec!["t2"]);

    catalog.set_search_path(&["a", "b"]);
    assert_eq!(
        catalog.relation_names(RelationKind::Tables, None),
        vec!["t1", "t2"]
    );
}

#[test]
fn search_path_is_replaced_wholesale() {
    let mut catalog = Catalog::new();
    catalog.set_search_path(&["a", "b"]);
    catalog.set_search_path(&["c"]);
    assert_eq!(catalog.search_path(), ["c"]);
}

#[test]
fn all_completions_accumulate_every_added_name() {
    let mut catalog = Catalog::new();
    assert!(catalog.all_completions().contains("SELECT"));
    assert!(catalog.all_completions().contains("COUNT"));

    catalog.extend_schemas(&["public"]);
    catalog.extend_relations(&[("public", "orders")], RelationKind::Tables);
    catalog.extend_columns(&[("public", "orders", "total")], RelationKind::Tables);
    catalog.extend_functions(&[("public", "refresh_totals")]);
    catalog.extend_keywords(&["QUALIFY"]);

    for name in ["public", "orders", "total", "refresh_totals", "QUALIFY"] {
        assert!(catalog.all_completions().contains(name), "missing {name}");
    }
}

#[test]
fn reset_returns_to_the_static_baseline() {
    let mut completer = common::sample_completer();
    completer.reset();
    let catalog = completer.catalog();

    assert!(catalog.schema_names().is_empty());
    assert_eq!(catalog.columns(RelationKind::Tables, "public", "orders"), None);
    assert!(catalog.search_path().is_empty());
    assert!(catalog.databases().is_empty());
    assert!(!catalog.all_completions().contains("orders"));
    assert!(catalog.all_completions().contains("SELECT"));
}

#[test]
fn reset_is_callable_on_a_fresh_catalog() {
    let mut catalog = Catalog::new();
    catalog.reset();
    assert!(catalog.schema_names().is_empty());
}
