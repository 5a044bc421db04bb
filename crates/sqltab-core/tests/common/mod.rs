use sqltab_core::{CompleterOptions, RelationKind, SqlCompleter};

/// A completer over a small two-schema catalog with `public` on the search
/// path, plus one function, one datatype, and two databases.
pub fn sample_completer() -> SqlCompleter {
    let mut completer = SqlCompleter::new(CompleterOptions::default());
    let catalog = completer.catalog_mut();

    catalog.extend_schemas(&["public", "reporting", "pg_catalog"]);
    catalog.extend_relations(
        &[
            ("public", "orders"),
            ("public", "users"),
            ("reporting", "orders"),
            ("pg_catalog", "pg_class"),
        ],
        RelationKind::Tables,
    );
    catalog.extend_relations(&[("public", "active_users")], RelationKind::Views);
    catalog.extend_columns(
        &[
            ("public", "orders", "id"),
            ("public", "orders", "customer_id"),
            ("public", "orders", "total"),
            ("public", "users", "id"),
            ("public", "users", "name"),
        ],
        RelationKind::Tables,
    );
    catalog.extend_columns(
        &[
            ("public", "active_users", "id"),
            ("public", "active_users", "name"),
        ],
        RelationKind::Views,
    );
    catalog.extend_functions(&[("public", "order_total")]);
    catalog.extend_datatypes(&[("public", "order_status")]);
    catalog.extend_database_names(&["sales", "analytics"]);
    catalog.set_search_path(&["public"]);

    completer
}

/// Just the display texts, in result order.
pub fn texts(completions: &[sqltab_core::Completion]) -> Vec<String> {
    completions.iter().map(|c| c.text.clone()).collect()
}
