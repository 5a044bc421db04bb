//! Static completion vocabulary.
//!
//! Baseline keywords, built-in function names, and built-in datatype names
//! that are available before any catalog introspection has run. The catalog
//! layers introspected names on top of these at runtime and falls back to
//! exactly this baseline on [`crate::Catalog::reset`].

use std::collections::HashSet;
use std::sync::OnceLock;

/// SQL keywords suggested in keyword position.
///
/// Multi-word entries ("GROUP BY", "INSERT INTO") complete as a unit; their
/// individual words still count as reserved for identifier escaping.
pub const KEYWORDS: &[&str] = &[
    "ACCESS",
    "ADD",
    "ALL",
    "ALTER TABLE",
    "AND",
    "ANY",
    "AS",
    "ASC",
    "AUDIT",
    "BETWEEN",
    "BY",
    "CASCADE",
    "CASE",
    "CHAR",
    "CHECK",
    "CLUSTER",
    "COLUMN",
    "COMMENT",
    "COMPRESS",
    "CONNECT",
    "COPY",
    "CREATE",
    "CURRENT",
    "DATABASE",
    "DATE",
    "DECIMAL",
    "DEFAULT",
    "DELETE FROM",
    "DELIMITER",
    "DESC",
    "DESCRIBE",
    "DISTINCT",
    "DROP",
    "ELSE",
    "ENCODING",
    "ESCAPE",
    "EXCLUSIVE",
    "EXISTS",
    "EXPLAIN",
    "EXTENSION",
    "FILE",
    "FLOAT",
    "FOR",
    "FORCE_NOT_NULL",
    "FORCE_QUOTE",
    "FORMAT",
    "FREEZE",
    "FROM",
    "FULL",
    "FUNCTION",
    "GRANT",
    "GROUP BY",
    "HAVING",
    "HEADER",
    "IDENTIFIED",
    "IMMEDIATE",
    "IN",
    "INCREMENT",
    "INDEX",
    "INITIAL",
    "INSERT INTO",
    "INTEGER",
    "INTERSECT",
    "INTO",
    "IS",
    "JOIN",
    "LEFT",
    "LEVEL",
    "LIKE",
    "LIMIT",
    "LOCK",
    "LONG",
    "MAXEXTENTS",
    "MINUS",
    "MLSLABEL",
    "MODE",
    "MODIFY",
    "NOAUDIT",
    "NOCOMPRESS",
    "NOT",
    "NOWAIT",
    "NULL",
    "NUMBER",
    "OF",
    "OFFLINE",
    "OIDS",
    "ON",
    "ONLINE",
    "OPTION",
    "OR",
    "ORDER BY",
    "OUTER",
    "OWNER",
    "PCTFREE",
    "PRIMARY",
    "PRIOR",
    "PRIVILEGES",
    "PROFILE",
    "QUOTE",
    "RAW",
    "RENAME",
    "RESOURCE",
    "REVOKE",
    "RIGHT",
    "ROW",
    "ROWID",
    "ROWNUM",
    "ROWS",
    "SCHEMA",
    "SELECT",
    "SESSION",
    "SET",
    "SHARE",
    "SIZE",
    "SMALLINT",
    "START",
    "SUCCESSFUL",
    "SYNONYM",
    "SYSDATE",
    "TABLE",
    "TEMPLATE",
    "THEN",
    "TO",
    "TRIGGER",
    "TRUNCATE",
    "UID",
    "UNION",
    "UNIQUE",
    "UPDATE",
    "USE",
    "USER",
    "USING",
    "VALIDATE",
    "VALUES",
    "VARCHAR",
    "VARCHAR2",
    "VIEW",
    "WHEN",
    "WHENEVER",
    "WHERE",
    "WITH",
];

/// Built-in function names suggested alongside user-defined functions.
pub const FUNCTIONS: &[&str] = &[
    "AVG",
    "COUNT",
    "DISTINCT",
    "EXPORT_OBJECTS",
    "FIRST",
    "FORMAT",
    "LAST",
    "LCASE",
    "LEN",
    "MAX",
    "MIN",
    "MID",
    "NOW",
    "ROUND",
    "SUM",
    "TOP",
    "UCASE",
];

/// Built-in datatype names suggested alongside user-defined types.
pub const DATATYPES: &[&str] = &[
    "BIGINT",
    "BOOLEAN",
    "CHAR",
    "DATE",
    "DOUBLE PRECISION",
    "INT",
    "INTEGER",
    "NUMERIC",
    "REAL",
    "TEXT",
    "VARCHAR",
];

/// Every word that appears in [`KEYWORDS`], with multi-word entries split.
///
/// Identifier escaping treats membership here as "requires quoting".
pub(crate) fn reserved_words() -> &'static HashSet<&'static str> {
    static RESERVED: OnceLock<HashSet<&'static str>> = OnceLock::new();
    RESERVED.get_or_init(|| {
        KEYWORDS
            .iter()
            .flat_map(|keyword| keyword.split_whitespace())
            .collect()
    })
}

/// Whether `upper` (an already upper-cased name) is a built-in function.
pub(crate) fn is_builtin_function(upper: &str) -> bool {
    FUNCTIONS.contains(&upper)
}
