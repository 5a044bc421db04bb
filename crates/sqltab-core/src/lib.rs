pub mod catalog;
pub mod completer;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod registry;
pub mod scope;
pub mod types;
pub mod vocab;

// Re-export main types and functions
pub use catalog::{Catalog, WILDCARD};
pub use completer::SqlCompleter;
pub use error::RegistryError;
pub use matcher::{find_matches, last_word, Label, MatchOptions};
pub use normalize::{escape, escape_all, unescape};
pub use registry::{NamedQueryStore, SpecialRegistry};
pub use scope::{resolve_columns, shared_columns};

// Re-export types explicitly
pub use types::{
    Completion, CompleterOptions, RelationKind, ScopedTable, SpecialCommand, SuggestionRequest,
};
