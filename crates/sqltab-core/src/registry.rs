//! Read-only interfaces to externally persisted collaborators.
//!
//! Named queries and special commands are owned by the interactive
//! frontend; the engine only ever lists and looks them up. Persistence,
//! mutation, and parsing of their definitions happen elsewhere.

use crate::error::RegistryError;
use crate::types::SpecialCommand;

/// User-saved (name, SQL text) queries.
pub trait NamedQueryStore {
    /// All saved query names.
    fn names(&self) -> Result<Vec<String>, RegistryError>;

    /// The SQL text saved under `name`, if any.
    fn get(&self, name: &str) -> Result<Option<String>, RegistryError>;
}

/// The frontend's table of special (backslash) commands.
pub trait SpecialRegistry {
    /// Every registered command with its one-line description.
    fn commands(&self) -> Result<Vec<SpecialCommand>, RegistryError>;
}
