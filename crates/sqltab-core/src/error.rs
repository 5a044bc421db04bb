//! Error types for external registry access.
//!
//! # Error Handling Strategy
//!
//! The engine itself is total: catalog lookups, matching, and scope
//! resolution model absence with `Option` or empty collections and never
//! fail. The one fallible boundary is the pair of external registries
//! (named queries, special commands), which live outside the process's
//! control. [`RegistryError`] gives their implementations a typed failure
//! channel; the orchestrator absorbs any error into an empty contribution
//! for that suggestion type, so a registry outage degrades a completion
//! list instead of failing the call.

use thiserror::Error;

/// Failure reported by a named-query store or special-command registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The backing store could not be reached at all.
    #[error("registry unavailable: {0}")]
    Unavailable(String),
    /// The store responded but a listing or lookup failed.
    #[error("registry lookup failed: {0}")]
    Lookup(String),
}
