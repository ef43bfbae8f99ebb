//! Error taxonomy for repository operations
//!
//! Three failure classes reach the user: invalid input (caught before any
//! store call), mutations against a vanished id, and transport or auth
//! failures talking to the hosted store.

use thiserror::Error;

/// Errors surfaced by the repository and its store transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required field failed validation; nothing was sent to the store
    #[error("validation failed: {0}")]
    Validation(String),

    /// A mutation referenced an id the store does not know
    #[error("assignment not found: {0}")]
    NotFound(String),

    /// The store could not be reached or rejected the credentials
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl Error {
    /// Create a validation error
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a store unavailable error
    #[must_use]
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }
}
