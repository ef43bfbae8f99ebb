//! Assignment store port
//!
//! Defines the interface to the remote persistence backend. The hosted
//! store owns durable state and scopes every row to its owner; the
//! transport implementation lives in [`crate::store::rest`], and tests
//! substitute an in-memory store.

use async_trait::async_trait;

use crate::core::models::{Assignment, NewAssignment};
use crate::error::Error;

/// Remote storage backend for assignments
///
/// All operations are asynchronous request/response calls. Implementations
/// must reject cross-owner access (the hosted store enforces this through
/// row-level security keyed to the bearer token).
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// Fetch every assignment visible to the authenticated user,
    /// sorted by due date ascending.
    async fn fetch_all(&self) -> Result<Vec<Assignment>, Error>;

    /// Insert a new assignment and return the stored row.
    async fn insert(&self, new: &NewAssignment) -> Result<Assignment, Error>;

    /// Update the completed flag on one row and return the updated row.
    ///
    /// Fails with [`Error::NotFound`] when the id matches nothing.
    async fn set_completed(&self, id: &str, completed: bool) -> Result<Assignment, Error>;

    /// Delete one row by id.
    ///
    /// Fails with [`Error::NotFound`] when the id matches nothing.
    async fn delete(&self, id: &str) -> Result<(), Error>;
}
