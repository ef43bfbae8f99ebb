//! Caching repository over an assignment store
//!
//! Wraps any [`AssignmentStore`] with input validation and a
//! generation-counted list cache: every successful mutation bumps the
//! generation, so the next `list()` refetches instead of serving stale
//! rows. The cache lock is never held across an await point.

use std::sync::{Mutex, PoisonError};

use log::debug;

use crate::core::models::{Assignment, NewAssignment};
use crate::core::ports::AssignmentStore;
use crate::error::Error;

#[derive(Debug, Default)]
struct ListCache {
    /// Bumped on every successful mutation
    generation: u64,
    /// Rows tagged with the generation they were fetched under
    rows: Option<(u64, Vec<Assignment>)>,
}

/// Repository exposing the store as validated, cached operations
#[derive(Debug)]
pub struct Repository<S> {
    store: S,
    cache: Mutex<ListCache>,
}

impl<S: AssignmentStore> Repository<S> {
    /// Wrap a store backend.
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: Mutex::new(ListCache::default()),
        }
    }

    /// Access the underlying store backend.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// All assignments, sorted by due date ascending.
    ///
    /// Serves the cached rows while no mutation has happened since they
    /// were fetched; refetches otherwise.
    pub async fn list(&self) -> Result<Vec<Assignment>, Error> {
        let generation = {
            let cache = self.lock_cache();
            if let Some((fetched_at, rows)) = &cache.rows
                && *fetched_at == cache.generation
            {
                debug!("serving {} assignments from cache", rows.len());
                return Ok(rows.clone());
            }
            cache.generation
        };

        let mut rows = self.store.fetch_all().await?;
        // The store orders by due date; reassert after deserialization.
        rows.sort_by_key(|a| a.due_at);

        let mut cache = self.lock_cache();
        if cache.generation == generation {
            cache.rows = Some((generation, rows.clone()));
        }
        Ok(rows)
    }

    /// Create an assignment.
    ///
    /// Validation runs first; an invalid payload fails with
    /// [`Error::Validation`] before any store call.
    pub async fn create(&self, new: NewAssignment) -> Result<Assignment, Error> {
        new.validate()?;
        let created = self.store.insert(&new).await?;
        self.invalidate();
        Ok(created)
    }

    /// Set the completed flag on one assignment.
    ///
    /// Setting the flag to its current value is a no-op from the
    /// caller's perspective; the store applies the update either way.
    pub async fn set_completed(&self, id: &str, completed: bool) -> Result<Assignment, Error> {
        let updated = self.store.set_completed(id, completed).await?;
        self.invalidate();
        Ok(updated)
    }

    /// Delete one assignment.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.store.delete(id).await?;
        self.invalidate();
        Ok(())
    }

    /// Resolve user input to a full assignment id.
    ///
    /// Accepts the full id or a unique prefix of it. An ambiguous prefix
    /// is a validation error; no match is [`Error::NotFound`].
    pub async fn resolve_id(&self, input: &str) -> Result<String, Error> {
        let rows = self.list().await?;
        if rows.iter().any(|a| a.id == input) {
            return Ok(input.to_string());
        }
        let matches: Vec<&Assignment> = rows.iter().filter(|a| a.id.starts_with(input)).collect();
        match matches.as_slice() {
            [] => Err(Error::not_found(input)),
            [only] => Ok(only.id.clone()),
            _ => Err(Error::validation(format!(
                "id prefix '{input}' is ambiguous ({} matches)",
                matches.len()
            ))),
        }
    }

    fn invalidate(&self) {
        let mut cache = self.lock_cache();
        cache.generation += 1;
        cache.rows = None;
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, ListCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
