//! Assignment model
//!
//! An assignment is a piece of coursework with a class, a due timestamp,
//! and a completion flag. Rows are owned by the hosted store; the wire
//! field names (`user_id`, `due_date`) follow its column names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A tracked assignment, as stored in the hosted store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier minted by the store, immutable
    pub id: String,

    /// Id of the user who may read and mutate this row, immutable
    #[serde(rename = "user_id")]
    pub owner: String,

    /// Display name, non-empty
    pub name: String,

    /// Class this assignment belongs to, non-empty
    pub class_name: String,

    /// When the assignment is due
    #[serde(rename = "due_date")]
    pub due_at: DateTime<Utc>,

    /// Whether the assignment has been completed
    #[serde(default)]
    pub completed: bool,

    /// When the row was created (maintained by the store)
    pub created_at: DateTime<Utc>,

    /// When the row was last updated (maintained by the store)
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    /// Short form of the id for display (ids are long opaque UUIDs)
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

/// Payload for creating an assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAssignment {
    /// Display name
    pub name: String,

    /// Class this assignment belongs to
    pub class_name: String,

    /// When the assignment is due
    #[serde(rename = "due_date")]
    pub due_at: DateTime<Utc>,
}

impl NewAssignment {
    /// Create a payload, trimming surrounding whitespace from the strings
    #[must_use]
    pub fn new(name: &str, class_name: &str, due_at: DateTime<Utc>) -> Self {
        Self {
            name: name.trim().to_string(),
            class_name: class_name.trim().to_string(),
            due_at,
        }
    }

    /// Check the invariants the store expects.
    ///
    /// Fails with [`Error::Validation`] when the name or class is empty
    /// after trimming. Callers run this before any store call.
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("name must not be empty"));
        }
        if self.class_name.trim().is_empty() {
            return Err(Error::validation("class name must not be empty"));
        }
        Ok(())
    }
}
