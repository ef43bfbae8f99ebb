//! Due-date input parsing
//!
//! Accepts the forms a user types at the command line and normalizes
//! them to a UTC instant:
//!
//! - RFC 3339 (`2024-01-10T18:00:00Z`, offsets allowed)
//! - `YYYY-MM-DD HH:MM`, interpreted in the local timezone
//! - `YYYY-MM-DD`, due at the end of that local day

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::Error;

/// Parse a due-date argument into a UTC instant.
///
/// Fails with [`Error::Validation`] for anything unparseable; invalid
/// input never reaches the store.
pub fn parse_due(input: &str) -> Result<DateTime<Utc>, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("due date must not be empty"));
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M") {
        return local_to_utc(naive);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        // Date-only input means "by the end of that day".
        let end_of_day = date.and_hms_opt(23, 59, 59).ok_or_else(invalid)?;
        return local_to_utc(end_of_day);
    }

    Err(invalid())
}

fn local_to_utc(naive: NaiveDateTime) -> Result<DateTime<Utc>, Error> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(invalid)
}

fn invalid() -> Error {
    Error::validation("due date must be RFC 3339, \"YYYY-MM-DD HH:MM\", or \"YYYY-MM-DD\"")
}
