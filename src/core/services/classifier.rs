//! Urgency classification
//!
//! Maps an assignment's due timestamp and completion flag to a single
//! urgency category. Pure function of (due_at, completed, now); callers
//! pass the local time in production and fixed instants in tests.
//!
//! Today/tomorrow use calendar-day equality in the caller's timezone,
//! not a rolling 24-hour window. The reminder scan in
//! [`super::reminder`] deliberately uses the opposite semantics; the two
//! must stay separate.

use chrono::{DateTime, TimeZone};

use crate::core::models::Urgency;

/// Classify an assignment by its due time and completion flag.
///
/// Precedence, first match wins:
/// 1. `Completed` when the flag is set, regardless of the due date.
/// 2. `Overdue` when `due_at <= now`; the bound is closed, so an
///    assignment due exactly now is already overdue.
/// 3. `DueToday` when the due time is still ahead on today's date.
/// 4. `DueTomorrow` when it falls on the next calendar day.
/// 5. `Upcoming` otherwise.
#[must_use]
pub fn classify<Tz: TimeZone>(due_at: &DateTime<Tz>, completed: bool, now: &DateTime<Tz>) -> Urgency {
    if completed {
        return Urgency::Completed;
    }
    if due_at <= now {
        return Urgency::Overdue;
    }
    let due_day = due_at.date_naive();
    let today = now.date_naive();
    if due_day == today {
        return Urgency::DueToday;
    }
    if today.succ_opt() == Some(due_day) {
        return Urgency::DueTomorrow;
    }
    Urgency::Upcoming
}

/// Relative time description for a due time still ahead of `now`,
/// e.g. "in 3 days" or "in 5 hours".
#[must_use]
pub fn relative_label<Tz: TimeZone>(due_at: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let delta = due_at.clone().signed_duration_since(now.clone());
    let minutes = delta.num_minutes();
    if minutes <= 0 {
        return "now".to_string();
    }
    if minutes < 60 {
        return format!("in {} minute{}", minutes, plural(minutes));
    }
    let hours = delta.num_hours();
    if hours < 24 {
        return format!("in {} hour{}", hours, plural(hours));
    }
    let days = delta.num_days();
    format!("in {} day{}", days, plural(days))
}

/// Display label for a classified assignment: the fixed category label,
/// or the relative description for `Upcoming`.
#[must_use]
pub fn display_label<Tz: TimeZone>(
    urgency: Urgency,
    due_at: &DateTime<Tz>,
    now: &DateTime<Tz>,
) -> String {
    match urgency {
        Urgency::Upcoming => relative_label(due_at, now),
        other => other.label().to_string(),
    }
}

const fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
