//! Deadline reminder engine
//!
//! Scans the full assignment collection for deadlines inside a rolling
//! 24-hour window and aggregates the matches into a single reminder
//! event. The window is measured from the current instant; it is not the
//! calendar-day logic used for display classification.
//!
//! The scan is stateless and re-entrant. Repeated scans over an unchanged
//! collection re-emit the reminder; permission checks belong to the
//! caller, which probes the sink before invoking the scan.

use chrono::{DateTime, Duration, Utc};

use crate::core::models::Assignment;
use crate::core::ports::NotificationSink;

/// Rolling look-ahead window for reminders, in hours
const WINDOW_HOURS: i64 = 24;

/// Aggregated reminder event for assignments due soon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Number of assignments inside the window
    pub count: usize,
    /// Comma-joined assignment names, in due-date order
    pub names: String,
}

impl Reminder {
    /// Build the aggregate from the reminder-worthy set.
    ///
    /// Returns `None` when the set is empty, in which case nothing is
    /// emitted.
    #[must_use]
    pub fn build(matches: &[&Assignment]) -> Option<Self> {
        if matches.is_empty() {
            return None;
        }
        let names = matches.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ");
        Some(Self {
            count: matches.len(),
            names,
        })
    }

    /// Notification title
    #[must_use]
    pub const fn title() -> &'static str {
        "Upcoming deadlines"
    }

    /// Notification body, singular or plural by count
    #[must_use]
    pub fn body(&self) -> String {
        let suffix = if self.count == 1 { "" } else { "s" };
        format!("You have {} assignment{} due soon: {}", self.count, suffix, self.names)
    }
}

/// Select assignments that are not completed and due within the next
/// 24 hours: `now < due_at <= now + 24h`.
///
/// An assignment due exactly now is no longer reminder-worthy (it is
/// already overdue); one due exactly 24 hours out still is.
#[must_use]
pub fn due_within_day<'a>(assignments: &'a [Assignment], now: &DateTime<Utc>) -> Vec<&'a Assignment> {
    let horizon = *now + Duration::hours(WINDOW_HOURS);
    assignments
        .iter()
        .filter(|a| !a.completed && a.due_at > *now && a.due_at <= horizon)
        .collect()
}

/// Run the reminder scan and emit one aggregated notification when the
/// reminder-worthy set is non-empty.
///
/// The engine performs no permission checks; callers only invoke this
/// once the sink has been probed as granted.
pub fn scan_and_emit(
    assignments: &[Assignment],
    now: &DateTime<Utc>,
    sink: &dyn NotificationSink,
) -> Option<Reminder> {
    let matches = due_within_day(assignments, now);
    let reminder = Reminder::build(&matches)?;
    sink.emit(Reminder::title(), &reminder.body());
    Some(reminder)
}
