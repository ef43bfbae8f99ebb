//! Urgency categories
//!
//! Every assignment maps to exactly one category; the precedence lives in
//! [`crate::core::services::classifier`]. Each category carries a display
//! label and a style tag consumed by the terminal renderer.

use serde::Serialize;

/// How soon an assignment needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// The assignment has been completed (due date no longer matters)
    Completed,
    /// The due time has already passed
    Overdue,
    /// Due later on the current calendar day
    DueToday,
    /// Due on the calendar day after the current one
    DueTomorrow,
    /// Due further out; displayed with a relative time description
    Upcoming,
}

impl Urgency {
    /// Fixed display label for this category.
    ///
    /// `Upcoming` assignments are usually shown with a relative label
    /// instead; see [`crate::core::services::classifier::relative_label`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
            Self::DueToday => "Due today",
            Self::DueTomorrow => "Due tomorrow",
            Self::Upcoming => "Upcoming",
        }
    }

    /// Style tag consumed by the terminal renderer
    #[must_use]
    pub const fn style(self) -> &'static str {
        match self {
            Self::Completed => "green",
            Self::Overdue => "red",
            Self::DueToday => "yellow",
            Self::DueTomorrow => "blue",
            Self::Upcoming => "default",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Overdue => write!(f, "overdue"),
            Self::DueToday => write!(f, "due_today"),
            Self::DueTomorrow => write!(f, "due_tomorrow"),
            Self::Upcoming => write!(f, "upcoming"),
        }
    }
}
