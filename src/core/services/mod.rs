//! Business logic services
//!
//! Pure functions over the domain models, no I/O.
//!
//! - [`classifier`] - Urgency classification for display
//! - [`reminder`] - Rolling 24-hour deadline reminder scan
//! - [`due`] - Due-date input parsing

pub mod classifier;
pub mod due;
pub mod reminder;
