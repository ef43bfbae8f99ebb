//! tasktrack - A CLI assignment tracker with deadline reminders
//!
//! This library provides the core functionality for tracking assignments
//! stored in a remote hosted database: urgency classification for display,
//! a rolling 24-hour deadline reminder, and a caching repository over the
//! hosted store's REST transport.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod error;
pub mod notify;
pub mod output;
pub mod paths;
pub mod store;
