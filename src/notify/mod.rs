//! Notification sink adapters
//!
//! - [`TerminalSink`] - colored terminal alerts gated on TTY support
//!   and the user's notification preference

pub mod terminal;

pub use terminal::TerminalSink;
