//! Terminal notification sink
//!
//! Renders alerts as colored terminal output. The capability ladder
//! mirrors a permission-gated platform sink: unsupported when stdout is
//! not a terminal, denied when the user disabled notifications in
//! config, granted otherwise.

use std::io::IsTerminal;

use colored::Colorize;

use crate::core::ports::{Capability, NotificationSink};

/// Sink writing alerts to the terminal
#[derive(Debug, Clone, Copy)]
pub struct TerminalSink {
    enabled: bool,
}

impl TerminalSink {
    /// Create a sink honoring the user's notification preference.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl NotificationSink for TerminalSink {
    fn probe(&self) -> Capability {
        if !std::io::stdout().is_terminal() {
            return Capability::Unsupported;
        }
        if !self.enabled {
            return Capability::Denied;
        }
        Capability::Granted
    }

    fn emit(&self, title: &str, body: &str) -> bool {
        println!();
        println!("{} {}", "!".yellow().bold(), title.bold());
        println!("  {body}");
        true
    }
}
