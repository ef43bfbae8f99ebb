//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// An assignment prepared for display
#[derive(Debug, Serialize)]
pub struct AssignmentInfo {
    /// Full assignment id
    pub id: String,
    /// Short id shown in human output
    pub short_id: String,
    /// Assignment name
    pub name: String,
    /// Class the assignment belongs to
    pub class_name: String,
    /// Due timestamp (RFC 3339)
    pub due_at: String,
    /// Full local due date line
    pub due_display: String,
    /// Urgency category
    pub urgency: String,
    /// Display label (category label, or relative time for upcoming)
    pub label: String,
    /// Style tag for the label
    #[serde(skip)]
    pub style: &'static str,
    /// Whether the assignment is completed
    pub completed: bool,
}

/// Result of a list operation, split by completion
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// Total number of assignments
    pub total: usize,
    /// Assignments still to do, due date ascending
    pub pending: Vec<AssignmentInfo>,
    /// Completed assignments, due date ascending
    pub completed: Vec<AssignmentInfo>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Id of the affected assignment, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Result of a reminder scan
#[derive(Debug, Serialize)]
pub struct RemindResult {
    /// Probed sink capability
    pub capability: String,
    /// Number of assignments due within the next 24 hours
    pub due_soon: usize,
    /// Names of the assignments due soon, due date ascending
    pub names: Vec<String>,
    /// Whether the aggregated notification was emitted
    pub notified: bool,
}

/// Summary counts for the status command
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusResult {
    /// Total number of assignments
    pub total: usize,
    /// Assignments still to do
    pub pending: usize,
    /// Completed assignments
    pub completed: usize,
    /// Assignments due within the next 24 hours
    pub due_soon: usize,
}

/// Apply a style tag from [`crate::core::models::Urgency::style`]
fn styled(text: &str, style: &str) -> ColoredString {
    match style {
        "red" => text.red(),
        "yellow" => text.yellow(),
        "blue" => text.blue(),
        "green" => text.green(),
        _ => text.normal(),
    }
}

impl ListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.total == 0 {
            println!("No assignments yet.");
            println!("\nAdd one with: tasktrack add <name> --class <class> --due <when>");
            return;
        }

        if !self.pending.is_empty() {
            println!("To Do ({})", self.pending.len());
            for info in &self.pending {
                render_row(info);
            }
        }

        if !self.completed.is_empty() {
            if !self.pending.is_empty() {
                println!();
            }
            println!("Completed ({})", self.completed.len());
            for info in &self.completed {
                render_row(info);
            }
        }
    }
}

fn render_row(info: &AssignmentInfo) {
    let mark = if info.completed { "[x]" } else { "[ ]" };
    println!(
        "  {} {} {}  [{}]  {}",
        mark,
        info.short_id.dimmed(),
        info.name.bold(),
        info.class_name,
        styled(&info.label, info.style)
    );
    println!("      {}", info.due_display.dimmed());
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

impl RemindResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.due_soon == 0 {
            println!("No deadlines within the next 24 hours.");
            return;
        }
        if !self.notified {
            println!("Notifications are {}; showing the scan instead.", self.capability);
            println!("Due within 24 hours: {}", self.names.join(", "));
        }
    }
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(&self),
        }
    }

    fn render_human(self) {
        if self.total == 0 {
            println!("Assignments: none");
            return;
        }
        println!("Assignments: {} total", self.total);
        if self.pending > 0 {
            println!("  • {} pending", self.pending);
        }
        if self.completed > 0 {
            println!("  • {} completed", self.completed);
        }
        if self.due_soon > 0 {
            println!("  • {} due within 24 hours", self.due_soon);
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
