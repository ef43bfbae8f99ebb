//! List assignments grouped by completion

use chrono::{DateTime, Local, Utc};

use tasktrack::config::GlobalConfig;
use tasktrack::core::models::Assignment;
use tasktrack::core::ports::{Capability, NotificationSink};
use tasktrack::core::services::{classifier, reminder};
use tasktrack::notify::TerminalSink;
use tasktrack::output::{AssignmentInfo, ListResult, OutputMode};

/// List assignments split into To Do and Completed sections.
///
/// After rendering, the reminder scan re-runs over the freshly fetched
/// collection when the sink reports granted (human mode only; JSON
/// output stays machine-parseable).
pub async fn list(pending_only: bool, completed_only: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let repo = super::open_repository(&config)?;

    let rows = repo.list().await?;
    let now_local = Local::now();

    let mut pending = Vec::new();
    let mut completed = Vec::new();
    for assignment in &rows {
        let info = describe(assignment, &now_local);
        if assignment.completed {
            completed.push(info);
        } else {
            pending.push(info);
        }
    }

    if pending_only {
        completed.clear();
    }
    if completed_only {
        pending.clear();
    }

    ListResult {
        total: rows.len(),
        pending,
        completed,
    }
    .render(mode);

    if mode == OutputMode::Human {
        let sink = TerminalSink::new(config.notifications.enabled);
        if sink.probe() == Capability::Granted {
            reminder::scan_and_emit(&rows, &Utc::now(), &sink);
        }
    }

    Ok(())
}

fn describe(assignment: &Assignment, now: &DateTime<Local>) -> AssignmentInfo {
    let due_local = assignment.due_at.with_timezone(&Local);
    let urgency = classifier::classify(&due_local, assignment.completed, now);
    AssignmentInfo {
        id: assignment.id.clone(),
        short_id: assignment.short_id().to_string(),
        name: assignment.name.clone(),
        class_name: assignment.class_name.clone(),
        due_at: assignment.due_at.to_rfc3339(),
        due_display: due_local.format("%A, %B %-d, %Y %-I:%M %p").to_string(),
        urgency: urgency.to_string(),
        label: classifier::display_label(urgency, &due_local, now),
        style: urgency.style(),
        completed: assignment.completed,
    }
}
