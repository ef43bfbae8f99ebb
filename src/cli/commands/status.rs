//! Status command - summary of tracked assignments

use chrono::Utc;

use tasktrack::config::GlobalConfig;
use tasktrack::core::services::reminder;
use tasktrack::output::{OutputMode, StatusResult};

/// Show summary counts for the tracked assignments
pub async fn status(mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let repo = super::open_repository(&config)?;

    let rows = repo.list().await?;
    let completed = rows.iter().filter(|a| a.completed).count();
    let due_soon = reminder::due_within_day(&rows, &Utc::now()).len();

    StatusResult {
        total: rows.len(),
        pending: rows.len() - completed,
        completed,
        due_soon,
    }
    .render(mode);

    Ok(())
}
