//! Complete and reopen assignments

use tasktrack::config::GlobalConfig;
use tasktrack::output::{OperationResult, OutputMode};

/// Mark an assignment as completed
pub async fn done(id: &str, mode: OutputMode) -> anyhow::Result<()> {
    set_completed(id, true, mode).await
}

/// Reopen a completed assignment
pub async fn reopen(id: &str, mode: OutputMode) -> anyhow::Result<()> {
    set_completed(id, false, mode).await
}

async fn set_completed(input: &str, completed: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let repo = super::open_repository(&config)?;

    let id = repo.resolve_id(input).await?;
    let updated = repo.set_completed(&id, completed).await?;

    let message = if updated.completed {
        format!("Assignment completed! {}", updated.name)
    } else {
        format!("Assignment reopened: {}", updated.name)
    };

    OperationResult {
        success: true,
        message,
        id: Some(updated.id),
    }
    .render(mode);

    Ok(())
}
