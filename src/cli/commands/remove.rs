//! Delete an assignment

use tasktrack::config::GlobalConfig;
use tasktrack::output::{OperationResult, OutputMode};

/// Delete an assignment from the hosted store
pub async fn remove(input: &str, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let repo = super::open_repository(&config)?;

    let id = repo.resolve_id(input).await?;
    repo.delete(&id).await?;

    OperationResult {
        success: true,
        message: "Assignment deleted".to_string(),
        id: Some(id),
    }
    .render(mode);

    Ok(())
}
