//! Add an assignment

use tasktrack::config::GlobalConfig;
use tasktrack::core::models::NewAssignment;
use tasktrack::core::services::due;
use tasktrack::output::{OperationResult, OutputMode};

/// Create an assignment in the hosted store
pub async fn add(name: &str, class: &str, due_input: &str, mode: OutputMode) -> anyhow::Result<()> {
    let due_at = due::parse_due(due_input)?;

    let config = GlobalConfig::load();
    let repo = super::open_repository(&config)?;
    let created = repo.create(NewAssignment::new(name, class, due_at)).await?;

    OperationResult {
        success: true,
        message: "Assignment created".to_string(),
        id: Some(created.id.clone()),
    }
    .render(mode);

    if mode == OutputMode::Human {
        println!("  Name:  {}", created.name);
        println!("  Class: {}", created.class_name);
        println!("  Due:   {}", created.due_at.to_rfc3339());
    }

    Ok(())
}
