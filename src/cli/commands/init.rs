//! Configure the hosted store connection

use tasktrack::config::GlobalConfig;
use tasktrack::output::{OperationResult, OutputMode};

/// Write the store connection and credentials to the global config
pub fn init(
    url: &str,
    api_key: &str,
    access_token: &str,
    user_id: &str,
    force: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let path = GlobalConfig::config_path();
    if path.exists() && !force {
        println!("Already configured ({}).", path.display());
        println!("Use --force to overwrite.");
        return Ok(());
    }

    // Start from the existing file so preferences survive a re-init.
    let mut config = GlobalConfig::load();
    config.store.url = url.trim_end_matches('/').to_string();
    config.store.api_key = api_key.to_string();
    config.auth.access_token = access_token.to_string();
    config.auth.user_id = user_id.to_string();
    config.save()?;

    OperationResult {
        success: true,
        message: format!("Configuration written to {}", path.display()),
        id: None,
    }
    .render(mode);

    Ok(())
}
