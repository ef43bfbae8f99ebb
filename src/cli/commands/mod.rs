//! Command implementations

mod add;
mod complete;
mod init;
mod list;
mod remind;
mod remove;
mod status;

pub use add::add;
pub use complete::{done, reopen};
pub use init::init;
pub use list::list;
pub use remind::remind;
pub use remove::remove;
pub use status::status;

use anyhow::bail;
use tasktrack::config::GlobalConfig;
use tasktrack::store::{Repository, RestStore};

/// Build the repository from the global config, failing early with a
/// configuration hint when the store connection is unset.
pub(crate) fn open_repository(config: &GlobalConfig) -> anyhow::Result<Repository<RestStore>> {
    if !config.is_store_configured() {
        bail!(
            "store is not configured. Run 'tasktrack init --url <url> --api-key <key> \
             --access-token <token> --user-id <id>' first"
        );
    }
    Ok(Repository::new(RestStore::new(
        &config.store.url,
        &config.store.api_key,
        &config.auth.access_token,
        &config.auth.user_id,
    )))
}
