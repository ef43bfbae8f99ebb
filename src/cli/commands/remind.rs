//! Deadline reminder command

use chrono::Utc;

use tasktrack::config::GlobalConfig;
use tasktrack::core::ports::{Capability, NotificationSink};
use tasktrack::core::services::reminder;
use tasktrack::notify::TerminalSink;
use tasktrack::output::{OutputMode, RemindResult};

/// Scan for deadlines within the next 24 hours and raise one aggregated
/// notification.
///
/// The sink is probed first; the emitting scan only runs under a granted
/// capability. Otherwise the selection still runs so the result can be
/// reported, but nothing is emitted.
pub async fn remind(mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let repo = super::open_repository(&config)?;

    let rows = repo.list().await?;
    let now = Utc::now();

    let sink = TerminalSink::new(config.notifications.enabled);
    let capability = sink.probe();

    let (due_soon, notified) = if capability == Capability::Granted {
        let emitted = reminder::scan_and_emit(&rows, &now, &sink);
        (reminder::due_within_day(&rows, &now), emitted.is_some())
    } else {
        (reminder::due_within_day(&rows, &now), false)
    };

    RemindResult {
        capability: capability.to_string(),
        due_soon: due_soon.len(),
        names: due_soon.iter().map(|a| a.name.clone()).collect(),
        notified,
    }
    .render(mode);

    Ok(())
}
