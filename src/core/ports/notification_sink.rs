//! Notification sink port
//!
//! A capability-check-then-emit contract: callers probe before emitting,
//! and only emit under [`Capability::Granted`]. The terminal adapter
//! lives in [`crate::notify`]; tests substitute a recording sink.

/// Probed state of the platform alert mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Alerts may be emitted
    Granted,
    /// The user has declined alerts
    Denied,
    /// The environment cannot deliver alerts at all
    Unsupported,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Platform alert mechanism
pub trait NotificationSink {
    /// Probe whether alerts can currently be delivered
    fn probe(&self) -> Capability;

    /// Emit an alert. Returns whether it was delivered.
    ///
    /// Implementations do not re-check permission here; that is the
    /// caller's responsibility via [`NotificationSink::probe`].
    fn emit(&self, title: &str, body: &str) -> bool;
}
