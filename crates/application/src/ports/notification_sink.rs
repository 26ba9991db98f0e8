use async_trait::async_trait;
use subwatch_domain::DomainError;

/// A notification destination (console, chat bot, message queue...).
///
/// Sinks receive the already-serialized canonical body so that every
/// destination observes the same bytes.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Stable identifier used in logs and `SinkOutcome`s.
    fn name(&self) -> &str;

    async fn send(&self, message: &str) -> Result<(), DomainError>;

    /// Releases any connection held across sends. Called once at the end of
    /// every run; the sink must still be usable afterwards.
    async fn close(&self) {}
}
