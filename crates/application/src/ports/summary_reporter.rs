use async_trait::async_trait;
use subwatch_domain::{DomainError, DomainOutcome};

/// Receives one outcome per processed domain, as soon as the domain is done.
#[async_trait]
pub trait SummaryReporter: Send + Sync {
    fn name(&self) -> &str;

    async fn report(&self, outcome: &DomainOutcome) -> Result<(), DomainError>;
}
