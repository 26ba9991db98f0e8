use async_trait::async_trait;
use subwatch_domain::{DomainError, SubdomainSet};

/// Producer of the subdomain names currently known to an external provider.
#[async_trait]
pub trait NameSource: Send + Sync {
    /// Returns the deduplicated, lowercased names for `domain`.
    ///
    /// An unreachable provider or an unparsable response is a
    /// `DomainError::FetchFailure`. Implementations do not retry.
    async fn discover(&self, domain: &str) -> Result<SubdomainSet, DomainError>;
}
