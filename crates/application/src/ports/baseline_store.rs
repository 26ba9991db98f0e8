use async_trait::async_trait;
use subwatch_domain::{DomainError, SubdomainSet};

/// Repository interface for the per-domain set of names already seen.
///
/// The store is append-only: existing entries are never removed or
/// rewritten. One writer per domain at a time is assumed; implementations
/// do no locking.
#[async_trait]
pub trait BaselineStore: Send + Sync {
    /// Loads the baseline for `domain`.
    ///
    /// # Returns
    ///
    /// * `Ok(set)` - Names previously recorded; empty if the domain has never been seen
    /// * `Err(DomainError)` - If the store exists but cannot be read
    async fn load(&self, domain: &str) -> Result<SubdomainSet, DomainError>;

    /// Appends `names` to the baseline for `domain`, creating it if needed.
    async fn append(&self, domain: &str, names: &SubdomainSet) -> Result<(), DomainError>;
}
