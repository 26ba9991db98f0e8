use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use subwatch_domain::{ResolutionResult, SubdomainName, SubdomainSet};
use tokio::time::timeout;
use tracing::{debug, instrument};

use crate::ports::SubdomainResolver;

/// Resolves a whole batch of names concurrently.
///
/// Every name gets its own lookup future; the batch returns only once all of
/// them have settled. A failed or timed-out lookup becomes
/// `ResolutionResult::Absent` for that name and never affects the others.
pub struct BatchResolver {
    resolver: Arc<dyn SubdomainResolver>,
    lookup_timeout: Duration,
}

impl BatchResolver {
    pub fn new(resolver: Arc<dyn SubdomainResolver>, lookup_timeout: Duration) -> Self {
        Self {
            resolver,
            lookup_timeout,
        }
    }

    #[instrument(skip_all, fields(batch = names.len()))]
    pub async fn resolve_batch(
        &self,
        names: &SubdomainSet,
    ) -> HashMap<SubdomainName, ResolutionResult> {
        let lookups = names.iter().map(|name| async move {
            let result = match timeout(self.lookup_timeout, self.resolver.resolve_ipv4(name)).await
            {
                Ok(Ok(addresses)) => ResolutionResult::from_addresses(addresses),
                Ok(Err(e)) => {
                    debug!(subdomain = %name, error = %e, "Resolution failed");
                    ResolutionResult::Absent
                }
                Err(_) => {
                    debug!(
                        subdomain = %name,
                        timeout_ms = self.lookup_timeout.as_millis() as u64,
                        "Resolution timed out"
                    );
                    ResolutionResult::Absent
                }
            };
            (name.clone(), result)
        });

        let results: HashMap<_, _> = join_all(lookups).await.into_iter().collect();

        debug!(
            resolved = results.values().filter(|r| r.is_resolved()).count(),
            total = results.len(),
            "Resolution batch settled"
        );

        results
    }
}
