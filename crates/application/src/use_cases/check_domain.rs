use std::sync::Arc;
use subwatch_domain::{diff, DomainCheck, DomainError, Notification};
use tracing::{debug, error, info, instrument};

use crate::ports::{BaselineStore, NameSource};
use crate::services::{BatchResolver, Dispatcher};

/// Use case: one discovery run for one domain.
///
/// Fetch → diff against the baseline → resolve the new names → notify for
/// every resolved name → append the whole diff to the baseline.
///
/// Only a fetch or baseline load failure aborts the run. Resolution and delivery
/// failures are absorbed per name and per sink.
pub struct CheckDomainUseCase {
    source: Arc<dyn NameSource>,
    baseline: Arc<dyn BaselineStore>,
    resolver: Arc<BatchResolver>,
    dispatcher: Arc<Dispatcher>,
}

impl CheckDomainUseCase {
    pub fn new(
        source: Arc<dyn NameSource>,
        baseline: Arc<dyn BaselineStore>,
        resolver: Arc<BatchResolver>,
        dispatcher: Arc<Dispatcher>,
    ) -> Self {
        Self {
            source,
            baseline,
            resolver,
            dispatcher,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<DomainCheck, DomainError> {
        let discovered = self.source.discover(domain).await?;
        let known = self.baseline.load(domain).await?;

        let new_names = diff(&discovered, &known);
        debug!(
            discovered = discovered.len(),
            known = known.len(),
            new = new_names.len(),
            "Diff computed"
        );

        if new_names.is_empty() {
            info!("No new subdomains");
            return Ok(DomainCheck::default());
        }

        let resolutions = self.resolver.resolve_batch(&new_names).await;

        let mut check = DomainCheck::new(new_names.len());
        for (name, result) in &resolutions {
            let Some(addresses) = result.addresses() else {
                continue;
            };
            check.resolved += 1;

            let notification = Notification::new(name.clone(), addresses);
            let outcomes = self.dispatcher.deliver(&notification).await;
            check.record_delivery(&outcomes);
        }

        // Unresolved names are persisted too: a name is known once discovered.
        // Notifications already went out, so a failed write keeps the count
        // and is flagged on the check instead of failing the domain.
        if let Err(e) = self.baseline.append(domain, &new_names).await {
            error!(error = %e, new = new_names.len(), "Failed to persist baseline, names will be reported again");
            check.persist_error = Some(e.to_string());
        }

        info!(
            new = check.new_subdomains,
            resolved = check.resolved,
            sink_failures = check.sink_failures,
            persisted = check.persist_error.is_none(),
            "Domain check completed"
        );

        Ok(check)
    }
}
