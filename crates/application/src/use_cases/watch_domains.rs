use std::sync::Arc;
use subwatch_domain::{DomainOutcome, WatchReport};
use tracing::{error, info, instrument, warn};

use crate::ports::SummaryReporter;
use crate::services::Dispatcher;
use crate::use_cases::CheckDomainUseCase;

/// Use case: run the domain check for every monitored domain.
///
/// Domains are processed one after another, each in isolation. A failed
/// domain is reported and the next one still runs. Every outcome is handed to
/// the summary reporters as soon as its domain is done.
pub struct WatchDomainsUseCase {
    check: Arc<CheckDomainUseCase>,
    dispatcher: Arc<Dispatcher>,
    reporters: Vec<Arc<dyn SummaryReporter>>,
}

impl WatchDomainsUseCase {
    pub fn new(
        check: Arc<CheckDomainUseCase>,
        dispatcher: Arc<Dispatcher>,
        reporters: Vec<Arc<dyn SummaryReporter>>,
    ) -> Self {
        Self {
            check,
            dispatcher,
            reporters,
        }
    }

    #[instrument(skip_all, fields(domains = domains.len()))]
    pub async fn execute(&self, domains: &[String]) -> WatchReport {
        let mut report = WatchReport::default();

        for domain in domains {
            let outcome = match self.check.execute(domain).await {
                Ok(check) => DomainOutcome::Completed {
                    domain: domain.clone(),
                    check,
                },
                Err(e) => {
                    error!(domain = %domain, error = %e, "Domain check failed");
                    DomainOutcome::Failed {
                        domain: domain.clone(),
                        reason: e.to_string(),
                    }
                }
            };

            self.publish(&outcome).await;
            report.push(outcome);
        }

        self.dispatcher.close().await;

        info!(
            total_new = report.total_new(),
            failed = report.failed().count(),
            "Run finished"
        );

        report
    }

    async fn publish(&self, outcome: &DomainOutcome) {
        for reporter in &self.reporters {
            if let Err(e) = reporter.report(outcome).await {
                warn!(reporter = reporter.name(), domain = outcome.domain(), error = %e, "Failed to write summary");
            }
        }
    }
}
