use std::sync::Arc;
use std::time::Duration;
use subwatch_application::use_cases::WatchDomainsUseCase;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Re-runs the whole watch pass on a fixed interval until cancelled.
///
/// The first pass starts immediately. A pass that overruns the interval
/// delays the next one instead of triggering a burst of catch-up runs, and
/// cancellation is only observed between passes so a pass in flight always
/// finishes and persists its baselines.
pub struct WatchJob {
    use_case: Arc<WatchDomainsUseCase>,
    domains: Arc<[String]>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl WatchJob {
    pub fn new(use_case: Arc<WatchDomainsUseCase>, domains: Vec<String>) -> Self {
        Self {
            use_case,
            domains: domains.into(),
            interval: Duration::from_secs(3600),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            domains = self.domains.len(),
            interval_secs = self.interval.as_secs(),
            "Starting watch job"
        );

        tokio::spawn(async move {
            // tokio panics on a zero period
            let period = self.interval.max(Duration::from_millis(1));
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut pass: u64 = 0;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!(passes = pass, "WatchJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        pass += 1;
                        let report = self.use_case.execute(&self.domains).await;

                        if report.has_failures() {
                            warn!(
                                pass,
                                failed = report.failed().count(),
                                total_new = report.total_new(),
                                "WatchJob: pass finished with failures"
                            );
                        } else {
                            info!(pass, total_new = report.total_new(), "WatchJob: pass finished");
                        }
                    }
                }
            }
        })
    }
}
