use futures::future::join_all;
use std::sync::Arc;
use subwatch_domain::{Notification, SinkOutcome};
use tracing::{debug, warn};

use crate::ports::NotificationSink;

/// Fans one notification out to every configured sink.
///
/// Sinks are attempted concurrently and independently: a failing sink is
/// reported in its `SinkOutcome` and never blocks the others. Callers invoke
/// `deliver` once per notification; the order in which notifications arrive
/// is whatever order the caller iterates its (unordered) set in.
pub struct Dispatcher {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl Dispatcher {
    pub fn new(sinks: Vec<Arc<dyn NotificationSink>>) -> Self {
        Self { sinks }
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub async fn deliver(&self, notification: &Notification) -> Vec<SinkOutcome> {
        let message = match notification.to_json() {
            Ok(message) => message,
            Err(e) => {
                warn!(subdomain = %notification.subdomain, error = %e, "Failed to serialize notification");
                return self
                    .sinks
                    .iter()
                    .map(|sink| SinkOutcome::failed(sink.name(), e.to_string()))
                    .collect();
            }
        };

        let message = message.as_str();
        let deliveries = self.sinks.iter().map(|sink| async move {
            match sink.send(message).await {
                Ok(()) => {
                    debug!(sink = sink.name(), subdomain = %notification.subdomain, "Notification delivered");
                    SinkOutcome::delivered(sink.name())
                }
                Err(e) => {
                    warn!(
                        sink = sink.name(),
                        subdomain = %notification.subdomain,
                        error = %e,
                        "Notification delivery failed"
                    );
                    SinkOutcome::failed(sink.name(), e.to_string())
                }
            }
        });

        join_all(deliveries).await
    }

    /// Releases per-run resources held by the sinks.
    pub async fn close(&self) {
        for sink in &self.sinks {
            sink.close().await;
        }
    }
}
