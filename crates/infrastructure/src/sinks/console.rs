use async_trait::async_trait;
use subwatch_application::ports::{NotificationSink, SummaryReporter};
use subwatch_domain::{DomainError, DomainOutcome};
use tokio::io::{AsyncWriteExt, Stdout};

async fn write_line(out: &mut Stdout, line: &str) -> std::io::Result<()> {
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');
    out.write_all(buf.as_bytes()).await?;
    out.flush().await
}

/// Prints each notification as one JSON line on stdout.
#[derive(Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSink for ConsoleSink {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn send(&self, message: &str) -> Result<(), DomainError> {
        write_line(&mut tokio::io::stdout(), message)
            .await
            .map_err(|e| DomainError::sink(self.name(), e.to_string()))
    }
}

/// Prints the per-domain run summary on stdout. Always enabled.
#[derive(Default)]
pub struct ConsoleSummaryReporter;

impl ConsoleSummaryReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SummaryReporter for ConsoleSummaryReporter {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn report(&self, outcome: &DomainOutcome) -> Result<(), DomainError> {
        write_line(&mut tokio::io::stdout(), &outcome.summary_line())
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))
    }
}
