use async_trait::async_trait;
use std::path::PathBuf;
use subwatch_application::ports::SummaryReporter;
use subwatch_domain::{DomainError, DomainOutcome};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Appends one summary line per processed domain to a results file.
pub struct FileSummaryReporter {
    path: PathBuf,
}

impl FileSummaryReporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SummaryReporter for FileSummaryReporter {
    fn name(&self) -> &str {
        "summary-file"
    }

    async fn report(&self, outcome: &DomainOutcome) -> Result<(), DomainError> {
        let line = format!("{}\n", outcome.summary_line());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))?;
        file.flush()
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))
    }
}
