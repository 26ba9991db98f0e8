use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to fetch subdomains for {domain}: {reason}")]
    FetchFailure { domain: String, reason: String },

    #[error("Failed to resolve {0}")]
    ResolutionFailure(String),

    #[error("Delivery to {sink} failed: {reason}")]
    SinkDelivery { sink: String, reason: String },

    #[error("Baseline storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl DomainError {
    pub fn fetch(domain: &str, reason: impl Into<String>) -> Self {
        Self::FetchFailure {
            domain: domain.to_string(),
            reason: reason.into(),
        }
    }

    pub fn sink(sink: &str, reason: impl Into<String>) -> Self {
        Self::SinkDelivery {
            sink: sink.to_string(),
            reason: reason.into(),
        }
    }
}
