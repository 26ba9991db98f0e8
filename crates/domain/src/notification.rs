use crate::errors::DomainError;
use crate::subdomain::SubdomainName;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Message describing one newly discovered, resolved subdomain.
///
/// Field order is part of the wire contract: every sink receives the exact
/// same body, `{"subdomain":"…","ip_addresses":["…"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub subdomain: SubdomainName,
    pub ip_addresses: Vec<String>,
}

impl Notification {
    pub fn new(subdomain: SubdomainName, addresses: &[Ipv4Addr]) -> Self {
        Self {
            subdomain,
            ip_addresses: addresses.iter().map(Ipv4Addr::to_string).collect(),
        }
    }

    /// Canonical JSON body shared by all sinks.
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self).map_err(|e| DomainError::InvalidData(e.to_string()))
    }
}

/// Result of handing one notification to one sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkOutcome {
    pub sink: Arc<str>,
    pub error: Option<String>,
}

impl SinkOutcome {
    pub fn delivered(sink: &str) -> Self {
        Self {
            sink: Arc::from(sink),
            error: None,
        }
    }

    pub fn failed(sink: &str, error: impl Into<String>) -> Self {
        Self {
            sink: Arc::from(sink),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
