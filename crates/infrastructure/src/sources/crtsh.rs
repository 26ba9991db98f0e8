use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use subwatch_application::ports::NameSource;
use subwatch_domain::subdomain::split_names;
use subwatch_domain::{DomainError, SubdomainSet};
use tracing::debug;

const USER_AGENT: &str = concat!("subwatch/", env!("CARGO_PKG_VERSION"));

/// One certificate entry from crt.sh's JSON output. Only the SAN list is used.
#[derive(Debug, Deserialize)]
struct CrtShRecord {
    name_value: String,
}

/// Certificate-transparency name source backed by crt.sh.
///
/// Issues `GET {base_url}?q=%.{domain}&output=json`. The client-wide timeout
/// bounds the whole request, body included.
pub struct CrtShSource {
    client: reqwest::Client,
    base_url: String,
}

impl CrtShSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::InvalidData(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Parses a crt.sh JSON body into the set of names it mentions.
pub fn parse_records(domain: &str, body: &str) -> Result<SubdomainSet, DomainError> {
    let records: Vec<CrtShRecord> = serde_json::from_str(body)
        .map_err(|e| DomainError::fetch(domain, format!("malformed response: {}", e)))?;

    Ok(records
        .iter()
        .flat_map(|record| split_names(&record.name_value))
        .collect())
}

#[async_trait]
impl NameSource for CrtShSource {
    async fn discover(&self, domain: &str) -> Result<SubdomainSet, DomainError> {
        debug!(domain = %domain, url = %self.base_url, "Querying certificate transparency logs");

        let query = format!("%.{}", domain);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query.as_str()), ("output", "json")])
            .send()
            .await
            .map_err(|e| DomainError::fetch(domain, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::fetch(
                domain,
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::fetch(domain, format!("failed to read body: {}", e)))?;

        let names = parse_records(domain, &body)?;
        debug!(domain = %domain, names = names.len(), "Certificate transparency names parsed");
        Ok(names)
    }
}
