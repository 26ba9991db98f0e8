use async_trait::async_trait;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::Ipv4Addr;
use std::time::Duration;
use subwatch_application::ports::SubdomainResolver;
use subwatch_domain::config::ResolverConfig;
use subwatch_domain::{DomainError, SubdomainName};
use tracing::debug;

/// A-record resolver using the system's nameservers (`/etc/resolv.conf`).
///
/// One resolver instance is shared by every lookup of a batch.
pub struct HickoryARecordResolver {
    resolver: TokioResolver,
}

impl HickoryARecordResolver {
    pub fn new(config: &ResolverConfig) -> Result<Self, DomainError> {
        let mut builder = TokioResolver::builder(TokioConnectionProvider::default())
            .map_err(|e| DomainError::InvalidData(format!("Failed to read system DNS configuration: {}", e)))?;

        let options = builder.options_mut();
        options.timeout = Duration::from_millis(config.query_timeout_ms);
        options.attempts = config.attempts.max(1);

        Ok(Self {
            resolver: builder.build(),
        })
    }

    /// Absolute form so the system search list is never appended.
    fn fqdn(name: &SubdomainName) -> String {
        let name = name.as_str();
        if name.ends_with('.') {
            name.to_string()
        } else {
            format!("{}.", name)
        }
    }
}

#[async_trait]
impl SubdomainResolver for HickoryARecordResolver {
    async fn resolve_ipv4(&self, name: &SubdomainName) -> Result<Vec<Ipv4Addr>, DomainError> {
        match self.resolver.ipv4_lookup(Self::fqdn(name)).await {
            Ok(lookup) => {
                let addresses: Vec<Ipv4Addr> = lookup.iter().map(|a| a.0).collect();
                debug!(subdomain = %name, addresses = addresses.len(), "A lookup answered");
                Ok(addresses)
            }
            Err(e) if e.is_no_records_found() => {
                debug!(subdomain = %name, "No A records");
                Ok(Vec::new())
            }
            Err(e) => Err(DomainError::ResolutionFailure(format!("{}: {}", name, e))),
        }
    }
}
