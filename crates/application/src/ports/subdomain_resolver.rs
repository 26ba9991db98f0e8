use async_trait::async_trait;
use std::net::Ipv4Addr;
use subwatch_domain::{DomainError, SubdomainName};

#[async_trait]
pub trait SubdomainResolver: Send + Sync {
    /// A-record lookup. An empty vector means the name exists but has no
    /// IPv4 addresses.
    async fn resolve_ipv4(&self, name: &SubdomainName) -> Result<Vec<Ipv4Addr>, DomainError>;
}
