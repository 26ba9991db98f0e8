#![allow(dead_code)]
use async_trait::async_trait;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use subwatch_application::ports::{BaselineStore, NameSource, SubdomainResolver};
use subwatch_application::services::{BatchResolver, Dispatcher};
use subwatch_application::use_cases::{CheckDomainUseCase, WatchDomainsUseCase};
use subwatch_domain::{DomainError, SubdomainName, SubdomainSet};
use tokio::sync::RwLock;

/// Source that returns the same names every time and counts its calls.
pub struct CountingSource {
    names: SubdomainSet,
    calls: AtomicUsize,
}

impl CountingSource {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().filter_map(|n| SubdomainName::new(n)).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NameSource for CountingSource {
    async fn discover(&self, _domain: &str) -> Result<SubdomainSet, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.names.clone())
    }
}

#[derive(Default)]
pub struct MemoryBaseline {
    names: RwLock<SubdomainSet>,
}

impl MemoryBaseline {
    pub async fn len(&self) -> usize {
        self.names.read().await.len()
    }
}

#[async_trait]
impl BaselineStore for MemoryBaseline {
    async fn load(&self, _domain: &str) -> Result<SubdomainSet, DomainError> {
        Ok(self.names.read().await.clone())
    }

    async fn append(&self, _domain: &str, names: &SubdomainSet) -> Result<(), DomainError> {
        self.names.write().await.extend(names.iter().cloned());
        Ok(())
    }
}

/// Resolves nothing.
pub struct NullResolver;

#[async_trait]
impl SubdomainResolver for NullResolver {
    async fn resolve_ipv4(&self, _name: &SubdomainName) -> Result<Vec<Ipv4Addr>, DomainError> {
        Ok(vec![])
    }
}

pub fn watch_use_case(
    source: Arc<CountingSource>,
    baseline: Arc<MemoryBaseline>,
) -> Arc<WatchDomainsUseCase> {
    let resolver = Arc::new(BatchResolver::new(
        Arc::new(NullResolver),
        Duration::from_millis(100),
    ));
    let dispatcher = Arc::new(Dispatcher::new(vec![]));
    let check = Arc::new(CheckDomainUseCase::new(
        source,
        baseline,
        resolver,
        Arc::clone(&dispatcher),
    ));
    Arc::new(WatchDomainsUseCase::new(check, dispatcher, vec![]))
}
