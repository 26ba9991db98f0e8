use async_trait::async_trait;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Mutex;
use subwatch_application::ports::{NameSource, NotificationSink, SubdomainResolver};
use subwatch_domain::{DomainError, SubdomainName, SubdomainSet};

use super::fixtures::names;

/// Per-domain canned discovery results. Unknown domains fail to fetch.
#[derive(Default)]
pub struct ScriptedSource {
    answers: Mutex<HashMap<String, SubdomainSet>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, domain: &str, raw: &[&str]) -> Self {
        self.set(domain, raw);
        self
    }

    pub fn set(&self, domain: &str, raw: &[&str]) {
        if let Ok(mut answers) = self.answers.lock() {
            answers.insert(domain.to_string(), names(raw));
        }
    }
}

#[async_trait]
impl NameSource for ScriptedSource {
    async fn discover(&self, domain: &str) -> Result<SubdomainSet, DomainError> {
        self.answers
            .lock()
            .unwrap()
            .get(domain)
            .cloned()
            .ok_or_else(|| DomainError::fetch(domain, "HTTP 503: Service Unavailable"))
    }
}

/// Canned A records. Names without an entry have no address.
#[derive(Default)]
pub struct ScriptedResolver {
    records: HashMap<String, Vec<Ipv4Addr>>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, addresses: &[[u8; 4]]) -> Self {
        self.records.insert(
            name.to_string(),
            addresses.iter().map(|o| Ipv4Addr::from(*o)).collect(),
        );
        self
    }
}

#[async_trait]
impl SubdomainResolver for ScriptedResolver {
    async fn resolve_ipv4(&self, name: &SubdomainName) -> Result<Vec<Ipv4Addr>, DomainError> {
        Ok(self.records.get(name.as_str()).cloned().unwrap_or_default())
    }
}

/// Keeps every message it receives.
#[derive(Default)]
pub struct CollectingSink {
    messages: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for CollectingSink {
    fn name(&self) -> &str {
        "collecting"
    }

    async fn send(&self, message: &str) -> Result<(), DomainError> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}
