use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Unordered set of subdomain names.
///
/// Iteration order is unspecified and may differ between runs; nothing
/// downstream of discovery may rely on it.
pub type SubdomainSet = HashSet<SubdomainName>;

/// A lowercase, fully-qualified subdomain name.
///
/// Uses `Arc<str>` so names can be shared between the diff, resolver and
/// dispatcher stages without copying.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SubdomainName(Arc<str>);

impl SubdomainName {
    /// Normalizes a raw name (trim + lowercase). Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(Arc::from(trimmed.to_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubdomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SubdomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Splits a raw provider record into individual names.
///
/// A single certificate entry may carry several SAN names separated by
/// newlines; every whitespace-separated token becomes its own entry.
pub fn split_names(raw: &str) -> impl Iterator<Item = SubdomainName> + '_ {
    raw.split_whitespace().filter_map(SubdomainName::new)
}
