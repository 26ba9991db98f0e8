use serde::{Deserialize, Serialize};

/// DNS resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Per-attempt query timeout in milliseconds (default: 5000)
    #[serde(default = "default_query_timeout")]
    pub query_timeout_ms: u64,

    /// Attempts per name before giving up (default: 2)
    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

impl ResolverConfig {
    /// Upper bound for one name, across all attempts.
    pub fn lookup_budget_ms(&self) -> u64 {
        self.query_timeout_ms
            .saturating_mul(self.attempts.max(1) as u64)
            .saturating_add(1000)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout(),
            attempts: default_attempts(),
        }
    }
}

fn default_query_timeout() -> u64 {
    5000
}

fn default_attempts() -> usize {
    2
}
