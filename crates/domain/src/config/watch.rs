use serde::{Deserialize, Serialize};

/// Periodic re-run configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatchConfig {
    /// Keep running and re-check every `interval_secs` (default: false)
    #[serde(default)]
    pub enabled: bool,

    /// Seconds between two runs (default: 3600)
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: default_interval(),
        }
    }
}

fn default_interval() -> u64 {
    3600
}
