use serde::{Deserialize, Serialize};

/// Certificate-transparency source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Query endpoint (default: "https://crt.sh/")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds (default: 60)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://crt.sh/".to_string()
}

fn default_timeout() -> u64 {
    60
}
