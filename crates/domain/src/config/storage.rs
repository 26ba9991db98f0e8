use serde::{Deserialize, Serialize};

/// Baseline storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding one `<domain>_subdomains.txt` file per domain (default: ".")
    #[serde(default = "default_baseline_dir")]
    pub baseline_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            baseline_dir: default_baseline_dir(),
        }
    }
}

fn default_baseline_dir() -> String {
    ".".to_string()
}
