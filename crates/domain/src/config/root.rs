use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::outputs::OutputsConfig;
use super::resolver::ResolverConfig;
use super::source::SourceConfig;
use super::storage::StorageConfig;
use super::watch::WatchConfig;

pub const ENV_TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ENV_RABBITMQ_URL: &str = "RABBITMQ_URL";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub outputs: OutputsConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line. Flags only ever enable things.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub stdout: bool,
    pub telegram: bool,
    pub rabbitmq: bool,
    pub summary_file: Option<String>,
    pub baseline_dir: Option<String>,
    pub watch: bool,
    pub interval_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Defaults, then the TOML file (if any), then the process environment,
    /// then CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Fills credentials the file left unset from `lookup` (normally the
    /// process environment).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let telegram = &mut self.outputs.telegram;
        if telegram.bot_token.is_none() {
            telegram.bot_token = lookup(ENV_TELEGRAM_BOT_TOKEN).filter(|v| !v.is_empty());
        }
        if telegram.chat_id.is_none() {
            telegram.chat_id = lookup(ENV_TELEGRAM_CHAT_ID).filter(|v| !v.is_empty());
        }
        if self.outputs.rabbitmq.url.is_none() {
            self.outputs.rabbitmq.url = lookup(ENV_RABBITMQ_URL).filter(|v| !v.is_empty());
        }
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        self.outputs.stdout |= overrides.stdout;
        self.outputs.telegram.enabled |= overrides.telegram;
        self.outputs.rabbitmq.enabled |= overrides.rabbitmq;
        self.watch.enabled |= overrides.watch;

        if let Some(file) = overrides.summary_file {
            self.outputs.summary_file = Some(file);
        }
        if let Some(dir) = overrides.baseline_dir {
            self.storage.baseline_dir = dir;
        }
        if let Some(secs) = overrides.interval_secs {
            self.watch.interval_secs = secs;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Rejects configurations that cannot run before any network activity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let telegram = &self.outputs.telegram;
        if telegram.enabled && (telegram.bot_token.is_none() || telegram.chat_id.is_none()) {
            return Err(ConfigError::MissingCredential(format!(
                "{ENV_TELEGRAM_BOT_TOKEN} and {ENV_TELEGRAM_CHAT_ID} are required for Telegram output"
            )));
        }

        if self.outputs.rabbitmq.enabled && self.outputs.rabbitmq.url.is_none() {
            return Err(ConfigError::MissingCredential(format!(
                "{ENV_RABBITMQ_URL} is required for RabbitMQ output"
            )));
        }

        if !self.outputs.any_enabled() {
            return Err(ConfigError::NoSinkEnabled);
        }

        if self.watch.enabled && self.watch.interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "watch.interval_secs must be greater than zero".to_string(),
            ));
        }

        if self.source.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "source.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
