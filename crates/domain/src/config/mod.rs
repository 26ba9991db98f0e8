//! Configuration module for Subwatch
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, loading and CLI overrides
//! - `source`: Certificate-transparency source settings
//! - `resolver`: DNS resolution settings
//! - `storage`: Baseline storage location
//! - `outputs`: Notification sinks and summary file
//! - `watch`: Periodic re-run settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod outputs;
pub mod resolver;
pub mod root;
pub mod source;
pub mod storage;
pub mod watch;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use outputs::{OutputsConfig, RabbitMqConfig, TelegramConfig};
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use source::SourceConfig;
pub use storage::StorageConfig;
pub use watch::WatchConfig;
