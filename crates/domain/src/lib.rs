//! Subwatch Domain Layer
pub mod config;
pub mod diff;
pub mod errors;
pub mod notification;
pub mod report;
pub mod resolution;
pub mod subdomain;

pub use config::{CliOverrides, Config, ConfigError};
pub use diff::diff;
pub use errors::DomainError;
pub use notification::{Notification, SinkOutcome};
pub use report::{DomainCheck, DomainOutcome, WatchReport};
pub use resolution::ResolutionResult;
pub use subdomain::{SubdomainName, SubdomainSet};
