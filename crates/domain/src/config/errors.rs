use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("{0}")]
    MissingCredential(String),

    #[error("At least one output method (stdout, telegram, rabbitmq or summary file) must be enabled")]
    NoSinkEnabled,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
