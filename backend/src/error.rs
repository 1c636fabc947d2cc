//! Error types shared across the library.
//!
//! Rule evaluation itself never fails; these cover the edges where text from
//! the outside world (config files, query strings, feed payloads) is turned
//! into typed values.

use thiserror::Error;

/// Malformed values supplied by a caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Invalid cleaning date '{value}': expected YYYY-MM-DD or an ISO date-time")]
    InvalidDate { value: String },
}

/// Problems loading or validating [`crate::config::ServerConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown civil timezone '{0}'")]
    InvalidTimezone(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to load location seed file {path}: {reason}")]
    Seed { path: String, reason: String },
}
