//! Core error types for geonet configuration and I/O.
//!
//! All errors are explicit and typed - no panics allowed.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for operations outside the graph itself.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read file '{path}': {reason}")]
    FileReadFailed { path: PathBuf, reason: String },

    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl Error {
    /// Create a file read error.
    pub fn file_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_read_error_names_the_path() {
        let err = Error::file_read_failed("/tmp/network.toml", "permission denied");
        let message = err.to_string();
        assert!(message.contains("/tmp/network.toml"));
        assert!(message.contains("permission denied"));
    }

    #[test]
    fn invalid_config_keeps_reason() {
        let err = Error::invalid_config("side must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration: side must be positive"
        );
    }
}
