//! Error types for settings loading.

use thiserror::Error;

/// Result type for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or checking settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file exists but could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML or has the wrong shape.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is present but unusable.
    #[error("invalid setting `{key}`: {reason}")]
    Invalid { key: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
