//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
///
/// Builders and status resolution never fail; these errors only arise from
/// configuration loading and strict name parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Invalid {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },
}

impl CoreError {
    pub fn invalid_value(kind: &'static str, value: impl Into<String>) -> Self {
        CoreError::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}
