//! Unified error types and result handling.
//!
//! Every failure in the pipeline is scoped to the user action that triggered
//! it: converters fail with [`Error::Conversion`], the HTTP layer with
//! [`Error::Network`], and both propagate to the interface layer through the
//! same [`Result`] so a malformed payload and a failed request produce the
//! same user-visible notification.

use thiserror::Error;

/// Unified error type for the whole crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or incomplete server payload — a required nested entity is
    /// missing or a field value is outside its domain.
    #[error("Malformed server payload: {message}")]
    Conversion {
        /// Human-readable description of the defect
        message: String,
    },

    /// Request failed: timeout, non-2xx status, or connectivity.
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error: unreadable or invalid `config.toml`, or a missing
    /// required setting.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Builds an [`Error::Conversion`] from anything that can become the
    /// defect description.
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
