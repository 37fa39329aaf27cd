//! Configuration port supplying connector filter rules.

use crate::connector::domain::ConnectorFilter;
use std::sync::Arc;
use thiserror::Error;

/// Result type for configuration loading.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

/// Supplies the blacklist and whitelist the registry is built from.
pub trait ConnectorFilterSource: Send + Sync {
    /// Loads the current filter rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the underlying configuration is
    /// not a collection of dialect strings.
    fn load_filter(&self) -> ConfigurationResult<ConnectorFilter>;
}

impl<S> ConnectorFilterSource for Arc<S>
where
    S: ConnectorFilterSource + ?Sized,
{
    fn load_filter(&self) -> ConfigurationResult<ConnectorFilter> {
        (**self).load_filter()
    }
}

/// Errors returned by configuration sources.
///
/// Fatal at startup: a registry is never built from a half-read filter.
#[derive(Debug, Clone, Error)]
pub enum ConfigurationError {
    /// The value under `key` is not valid Unicode.
    #[error("configuration value {key} is not valid unicode")]
    NotUnicode {
        /// Configuration key that failed.
        key: String,
    },

    /// The value under `key` is not a list of dialect strings.
    #[error("configuration value {key} is not a list of dialects: {reason}")]
    Malformed {
        /// Configuration key that failed.
        key: String,
        /// Underlying decoding failure.
        reason: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The source could not be read.
    #[error("configuration source unavailable: {0}")]
    Unavailable(String),

    /// A filter document could not be decoded.
    #[error("invalid connector filter document: {0}")]
    InvalidDocument(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConfigurationError {
    /// Wraps a decoding failure for a single configuration key.
    pub fn malformed(
        key: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Malformed {
            key: key.into(),
            reason: Arc::new(err),
        }
    }

    /// Wraps a decoding failure for a whole filter document.
    pub fn invalid_document(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidDocument(Arc::new(err))
    }
}
