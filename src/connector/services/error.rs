//! Error types for connector registry services.

use crate::connector::{domain::Dialect, ports::ConfigurationError};
use thiserror::Error;

/// Result type for registry queries and construction.
pub type ConnectorRegistryResult<T> = Result<T, ConnectorRegistryError>;

/// Errors returned by registry queries and custom catalog construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectorRegistryError {
    /// No served connector has the requested dialect.
    #[error("connector not found: {0}")]
    NotFound(String),

    /// A custom catalog declares the same dialect twice.
    #[error("duplicate connector dialect: {0}")]
    DuplicateDialect(Dialect),
}

/// Errors returned when building a registry from a configuration source.
#[derive(Debug, Clone, Error)]
pub enum ConnectorRegistryServiceError {
    /// The configuration source returned malformed values.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// Registry construction failed.
    #[error(transparent)]
    Registry(#[from] ConnectorRegistryError),
}

/// Result type for configuration-driven registry operations.
pub type ConnectorRegistryServiceResult<T> = Result<T, ConnectorRegistryServiceError>;
