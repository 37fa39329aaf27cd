//! Error types for connector domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing connector domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectorDomainError {
    /// The dialect is empty after trimming.
    #[error("connector dialect must not be empty")]
    EmptyDialect,

    /// The category name does not match a known category.
    #[error(transparent)]
    UnknownCategory(#[from] ParseConnectorCategoryError),
}

/// Error returned while parsing a connector category name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown connector category: {0}")]
pub struct ParseConnectorCategoryError(pub String);
