//! Validated connector dialect key.

use super::ConnectorDomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a connector's query or execution flavour
/// (e.g. `hive`, `mysql`, `hive-tez`).
///
/// Values are trimmed but otherwise kept verbatim; matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dialect(String);

impl Dialect {
    /// Creates a validated dialect.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorDomainError::EmptyDialect`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ConnectorDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ConnectorDomainError::EmptyDialect);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Wraps a literal known to be trimmed and non-empty.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    /// Returns the dialect as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Dialect {
    type Error = ConnectorDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Dialect> for String {
    fn from(value: Dialect) -> Self {
        value.0
    }
}

impl AsRef<str> for Dialect {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Dialect {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Dialect {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Dialect {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
