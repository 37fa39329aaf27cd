//! In-memory filter source for tests and embedding applications.

use crate::connector::{
    domain::ConnectorFilter,
    ports::{ConfigurationError, ConfigurationResult, ConnectorFilterSource},
};
use std::sync::{Arc, RwLock};

/// Filter source returning a replaceable, prebuilt filter.
#[derive(Debug, Clone, Default)]
pub struct StaticFilterSource {
    filter: Arc<RwLock<ConnectorFilter>>,
}

impl StaticFilterSource {
    /// Creates a source returning `filter`.
    #[must_use]
    pub fn new(filter: ConnectorFilter) -> Self {
        Self {
            filter: Arc::new(RwLock::new(filter)),
        }
    }

    /// Replaces the filter returned by subsequent loads.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Unavailable`] when the lock is poisoned.
    pub fn set(&self, filter: ConnectorFilter) -> ConfigurationResult<()> {
        let mut guard = self
            .filter
            .write()
            .map_err(|err| ConfigurationError::Unavailable(err.to_string()))?;
        *guard = filter;
        Ok(())
    }
}

impl ConnectorFilterSource for StaticFilterSource {
    fn load_filter(&self) -> ConfigurationResult<ConnectorFilter> {
        let guard = self
            .filter
            .read()
            .map_err(|err| ConfigurationError::Unavailable(err.to_string()))?;
        Ok(guard.clone())
    }
}
