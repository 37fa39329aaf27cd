//! Filter source backed by a JSON document.

use crate::connector::{
    domain::ConnectorFilter,
    ports::{ConfigurationError, ConfigurationResult, ConnectorFilterSource},
};

/// Decodes a document such as
/// `{"connectors_blacklist": ["oozie"], "connectors_whitelist": null}`.
///
/// Both keys are optional; `null` means an empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFilterSource {
    document: String,
}

impl JsonFilterSource {
    /// Creates a source over the given document text.
    #[must_use]
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl ConnectorFilterSource for JsonFilterSource {
    fn load_filter(&self) -> ConfigurationResult<ConnectorFilter> {
        serde_json::from_str(&self.document).map_err(ConfigurationError::invalid_document)
    }
}
