//! Filter source backed by process environment variables.

use crate::connector::{
    domain::ConnectorFilter,
    ports::{ConfigurationError, ConfigurationResult, ConnectorFilterSource},
};
use std::ffi::OsString;
use std::fmt;
use std::sync::Arc;

/// Variable listing dialects to exclude.
pub const BLACKLIST_KEY: &str = "CONNECTORS_BLACKLIST";

/// Variable listing dialects to retain exclusively.
pub const WHITELIST_KEY: &str = "CONNECTORS_WHITELIST";

type Lookup = dyn Fn(&str) -> Option<OsString> + Send + Sync;

/// Reads [`BLACKLIST_KEY`] and [`WHITELIST_KEY`].
///
/// Each value is either a comma-separated list (`oozie, celery`) or, when it
/// starts with `[`, a JSON array of strings. Unset, blank or `null`
/// variables are empty sets.
#[derive(Clone)]
pub struct EnvFilterSource {
    lookup: Arc<Lookup>,
}

impl EnvFilterSource {
    /// Creates a source reading the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var_os(key))
    }

    /// Creates a source reading variables through `lookup`.
    #[must_use]
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<OsString> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    fn read_list(&self, key: &str) -> ConfigurationResult<Vec<String>> {
        let Some(raw) = (self.lookup)(key) else {
            return Ok(Vec::new());
        };
        let value = raw
            .into_string()
            .map_err(|_| ConfigurationError::NotUnicode { key: key.to_owned() })?;
        parse_list(key, &value)
    }
}

impl Default for EnvFilterSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvFilterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvFilterSource").finish_non_exhaustive()
    }
}

impl ConnectorFilterSource for EnvFilterSource {
    fn load_filter(&self) -> ConfigurationResult<ConnectorFilter> {
        let blacklist = self.read_list(BLACKLIST_KEY)?;
        let whitelist = self.read_list(WHITELIST_KEY)?;
        Ok(ConnectorFilter::new(blacklist, whitelist))
    }
}

fn parse_list(key: &str, value: &str) -> ConfigurationResult<Vec<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed)
            .map_err(|err| ConfigurationError::malformed(key, err));
    }
    Ok(trimmed.split(',').map(str::to_owned).collect())
}
