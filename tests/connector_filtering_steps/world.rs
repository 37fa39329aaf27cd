//! Shared world state for connector filtering BDD scenarios.

use connector_registry::connector::services::ConnectorRegistry;
use rstest::fixture;

/// Scenario world for connector filtering behaviour tests.
#[derive(Default)]
pub struct ConnectorWorld {
    /// Dialects queued for the blacklist.
    pub blacklist: Vec<String>,
    /// Dialects queued for the whitelist.
    pub whitelist: Vec<String>,
    /// Registry built by the `when` step.
    pub registry: Option<ConnectorRegistry>,
}

impl ConnectorWorld {
    /// Returns the initialized registry or a scenario error.
    pub fn registry(&self) -> Result<&ConnectorRegistry, eyre::Report> {
        self.registry
            .as_ref()
            .ok_or_else(|| eyre::eyre!("registry has not been initialized"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ConnectorWorld {
    ConnectorWorld::default()
}

/// Splits a comma-separated step argument into dialects.
pub fn split_dialects(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|dialect| !dialect.is_empty())
        .map(str::to_owned)
        .collect()
}
