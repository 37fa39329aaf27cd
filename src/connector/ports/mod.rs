//! Port contracts for the connector registry.
//!
//! The registry never reads configuration itself; a
//! [`ConnectorFilterSource`] supplies the blacklist and whitelist.

pub mod filter_source;

pub use filter_source::{ConfigurationError, ConfigurationResult, ConnectorFilterSource};
