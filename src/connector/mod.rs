//! Connector type registry.
//!
//! Holds the built-in catalog of connector descriptors (Hive, `MySQL`, HDFS,
//! Oozie, ...) and the fixed category table, narrows the catalog once with a
//! configured blacklist and optional whitelist of dialects, and serves the
//! result read-only. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Query and reload services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
