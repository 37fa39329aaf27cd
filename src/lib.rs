//! Connector registry: the catalog of connector types a data platform UI
//! offers (SQL editors, file browsers, metadata catalogs, schedulers).
//!
//! The crate holds a built-in catalog of connector descriptors and a fixed
//! table of categories, narrows the catalog with a configured blacklist and
//! optional whitelist of dialects, and serves the result read-only.
//!
//! # Architecture
//!
//! The registry follows hexagonal architecture principles:
//!
//! - **Domain**: Descriptor and filter types with no infrastructure dependencies
//! - **Ports**: The configuration source contract
//! - **Adapters**: The built-in catalog and environment, JSON and in-memory sources
//! - **Services**: The immutable registry handle and its hot-reload wrapper
//!
//! # Modules
//!
//! - [`connector`]: Connector catalog, filtering and lookup

pub mod connector;
