//! Adapters for the connector registry: the built-in catalog and the
//! configuration sources implementing
//! [`ConnectorFilterSource`](crate::connector::ports::ConnectorFilterSource).

pub mod builtin;
pub mod env;
pub mod json;
pub mod memory;

pub use builtin::{builtin_categories, builtin_connectors};
pub use env::{BLACKLIST_KEY, EnvFilterSource, WHITELIST_KEY};
pub use json::JsonFilterSource;
pub use memory::StaticFilterSource;
