//! Query and reload services for the connector registry.

mod error;
mod registry;
mod shared;

pub use error::{
    ConnectorRegistryError, ConnectorRegistryResult, ConnectorRegistryServiceError,
    ConnectorRegistryServiceResult,
};
pub use registry::{CatalogSnapshot, CategoryGroup, ConnectorRegistry, list_categories};
pub use shared::SharedConnectorRegistry;
