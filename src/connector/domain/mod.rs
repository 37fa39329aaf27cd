//! Domain model for connector descriptors and catalog filtering.
//!
//! Connector descriptors are declarative metadata: a dialect key, display
//! strings, the category the UI groups them under, default settings and a
//! sparse set of capability properties. Filtering rules live in
//! [`ConnectorFilter`]. Nothing here touches configuration or logging.

mod category;
mod descriptor;
mod dialect;
mod error;
mod filter;

pub use category::{CategoryDescriptor, ConnectorCategory};
pub use descriptor::{ConnectorDescriptor, ConnectorSetting, PropertyValue};
pub use dialect::Dialect;
pub use error::{ConnectorDomainError, ParseConnectorCategoryError};
pub use filter::{ConnectorFilter, FilterVerdict};
