//! Connector type descriptor.

use super::{ConnectorCategory, Dialect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Property key marking a dialect as SQL-speaking.
const IS_SQL: &str = "is_sql";

/// One default setting shown when configuring a connector.
///
/// Values are placeholder templates, not live configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorSetting {
    name: String,
    value: String,
}

impl ConnectorSetting {
    /// Creates a setting with its default value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the setting name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Value of a dialect capability property.
///
/// Serialized untagged, so JSON sees a bare boolean or string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A capability flag.
    Bool(bool),
    /// A textual property such as an identifier quote character.
    Text(String),
}

impl PropertyValue {
    /// Returns the flag value, or `None` for textual properties.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Returns the text value, or `None` for flags.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Bool(_) => None,
            Self::Text(value) => Some(value),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Declarative description of one connector type.
///
/// Optional fields are omitted from the serialized form when absent, and
/// `properties` is sparse: consumers treat a missing key as unknown/false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    dialect: Dialect,
    nice_name: String,
    #[serde(default)]
    description: String,
    category: ConnectorCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interface: Option<String>,
    #[serde(default)]
    settings: Vec<ConnectorSetting>,
    #[serde(default)]
    properties: BTreeMap<String, PropertyValue>,
}

impl ConnectorDescriptor {
    /// Creates a descriptor with no id, interface, settings or properties
    /// and an empty description.
    #[must_use]
    pub fn new(dialect: Dialect, nice_name: impl Into<String>, category: ConnectorCategory) -> Self {
        Self {
            id: None,
            dialect,
            nice_name: nice_name.into(),
            description: String::new(),
            category,
            interface: None,
            settings: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Sets an explicit identifier distinct from the dialect.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the backend interface (e.g. `hiveserver2`, `sqlalchemy`).
    #[must_use]
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    /// Replaces the default settings, keeping their order.
    #[must_use]
    pub fn with_settings(mut self, settings: impl IntoIterator<Item = ConnectorSetting>) -> Self {
        self.settings = settings.into_iter().collect();
        self
    }

    /// Sets a single property, replacing any previous value for `key`.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Returns the explicit identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the explicit id when set, otherwise the dialect.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.id.as_deref().unwrap_or_else(|| self.dialect.as_str())
    }

    /// Returns the dialect key.
    #[must_use]
    pub const fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Returns the display label.
    #[must_use]
    pub fn nice_name(&self) -> &str {
        &self.nice_name
    }

    /// Returns the description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> ConnectorCategory {
        self.category
    }

    /// Returns the backend interface, if the connector has one.
    #[must_use]
    pub fn interface(&self) -> Option<&str> {
        self.interface.as_deref()
    }

    /// Returns the default settings in declaration order.
    #[must_use]
    pub fn settings(&self) -> &[ConnectorSetting] {
        &self.settings
    }

    /// Returns the default value of the named setting.
    #[must_use]
    pub fn setting(&self, name: &str) -> Option<&str> {
        self.settings
            .iter()
            .find(|setting| setting.name() == name)
            .map(ConnectorSetting::value)
    }

    /// Returns all declared properties.
    #[must_use]
    pub const fn properties(&self) -> &BTreeMap<String, PropertyValue> {
        &self.properties
    }

    /// Returns a single property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Returns `true` only when `key` is declared as the flag `true`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.property(key)
            .and_then(PropertyValue::as_bool)
            .unwrap_or(false)
    }

    /// Returns whether the dialect speaks SQL.
    #[must_use]
    pub fn is_sql(&self) -> bool {
        self.flag(IS_SQL)
    }
}
