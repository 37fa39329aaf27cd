//! Connector categories and their descriptors.

use super::ParseConnectorCategoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Functional role a connector plays in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorCategory {
    /// Query editors (SQL and non-SQL execution engines).
    Editor,
    /// File and job browsers.
    Browsers,
    /// Metadata catalogs.
    Catalogs,
    /// Query optimizers.
    Optimizers,
    /// Workflow schedulers.
    Schedulers,
    /// Third-party plugins.
    Plugins,
}

impl ConnectorCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 6] = [
        Self::Editor,
        Self::Browsers,
        Self::Catalogs,
        Self::Optimizers,
        Self::Schedulers,
        Self::Plugins,
    ];

    /// Returns the canonical serialized representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Browsers => "browsers",
            Self::Catalogs => "catalogs",
            Self::Optimizers => "optimizers",
            Self::Schedulers => "schedulers",
            Self::Plugins => "plugins",
        }
    }

    /// Returns the label shown for the category.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Editor => "Editor",
            Self::Browsers => "Browsers",
            Self::Catalogs => "Catalogs",
            Self::Optimizers => "Optimizers",
            Self::Schedulers => "Schedulers",
            Self::Plugins => "Plugins",
        }
    }
}

impl fmt::Display for ConnectorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ConnectorCategory {
    type Error = ParseConnectorCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "editor" => Ok(Self::Editor),
            "browsers" => Ok(Self::Browsers),
            "catalogs" => Ok(Self::Catalogs),
            "optimizers" => Ok(Self::Optimizers),
            "schedulers" => Ok(Self::Schedulers),
            "plugins" => Ok(Self::Plugins),
            _ => Err(ParseConnectorCategoryError(value.to_owned())),
        }
    }
}

/// Display record for one category.
///
/// Serializes as `{"name": ..., "type": ..., "description": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    name: String,
    #[serde(rename = "type")]
    category: ConnectorCategory,
    description: String,
}

impl CategoryDescriptor {
    /// Creates a descriptor labelled with the category's display name and an
    /// empty description.
    #[must_use]
    pub fn new(category: ConnectorCategory) -> Self {
        Self {
            name: category.display_name().to_owned(),
            category,
            description: String::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category this record describes.
    #[must_use]
    pub const fn category(&self) -> ConnectorCategory {
        self.category
    }

    /// Returns the description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
