//! Immutable, filtered view over the connector catalog.
//!
//! Provides [`ConnectorRegistry`], the handle built once from a blacklist and
//! whitelist and then shared read-only by request handlers.

use super::error::{
    ConnectorRegistryError, ConnectorRegistryResult, ConnectorRegistryServiceResult,
};
use crate::connector::{
    adapters::{builtin_categories, builtin_connectors},
    domain::{
        CategoryDescriptor, ConnectorCategory, ConnectorDescriptor, ConnectorFilter,
        FilterVerdict,
    },
    ports::ConnectorFilterSource,
};
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Returns the full category table.
///
/// Categories are never filtered; a category with no served connectors is
/// still listed.
#[must_use]
pub fn list_categories() -> &'static [CategoryDescriptor] {
    builtin_categories()
}

/// Filtered, read-only connector catalog.
///
/// Built once from a [`ConnectorFilter`]; nothing mutates it afterwards, so
/// any number of readers may share it without locking.
///
/// # Examples
///
/// ```
/// use connector_registry::connector::services::ConnectorRegistry;
///
/// let registry = ConnectorRegistry::initialize(["oozie", "celery"], Vec::<String>::new());
/// assert!(registry.find_by_dialect("oozie").is_err());
/// assert_eq!(
///     registry.find_by_dialect("hive").map(|c| c.nice_name()),
///     Ok("Hive")
/// );
/// ```
///
/// Two registries are equal when they serve the same connectors from the
/// same filter, whatever their generation or build time.
#[derive(Debug, Clone)]
pub struct ConnectorRegistry {
    connectors: Vec<ConnectorDescriptor>,
    filter: ConnectorFilter,
    generation: u64,
    loaded_at: DateTime<Utc>,
}

/// One category paired with its served connectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    /// The category record.
    pub category: &'a CategoryDescriptor,
    /// Served connectors of this category, in declaration order.
    pub connectors: Vec<&'a ConnectorDescriptor>,
}

/// Serializable view handed to a serving layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSnapshot<'a> {
    /// Served connectors in declaration order.
    pub connectors: &'a [ConnectorDescriptor],
    /// Full category table.
    pub categories: &'a [CategoryDescriptor],
}

impl ConnectorRegistry {
    /// Builds a registry over the built-in catalog from raw dialect lists.
    ///
    /// Descriptors whose dialect is blacklisted are removed; when `whitelist`
    /// is non-empty only its dialects are kept. Blacklisting wins when a
    /// dialect appears in both lists, and an empty result is valid.
    #[must_use]
    pub fn initialize<B, W>(blacklist: B, whitelist: W) -> Self
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
        W: IntoIterator,
        W::Item: AsRef<str>,
    {
        Self::from_filter(ConnectorFilter::new(blacklist, whitelist))
    }

    /// Builds a registry over the built-in catalog.
    #[must_use]
    pub fn from_filter(filter: ConnectorFilter) -> Self {
        Self::from_filter_at(filter, &DefaultClock)
    }

    /// Builds a registry over the built-in catalog, stamping
    /// [`loaded_at`](Self::loaded_at) from `clock`.
    #[must_use]
    pub fn from_filter_at(filter: ConnectorFilter, clock: &impl Clock) -> Self {
        Self::assemble(builtin_connectors(), filter, 0, clock)
    }

    /// Loads filter rules from `source` and builds a registry over the
    /// built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns [`super::ConnectorRegistryServiceError::Configuration`] when
    /// the source yields malformed values; no registry is built in that case.
    pub fn from_source(
        source: &impl ConnectorFilterSource,
    ) -> ConnectorRegistryServiceResult<Self> {
        let filter = source.load_filter()?;
        Ok(Self::from_filter(filter))
    }

    /// Builds a registry over a caller-supplied catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorRegistryError::DuplicateDialect`] when two
    /// descriptors share a dialect.
    pub fn with_catalog(
        catalog: impl IntoIterator<Item = ConnectorDescriptor>,
        filter: ConnectorFilter,
    ) -> ConnectorRegistryResult<Self> {
        let descriptors: Vec<ConnectorDescriptor> = catalog.into_iter().collect();
        ensure_unique_dialects(&descriptors)?;
        Ok(Self::assemble(&descriptors, filter, 0, &DefaultClock))
    }

    /// Applies `filter` to `catalog`, preserving declaration order.
    pub(super) fn assemble(
        catalog: &[ConnectorDescriptor],
        filter: ConnectorFilter,
        generation: u64,
        clock: &impl Clock,
    ) -> Self {
        let connectors: Vec<ConnectorDescriptor> = catalog
            .iter()
            .filter(|descriptor| {
                let dialect = descriptor.dialect().as_str();
                match filter.verdict(dialect) {
                    FilterVerdict::Allowed => true,
                    FilterVerdict::Blacklisted => {
                        debug!(dialect, "connector excluded by blacklist");
                        false
                    }
                    FilterVerdict::NotWhitelisted => {
                        debug!(dialect, "connector not in whitelist");
                        false
                    }
                }
            })
            .cloned()
            .collect();

        for unknown in filter
            .whitelist()
            .iter()
            .filter(|entry| !catalog.iter().any(|d| d.dialect() == entry.as_str()))
        {
            warn!(dialect = %unknown, "whitelisted dialect is not in the connector catalog");
        }

        info!(
            generation,
            total = catalog.len(),
            served = connectors.len(),
            excluded = catalog.len().saturating_sub(connectors.len()),
            "connector registry initialized"
        );

        Self {
            connectors,
            filter,
            generation,
            loaded_at: clock.utc(),
        }
    }

    /// Returns the served connectors in declaration order.
    #[must_use]
    pub fn list_connectors(&self) -> &[ConnectorDescriptor] {
        &self.connectors
    }

    /// Returns the full category table, independent of filtering.
    #[must_use]
    pub fn list_categories(&self) -> &'static [CategoryDescriptor] {
        list_categories()
    }

    /// Finds a served connector by exact dialect.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorRegistryError::NotFound`] when the dialect is not
    /// served, including dialects removed by the filter.
    pub fn find_by_dialect(&self, dialect: &str) -> ConnectorRegistryResult<&ConnectorDescriptor> {
        self.connectors
            .iter()
            .find(|descriptor| descriptor.dialect() == dialect)
            .ok_or_else(|| ConnectorRegistryError::NotFound(dialect.to_owned()))
    }

    /// Returns whether the dialect is served.
    #[must_use]
    pub fn contains(&self, dialect: &str) -> bool {
        self.find_by_dialect(dialect).is_ok()
    }

    /// Returns served connectors of one category in declaration order.
    pub fn connectors_in_category(
        &self,
        category: ConnectorCategory,
    ) -> impl Iterator<Item = &ConnectorDescriptor> {
        self.connectors
            .iter()
            .filter(move |descriptor| descriptor.category() == category)
    }

    /// Pairs every category, in table order, with its served connectors.
    #[must_use]
    pub fn grouped_by_category(&self) -> Vec<CategoryGroup<'_>> {
        list_categories()
            .iter()
            .map(|category| CategoryGroup {
                category,
                connectors: self.connectors_in_category(category.category()).collect(),
            })
            .collect()
    }

    /// Returns a serializable view of connectors and categories.
    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            connectors: &self.connectors,
            categories: list_categories(),
        }
    }

    /// Returns the number of served connectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    /// Returns whether no connector is served.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    /// Returns the filter this registry was built from.
    #[must_use]
    pub const fn filter(&self) -> &ConnectorFilter {
        &self.filter
    }

    /// Returns the reload generation; `0` for registries built outside a
    /// [`SharedConnectorRegistry`](super::SharedConnectorRegistry).
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns when this registry was built.
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl PartialEq for ConnectorRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.connectors == other.connectors && self.filter == other.filter
    }
}

impl Eq for ConnectorRegistry {}

fn ensure_unique_dialects(catalog: &[ConnectorDescriptor]) -> ConnectorRegistryResult<()> {
    let mut seen = HashSet::with_capacity(catalog.len());
    for descriptor in catalog {
        if !seen.insert(descriptor.dialect().as_str()) {
            return Err(ConnectorRegistryError::DuplicateDialect(
                descriptor.dialect().clone(),
            ));
        }
    }
    Ok(())
}
