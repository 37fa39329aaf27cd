//! Blacklist and whitelist rules applied to the connector catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusion rules for the served catalog.
///
/// The blacklist is applied first; a non-empty whitelist then narrows the
/// remainder. A dialect present in both sets stays excluded. Entries are
/// trimmed and blank entries are dropped.
///
/// Deserializes from `{"blacklist": [...], "whitelist": [...]}`. The keys
/// may also carry the `connectors_` prefix used by configuration files; when
/// both spellings are present their entries are merged. A missing or `null`
/// list is an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FilterLists")]
pub struct ConnectorFilter {
    blacklist: BTreeSet<String>,
    whitelist: BTreeSet<String>,
}

#[derive(Deserialize)]
struct FilterLists {
    #[serde(default)]
    blacklist: Option<Vec<String>>,
    #[serde(default)]
    connectors_blacklist: Option<Vec<String>>,
    #[serde(default)]
    whitelist: Option<Vec<String>>,
    #[serde(default)]
    connectors_whitelist: Option<Vec<String>>,
}

impl From<FilterLists> for ConnectorFilter {
    fn from(lists: FilterLists) -> Self {
        let blacklist = lists.blacklist.into_iter().chain(lists.connectors_blacklist);
        let whitelist = lists.whitelist.into_iter().chain(lists.connectors_whitelist);
        Self::new(blacklist.flatten(), whitelist.flatten())
    }
}

impl ConnectorFilter {
    /// Creates a filter from any collections of dialect strings.
    #[must_use]
    pub fn new<B, W>(blacklist: B, whitelist: W) -> Self
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
        W: IntoIterator,
        W::Item: AsRef<str>,
    {
        Self {
            blacklist: normalize(blacklist),
            whitelist: normalize(whitelist),
        }
    }

    /// Creates a filter that allows every dialect.
    #[must_use]
    pub const fn allow_all() -> Self {
        Self {
            blacklist: BTreeSet::new(),
            whitelist: BTreeSet::new(),
        }
    }

    /// Returns the excluded dialects.
    #[must_use]
    pub const fn blacklist(&self) -> &BTreeSet<String> {
        &self.blacklist
    }

    /// Returns the retained dialects; empty means no restriction.
    #[must_use]
    pub const fn whitelist(&self) -> &BTreeSet<String> {
        &self.whitelist
    }

    /// Returns whether a whitelist restricts the catalog.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        !self.whitelist.is_empty()
    }

    /// Classifies a dialect against both rules.
    #[must_use]
    pub fn verdict(&self, dialect: &str) -> FilterVerdict {
        if self.blacklist.contains(dialect) {
            FilterVerdict::Blacklisted
        } else if self.is_restricted() && !self.whitelist.contains(dialect) {
            FilterVerdict::NotWhitelisted
        } else {
            FilterVerdict::Allowed
        }
    }

    /// Returns whether a dialect survives both rules.
    #[must_use]
    pub fn allows(&self, dialect: &str) -> bool {
        self.verdict(dialect) == FilterVerdict::Allowed
    }
}

/// Outcome of checking one dialect against a [`ConnectorFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVerdict {
    /// The dialect is served.
    Allowed,
    /// The dialect is listed in the blacklist.
    Blacklisted,
    /// A whitelist is configured and does not list the dialect.
    NotWhitelisted,
}

fn normalize<I>(values: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values
        .into_iter()
        .filter_map(|value| {
            let trimmed = value.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        })
        .collect()
}
