//! Shared registry handle with atomic hot reload.

use super::{error::ConnectorRegistryServiceResult, registry::ConnectorRegistry};
use crate::connector::{adapters::builtin_connectors, ports::ConnectorFilterSource};
use arc_swap::ArcSwap;
use mockable::Clock;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Holds the current [`ConnectorRegistry`] and swaps in rebuilt registries.
///
/// Readers take an [`Arc`] snapshot with [`current`](Self::current) and never
/// observe a partially built catalog. A failed reload leaves the previous
/// registry in place.
pub struct SharedConnectorRegistry<C>
where
    C: Clock,
{
    current: ArcSwap<ConnectorRegistry>,
    clock: Arc<C>,
    reload_guard: Mutex<()>,
}

impl<C> SharedConnectorRegistry<C>
where
    C: Clock,
{
    /// Loads the first registry (generation 1) from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`super::ConnectorRegistryServiceError::Configuration`] when
    /// the source yields malformed values.
    pub fn load(
        source: &impl ConnectorFilterSource,
        clock: Arc<C>,
    ) -> ConnectorRegistryServiceResult<Self> {
        let filter = source.load_filter()?;
        let registry = ConnectorRegistry::assemble(builtin_connectors(), filter, 1, &*clock);
        Ok(Self {
            current: ArcSwap::from_pointee(registry),
            clock,
            reload_guard: Mutex::new(()),
        })
    }

    /// Returns the registry currently being served.
    #[must_use]
    pub fn current(&self) -> Arc<ConnectorRegistry> {
        self.current.load_full()
    }

    /// Returns the generation of the registry currently being served.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.current.load().generation()
    }

    /// Rebuilds the registry from `source` and swaps it in.
    ///
    /// Concurrent reloads are serialized so generations stay monotonic.
    ///
    /// # Errors
    ///
    /// Returns [`super::ConnectorRegistryServiceError::Configuration`] when
    /// the source yields malformed values; the previous registry keeps
    /// serving.
    pub fn reload(
        &self,
        source: &impl ConnectorFilterSource,
    ) -> ConnectorRegistryServiceResult<Arc<ConnectorRegistry>> {
        let _guard = self
            .reload_guard
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let previous = self.current.load_full();

        let filter = match source.load_filter() {
            Ok(filter) => filter,
            Err(err) => {
                warn!(
                    generation = previous.generation(),
                    error = %err,
                    "connector registry reload failed; keeping previous catalog"
                );
                return Err(err.into());
            }
        };

        let generation = previous.generation().saturating_add(1);
        let next = Arc::new(ConnectorRegistry::assemble(
            builtin_connectors(),
            filter,
            generation,
            &*self.clock,
        ));
        self.current.store(Arc::clone(&next));
        info!(generation, served = next.len(), "connector registry reloaded");
        Ok(next)
    }
}

impl<C> std::fmt::Debug for SharedConnectorRegistry<C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedConnectorRegistry")
            .field("current", &self.current.load_full())
            .finish_non_exhaustive()
    }
}
