use super::config::{LookupConfig, MassUnit, TableSource};
use super::table::MassTable;
use crate::error::Result;
use log::debug;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static GLOBAL_SERVICE: OnceLock<MassTableService> = OnceLock::new();

/// Owner of a lazily loaded [`MassTable`].
///
/// The table is parsed on the first [`ensure_loaded`](Self::ensure_loaded)
/// and shared afterwards. [`reset`](Self::reset) drops it so the next access
/// parses the source again.
#[derive(Debug, Default)]
pub struct MassTableService {
    source: TableSource,
    table: RwLock<Option<Arc<MassTable>>>,
}

impl MassTableService {
    pub fn new(source: TableSource) -> Self {
        Self {
            source,
            table: RwLock::new(None),
        }
    }

    /// Builds a service and the mass unit its lookups should report in.
    pub fn with_config(config: LookupConfig) -> (Self, MassUnit) {
        (Self::new(config.source), config.unit)
    }

    /// Process-wide service reading the embedded table.
    pub fn global() -> &'static MassTableService {
        GLOBAL_SERVICE.get_or_init(MassTableService::default)
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Returns the table, loading it first if necessary.
    pub fn ensure_loaded(&self) -> Result<Arc<MassTable>> {
        if let Some(table) = self
            .table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(table));
        }

        let loaded = Arc::new(MassTable::load(&self.source)?);
        let mut slot = self.table.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(slot.get_or_insert(loaded)))
    }

    /// Parses the source again and replaces the cached table.
    pub fn reload(&self) -> Result<Arc<MassTable>> {
        let loaded = Arc::new(MassTable::load(&self.source)?);
        debug!("reloaded standard atomic weight table");
        *self.table.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Drops the cached table.
    pub fn reset(&self) {
        debug!("dropping cached standard atomic weight table");
        *self.table.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
