use rayon::prelude::*;
use std::collections::BTreeSet;
use tagscan_api::{ComponentId, Unit, UnitLoader};
use tracing::warn;

/// Resolves identifiers through a [`UnitLoader`], dropping the ones that fail.
pub struct Loader<'a> {
    provider: &'a dyn UnitLoader,
    parallel: bool,
}

impl<'a> Loader<'a> {
    pub fn new(provider: &'a dyn UnitLoader, parallel: bool) -> Self {
        Self { provider, parallel }
    }

    /// Load one unit. Failures are logged and reported as `None`.
    pub fn load(&self, id: &ComponentId) -> Option<Unit> {
        match self.provider.load(id) {
            Ok(unit) => Some(unit),
            Err(e) => {
                warn!("Could not load unit {}: {}", id, e);
                None
            }
        }
    }

    /// Load every identifier once. Output order is unspecified.
    pub fn load_all(&self, ids: &BTreeSet<ComponentId>) -> Vec<Unit> {
        if self.parallel {
            let ids: Vec<&ComponentId> = ids.iter().collect();
            ids.par_iter().filter_map(|id| self.load(id)).collect()
        } else {
            ids.iter().filter_map(|id| self.load(id)).collect()
        }
    }
}
