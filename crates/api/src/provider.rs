//! Boundaries the discovery engine consumes from its host.
//!
//! - [`SearchPathProvider`]: which locations may hold a namespace
//! - [`UnitLoader`]: turns an identifier into an inspectable [`Unit`]
//! - [`RunnerProvider`]: the designated runner bound to a unit
//!
//! Tag inspection goes through [`crate::Tagged`], implemented by both
//! [`Unit`] and [`crate::Member`].

use crate::error::ApiResult;
use crate::models::{ComponentId, Tag, Unit};

/// Enumerates the raw locations registered for a namespace.
///
/// Locations are either plain filesystem paths, `file:` URIs, or
/// `jar:<file-url>!/<inner-path>` URIs. Translating them into search roots
/// (and rejecting anything else) is the caller's job.
pub trait SearchPathProvider: Send + Sync {
    fn locations(&self, namespace: &str) -> ApiResult<Vec<String>>;

    /// Provider name (for logging/debugging)
    fn name(&self) -> &str;
}

/// Loads a unit by identifier.
pub trait UnitLoader: Send + Sync {
    fn load(&self, id: &ComponentId) -> ApiResult<Unit>;
}

/// Reports the one runner a unit is declared to be executed by.
pub trait RunnerProvider: Send + Sync {
    fn runner_of(&self, unit: &Unit) -> Option<Tag>;
}

/// Reads the runner straight off the loaded unit.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclaredRunner;

impl RunnerProvider for DeclaredRunner {
    fn runner_of(&self, unit: &Unit) -> Option<Tag> {
        unit.runner.clone()
    }
}
