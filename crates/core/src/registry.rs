//! In-memory unit registry.
//!
//! Units are registered up front (programmatically or from a JSON manifest)
//! and looked up by identifier during scans.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock};
use tagscan_api::{ApiError, ApiResult, ComponentId, RunnerProvider, Tag, Unit, UnitLoader};
use tracing::{debug, warn};

/// On-disk manifest format.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub units: Vec<Unit>,
}

/// Thread-safe registry of loadable units
#[derive(Debug)]
pub struct UnitRegistry {
    units: RwLock<HashMap<ComponentId, Unit>>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self {
            units: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_manifest(manifest: Manifest) -> Self {
        let registry = Self::new();
        registry.register_batch(manifest.units);
        registry
    }

    pub fn from_manifest_str(json: &str) -> Result<Self> {
        Ok(Self::from_manifest(serde_json::from_str(json)?))
    }

    pub fn from_manifest_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_manifest_str(&content)?;
        debug!(
            "Loaded {} units from manifest {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Register a unit, replacing any earlier unit with the same identifier.
    pub fn register(&self, unit: Unit) {
        let mut units = self.units.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = units.insert(unit.id.clone(), unit) {
            warn!("Unit {} registered twice; keeping the later entry", previous.id);
        }
    }

    pub fn register_batch(&self, units: impl IntoIterator<Item = Unit>) {
        for unit in units {
            self.register(unit);
        }
    }

    pub fn len(&self) -> usize {
        self.units
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the registry, sorted by identifier.
    pub fn to_manifest(&self) -> Manifest {
        let units = self.units.read().unwrap_or_else(PoisonError::into_inner);
        let mut all: Vec<Unit> = units.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Manifest { units: all }
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitLoader for UnitRegistry {
    fn load(&self, id: &ComponentId) -> ApiResult<Unit> {
        self.units
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("no unit registered as {id}")))
    }
}

impl RunnerProvider for UnitRegistry {
    fn runner_of(&self, unit: &Unit) -> Option<Tag> {
        let units = self.units.read().unwrap_or_else(PoisonError::into_inner);
        units
            .get(&unit.id)
            .and_then(|registered| registered.runner.clone())
            .or_else(|| unit.runner.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagscan_api::{Member, Tagged};

    const MANIFEST: &str = r#"{
        "units": [
            {
                "id": "net.example.LoginTest",
                "tags": ["RunWith"],
                "runner": "ThucydidesRunner",
                "members": [
                    { "name": "shouldLogIn", "tags": ["Test"] },
                    { "name": "setUp", "tags": ["Before"] }
                ]
            },
            { "id": "net.example.Helper" }
        ]
    }"#;

    #[test]
    fn test_manifest_round_trip_through_loader() {
        let registry = UnitRegistry::from_manifest_str(MANIFEST).unwrap();
        assert_eq!(registry.len(), 2);

        let unit = registry.load(&ComponentId::new("net.example.LoginTest")).unwrap();
        assert!(unit.has_tag(&Tag::new("RunWith")));
        assert_eq!(unit.members.len(), 2);
        assert_eq!(
            registry.runner_of(&unit),
            Some(Tag::new("ThucydidesRunner"))
        );

        let helper = registry.load(&ComponentId::new("net.example.Helper")).unwrap();
        assert!(helper.tags.is_empty());
        assert_eq!(registry.runner_of(&helper), None);
    }

    #[test]
    fn test_unknown_identifier_is_not_found() {
        let registry = UnitRegistry::new();
        let err = registry.load(&ComponentId::new("pkg.Missing")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_later_registration_wins() {
        let registry = UnitRegistry::new();
        registry.register(Unit::new("pkg.One"));
        registry.register(
            Unit::new("pkg.One").with_member(Member::new("run", [Tag::new("Test")])),
        );

        assert_eq!(registry.len(), 1);
        let unit = registry.load(&ComponentId::new("pkg.One")).unwrap();
        assert_eq!(unit.members.len(), 1);
    }

    #[test]
    fn test_to_manifest_is_sorted() {
        let registry = UnitRegistry::new();
        registry.register_batch([Unit::new("b.Two"), Unit::new("a.One")]);
        let ids: Vec<_> = registry
            .to_manifest()
            .units
            .into_iter()
            .map(|u| u.id.to_string())
            .collect();
        assert_eq!(ids, vec!["a.One", "b.Two"]);
    }

    #[test]
    fn test_debug_lists_registered_units() {
        let registry = UnitRegistry::new();
        registry.register(Unit::new("pkg.One"));
        assert!(format!("{registry:?}").contains("pkg.One"));
    }

    #[test]
    fn test_malformed_manifest_is_json_error() {
        let err = UnitRegistry::from_manifest_str("{ units: ").unwrap_err();
        assert!(matches!(err, crate::error::TagscanError::Json(_)));
    }
}
