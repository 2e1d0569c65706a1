//! Test-suite discovery on top of [`UnitFinder`].
//!
//! A test finder is bound to a root namespace and a [`TestSelection`]:
//!
//! ```text
//! new TestFinder("net.example", Normal).classes()
//!     -> units tagged with the suite tag whose runner is the designated one
//! ```

use crate::context::ScanContext;
use crate::discovery::UnitFinder;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tagscan_api::{Member, Tagged, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestSelection {
    /// Every unit carrying the suite tag, whatever its runner.
    All,
    /// Suites bound to the designated runner.
    Normal,
    /// Suites carrying the data-driven tag.
    DataDriven,
}

pub struct TestFinder<'a> {
    ctx: &'a ScanContext,
    root_namespace: String,
    selection: TestSelection,
}

impl<'a> TestFinder<'a> {
    pub fn new(
        ctx: &'a ScanContext,
        root_namespace: impl Into<String>,
        selection: TestSelection,
    ) -> Self {
        Self {
            ctx,
            root_namespace: root_namespace.into(),
            selection,
        }
    }

    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    pub fn selection(&self) -> TestSelection {
        self.selection
    }

    /// Selected test classes, sorted by identifier.
    pub fn classes(&self) -> Result<Vec<Unit>> {
        let conventions = &self.ctx.config().tests;
        let finder = self.ctx.finder();
        match self.selection {
            TestSelection::All => {
                finder.find_units(&self.root_namespace, Some(&conventions.suite_tag))
            }
            TestSelection::Normal => {
                let mut units = finder.find_units_by_exact_runner(
                    &self.root_namespace,
                    &conventions.designated_runner,
                )?;
                units.retain(|unit| unit.has_tag(&conventions.suite_tag));
                Ok(units)
            }
            TestSelection::DataDriven => {
                finder.find_units(&self.root_namespace, Some(&conventions.data_driven_tag))
            }
        }
    }

    /// Test methods across all selected classes, sorted by name.
    pub fn test_methods(&self) -> Result<Vec<Member>> {
        let classes = self.classes()?;
        Ok(UnitFinder::find_members(&classes, &self.ctx.config().tests.test_tag))
    }

    pub fn count_test_methods(&self) -> Result<usize> {
        let classes = self.classes()?;
        Ok(UnitFinder::count_members(&classes, &self.ctx.config().tests.test_tag))
    }
}
