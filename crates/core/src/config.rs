//! Scan configuration.
//!
//! Everything has a default matching class-file search paths, so an empty
//! JSON object is a valid configuration file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tagscan_api::Tag;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File/entry suffix marking one loadable unit.
    pub unit_suffix: String,
    /// Character separating an outer unit from a synthetic inner unit.
    pub inner_separator: char,
    /// Scan roots and load units on the rayon pool.
    pub parallel: bool,
    pub tests: TestConventions,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            unit_suffix: ".class".to_string(),
            inner_separator: '$',
            parallel: true,
            tests: TestConventions::default(),
        }
    }
}

impl ScanConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Tags that identify test suites and test methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestConventions {
    /// Carried by every unit that declares a runner.
    pub suite_tag: Tag,
    /// The runner value that marks a "normal" test suite.
    pub designated_runner: Tag,
    /// Carried by data-driven suites.
    pub data_driven_tag: Tag,
    /// Carried by test members.
    pub test_tag: Tag,
}

impl Default for TestConventions {
    fn default() -> Self {
        Self {
            suite_tag: Tag::new("RunWith"),
            designated_runner: Tag::new("ThucydidesRunner"),
            data_driven_tag: Tag::new("UseTestDataFrom"),
            test_tag: Tag::new("Test"),
        }
    }
}
