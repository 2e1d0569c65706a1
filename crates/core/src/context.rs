use crate::config::ScanConfig;
use crate::discovery::UnitFinder;
use crate::suite::{TestFinder, TestSelection};
use std::sync::Arc;
use tagscan_api::{DeclaredRunner, RunnerProvider, SearchPathProvider, UnitLoader};

/// Provider handles and configuration for scan calls.
///
/// Nothing here is mutated by a scan, so one context can serve concurrent
/// queries.
#[derive(Clone)]
pub struct ScanContext {
    search_path: Arc<dyn SearchPathProvider>,
    loader: Arc<dyn UnitLoader>,
    runners: Arc<dyn RunnerProvider>,
    config: ScanConfig,
}

impl ScanContext {
    pub fn new(search_path: Arc<dyn SearchPathProvider>, loader: Arc<dyn UnitLoader>) -> Self {
        Self {
            search_path,
            loader,
            runners: Arc::new(DeclaredRunner),
            config: ScanConfig::default(),
        }
    }

    pub fn with_runner_provider(mut self, runners: Arc<dyn RunnerProvider>) -> Self {
        self.runners = runners;
        self
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn search_path(&self) -> &dyn SearchPathProvider {
        self.search_path.as_ref()
    }

    pub fn loader(&self) -> &dyn UnitLoader {
        self.loader.as_ref()
    }

    pub fn runner_provider(&self) -> &dyn RunnerProvider {
        self.runners.as_ref()
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn finder(&self) -> UnitFinder<'_> {
        UnitFinder::new(self)
    }

    pub fn test_finder(
        &self,
        root_namespace: impl Into<String>,
        selection: TestSelection,
    ) -> TestFinder<'_> {
        TestFinder::new(self, root_namespace, selection)
    }
}
