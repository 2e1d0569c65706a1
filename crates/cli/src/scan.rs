use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tagscan_core::{ClassPath, ScanConfig, ScanContext, UnitRegistry};
use tracing::debug;

/// Options shared by every query command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directories and archives to search, separated like the platform PATH
    #[arg(long, short = 'c', value_name = "PATHS")]
    pub classpath: String,

    /// JSON manifest describing the loadable units
    #[arg(long, short = 'm', value_name = "FILE")]
    pub manifest: PathBuf,

    /// JSON scan configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the loadable-unit suffix (e.g. ".class")
    #[arg(long)]
    pub suffix: Option<String>,

    /// Scan roots and load units on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    pub fn build_context(&self) -> Result<ScanContext, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => ScanConfig::from_file(path)?,
            None => ScanConfig::default(),
        };
        if let Some(suffix) = &self.suffix {
            config.unit_suffix = suffix.clone();
        }
        if self.sequential {
            config.parallel = false;
        }

        let class_path = ClassPath::parse(&self.classpath);
        debug!("Class path has {} entries", class_path.entries().len());

        let registry = Arc::new(UnitRegistry::from_manifest_file(&self.manifest)?);

        Ok(ScanContext::new(Arc::new(class_path), registry.clone())
            .with_runner_provider(registry)
            .with_config(config))
    }
}
