//! Tag-driven unit discovery over directory trees and ZIP archives.

pub mod classpath;
pub mod config;
pub mod context;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod registry;
pub mod suite;

pub use classpath::{ClassPath, ClassPathEntry, StaticSearchPath};
pub use config::{ScanConfig, TestConventions};
pub use context::ScanContext;
pub use discovery::UnitFinder;
pub use error::{Result, TagscanError};
pub use registry::{Manifest, UnitRegistry};
pub use suite::{TestFinder, TestSelection};
