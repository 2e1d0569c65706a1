//! Unit discovery over a search path.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌───────────────────────────┐
//! │ PathResolver │───▶│ TreeScanner / ArchiveScan │  (one task per root)
//! └──────────────┘    └─────────────┬─────────────┘
//!                                   │ union + dedupe
//!                                   ▼
//!                     ┌─────────────────────────────┐
//!                     │ Loader ─▶ TagFilter ─▶ sort │
//!                     └─────────────────────────────┘
//! ```
//!
//! Everything is driven by [`UnitFinder`]; the other types are usable on
//! their own for single-root work.

pub mod archive;
pub mod filter;
pub mod finder;
pub mod loader;
pub mod resolver;
pub mod tree;

pub use archive::ArchiveScanner;
pub use filter::TagFilter;
pub use finder::UnitFinder;
pub use loader::Loader;
pub use resolver::PathResolver;
pub use tree::TreeScanner;
