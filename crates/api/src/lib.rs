pub mod error;
pub mod models;
pub mod provider;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use provider::{DeclaredRunner, RunnerProvider, SearchPathProvider, UnitLoader};
