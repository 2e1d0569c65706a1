use std::path::PathBuf;
use tagscan_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagscanError {
    #[error("Cannot read archive {} while scanning namespace '{namespace}': {source}", .archive.display())]
    UnreadableArchive {
        namespace: String,
        archive: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    #[error(
        "Cannot handle location with scheme [{scheme}]; received location=[{location}], namespace=[{namespace}]"
    )]
    UnsupportedRootScheme {
        namespace: String,
        location: String,
        scheme: String,
    },
    #[error("Invalid location [{location}] for namespace '{namespace}': {reason}")]
    InvalidLocation {
        namespace: String,
        location: String,
        reason: String,
    },
    #[error("Search path provider error: {0}")]
    Provider(#[from] ApiError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Logging already initialised: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, TagscanError>;
