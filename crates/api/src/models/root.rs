use std::fmt;
use std::path::PathBuf;

/// A location on the search path that may contain units for a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchRoot {
    /// Directory whose contents map onto the requested namespace.
    Directory(PathBuf),
    /// ZIP-format archive, with the `/`-separated path inside it that
    /// corresponds to the requested namespace (empty for the archive root).
    Archive { archive: PathBuf, inner: String },
}

impl SearchRoot {
    pub fn kind(&self) -> &'static str {
        match self {
            SearchRoot::Directory(_) => "directory",
            SearchRoot::Archive { .. } => "archive",
        }
    }
}

impl fmt::Display for SearchRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchRoot::Directory(path) => write!(f, "{}", path.display()),
            SearchRoot::Archive { archive, inner } => {
                write!(f, "{}!/{}", archive.display(), inner)
            }
        }
    }
}
