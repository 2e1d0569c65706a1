//! Search-path providers.
//!
//! [`ClassPath`] mirrors a JVM-style class path: an ordered list of
//! directories and archives. [`StaticSearchPath`] hands out fixed locations
//! per namespace.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tagscan_api::{ApiError, ApiResult, SearchPathProvider};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassPathEntry {
    Directory(PathBuf),
    Archive(PathBuf),
}

impl ClassPathEntry {
    /// `.jar` and `.zip` files are archives, everything else a directory.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let is_archive = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("jar") || e.eq_ignore_ascii_case("zip"));
        if is_archive {
            ClassPathEntry::Archive(path)
        } else {
            ClassPathEntry::Directory(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ClassPathEntry::Directory(path) | ClassPathEntry::Archive(path) => path,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClassPath {
    entries: Vec<ClassPathEntry>,
}

impl ClassPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a platform path list (`:`-separated on Unix, `;` on Windows).
    pub fn parse(path_list: &str) -> Self {
        Self::from_paths(
            std::env::split_paths(path_list).filter(|p| !p.as_os_str().is_empty()),
        )
    }

    pub fn from_paths(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            entries: paths.into_iter().map(ClassPathEntry::from_path).collect(),
        }
    }

    pub fn with_entry(mut self, entry: ClassPathEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(&self) -> &[ClassPathEntry] {
        &self.entries
    }

    fn file_url(path: &Path) -> ApiResult<Url> {
        let absolute = std::path::absolute(path).map_err(|e| {
            ApiError::InvalidArgument(format!("cannot resolve {}: {e}", path.display()))
        })?;
        Url::from_file_path(&absolute).map_err(|_| {
            ApiError::InvalidArgument(format!("not a file path: {}", absolute.display()))
        })
    }
}

impl SearchPathProvider for ClassPath {
    /// One location per entry. Nothing is checked here: missing directories are
    /// skipped by the tree scanner, archives fail when opened.
    fn locations(&self, namespace: &str) -> ApiResult<Vec<String>> {
        let relative = namespace.replace('.', "/");
        self.entries
            .iter()
            .map(|entry| match entry {
                ClassPathEntry::Directory(dir) => {
                    let target = if relative.is_empty() {
                        dir.clone()
                    } else {
                        dir.join(&relative)
                    };
                    Ok(Self::file_url(&target)?.to_string())
                }
                ClassPathEntry::Archive(archive) => {
                    Ok(format!("jar:{}!/{}", Self::file_url(archive)?, relative))
                }
            })
            .collect()
    }

    fn name(&self) -> &str {
        "Class Path"
    }
}

/// Fixed namespace -> locations table.
#[derive(Debug, Clone, Default)]
pub struct StaticSearchPath {
    locations: HashMap<String, Vec<String>>,
}

impl StaticSearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(
        mut self,
        namespace: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        self.locations
            .entry(namespace.into())
            .or_default()
            .push(location.into());
        self
    }
}

impl SearchPathProvider for StaticSearchPath {
    fn locations(&self, namespace: &str) -> ApiResult<Vec<String>> {
        Ok(self.locations.get(namespace).cloned().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "Static Search Path"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::resolver::parse_location;
    use tagscan_api::SearchRoot;

    #[test]
    fn test_entry_kind_from_extension() {
        assert!(matches!(
            ClassPathEntry::from_path("libs/app.JAR"),
            ClassPathEntry::Archive(_)
        ));
        assert!(matches!(
            ClassPathEntry::from_path("libs/bundle.zip"),
            ClassPathEntry::Archive(_)
        ));
        assert!(matches!(
            ClassPathEntry::from_path("target/classes"),
            ClassPathEntry::Directory(_)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_path_list() {
        let cp = ClassPath::parse("/opt/classes::/opt/libs/app.jar");
        assert_eq!(
            cp.entries(),
            &[
                ClassPathEntry::Directory(PathBuf::from("/opt/classes")),
                ClassPathEntry::Archive(PathBuf::from("/opt/libs/app.jar")),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_locations_resolve_back_to_roots() {
        let temp = tempfile::tempdir().unwrap();
        let classes = temp.path().join("classes");
        let jar = temp.path().join("libs").join("app.jar");
        let cp = ClassPath::from_paths([classes.clone(), jar.clone()]);

        let roots: Vec<SearchRoot> = cp
            .locations("net.example")
            .unwrap()
            .iter()
            .map(|loc| parse_location("net.example", loc).unwrap())
            .collect();

        assert_eq!(
            roots,
            vec![
                SearchRoot::Directory(classes.join("net/example")),
                SearchRoot::Archive {
                    archive: jar,
                    inner: "net/example".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_static_search_path() {
        let sp = StaticSearchPath::new()
            .with_location("pkg", "file:///a/pkg")
            .with_location("pkg", "jar:file:///b.jar!/pkg");
        assert_eq!(sp.locations("pkg").unwrap().len(), 2);
        assert!(sp.locations("other").unwrap().is_empty());
    }
}
