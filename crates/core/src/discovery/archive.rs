//! ZIP archive scanning (jar files and friends).

use crate::config::ScanConfig;
use crate::error::{Result, TagscanError};
use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;
use tagscan_api::ComponentId;
use zip::ZipArchive;

pub struct ArchiveScanner<'a> {
    config: &'a ScanConfig,
}

impl<'a> ArchiveScanner<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// List the units stored under `inner` (a `/`-separated path, empty for
    /// the whole archive) without extracting anything.
    ///
    /// Failing to open or parse the archive fails the scan: an archive root is
    /// always expected to be readable once it has been referenced.
    pub fn scan(
        &self,
        archive: &Path,
        inner: &str,
        namespace: &str,
    ) -> Result<BTreeSet<ComponentId>> {
        let unreadable = |source: zip::result::ZipError| TagscanError::UnreadableArchive {
            namespace: namespace.to_string(),
            archive: archive.to_path_buf(),
            source,
        };

        let file = File::open(archive).map_err(|e| unreadable(e.into()))?;
        let zip = ZipArchive::new(file).map_err(unreadable)?;

        let scope = inner.trim_matches('/').replace('/', ".");
        let ids = zip
            .file_names()
            .filter_map(|name| self.identifier_for(name))
            .filter(|id| id.is_within(&scope))
            .collect();

        Ok(ids)
    }

    /// Map an entry name such as `a/b/Foo.class` to `a.b.Foo`.
    ///
    /// Entries with the inner-unit separator anywhere in their path are
    /// skipped, directory segments included.
    pub fn identifier_for(&self, entry: &str) -> Option<ComponentId> {
        if entry.starts_with("META-INF/") {
            return None;
        }
        let path = entry.strip_suffix(self.config.unit_suffix.as_str())?;
        let simple = path.rsplit('/').next().unwrap_or(path);
        if simple.is_empty() || path.contains(self.config.inner_separator) {
            return None;
        }
        Some(ComponentId::new(path.trim_start_matches('/').replace('/', ".")))
    }
}
