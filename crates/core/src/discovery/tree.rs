//! Directory-tree scanning.

use crate::config::ScanConfig;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use tagscan_api::ComponentId;
use tracing::{debug, warn};
use walkdir::WalkDir;

pub struct TreeScanner<'a> {
    config: &'a ScanConfig,
}

impl<'a> TreeScanner<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// List every unit below `root`, which holds the contents of `namespace`.
    ///
    /// A missing root contributes nothing. Symlinks are followed, but each
    /// directory is entered at most once (keyed by its canonical path), which
    /// also cuts symlink cycles.
    pub fn scan(&self, root: &Path, namespace: &str) -> BTreeSet<ComponentId> {
        let mut ids = BTreeSet::new();
        if !root.is_dir() {
            debug!("Directory root {} not present", root.display());
            return ids;
        }

        let mut visited: HashSet<PathBuf> = HashSet::new();
        let walker = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| {
                if !entry.file_type().is_dir() {
                    return true;
                }
                match entry.path().canonicalize() {
                    Ok(canonical) => visited.insert(canonical),
                    Err(_) => false,
                }
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            if let Some(id) = self.identifier_for(namespace, relative) {
                ids.insert(id);
            }
        }

        ids
    }

    /// Map a root-relative file path to an identifier: each parent directory
    /// extends `namespace` by one segment, the file stem is the simple name.
    /// Any segment holding the inner-unit separator rejects the whole path.
    pub fn identifier_for(&self, namespace: &str, relative: &Path) -> Option<ComponentId> {
        let separator = self.config.inner_separator;
        let file_name = relative.file_name()?.to_str()?;
        let stem = file_name.strip_suffix(self.config.unit_suffix.as_str())?;
        if stem.is_empty() || stem.contains(separator) {
            return None;
        }

        let mut prefix = namespace.to_string();
        if let Some(parent) = relative.parent() {
            for component in parent.components() {
                let segment = component.as_os_str().to_str()?;
                if segment.contains(separator) {
                    return None;
                }
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(segment);
            }
        }

        Some(ComponentId::join(&prefix, stem))
    }
}
