use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tagscan_api::{ApiResult, ComponentId, Unit, UnitLoader};
use tagscan_core::{ClassPath, UnitRegistry};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// Temporary class path made of directories and archives.
pub struct Fixture {
    temp: TempDir,
    entries: Vec<PathBuf>,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        Self {
            temp: tempfile::tempdir().unwrap(),
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Add a class directory holding empty files at the given relative paths.
    pub fn directory(mut self, name: &str, files: &[&str]) -> Self {
        let root = self.temp.path().join(name);
        fs::create_dir_all(&root).unwrap();
        for file in files {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            File::create(path).unwrap();
        }
        self.entries.push(root);
        self
    }

    /// Add a ZIP archive with the given entry names.
    pub fn archive(mut self, name: &str, entries: &[&str]) -> Self {
        let path = self.temp.path().join(name);
        write_archive(&path, entries);
        self.entries.push(path);
        self
    }

    /// Add a file that claims to be an archive but is not.
    pub fn corrupt_archive(mut self, name: &str) -> Self {
        let path = self.temp.path().join(name);
        fs::write(&path, b"PK but not really").unwrap();
        self.entries.push(path);
        self
    }

    pub fn class_path(&self) -> ClassPath {
        ClassPath::from_paths(self.entries.iter().cloned())
    }
}

pub fn write_archive(path: &Path, entries: &[&str]) {
    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    for entry in entries {
        writer
            .start_file(*entry, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"\xCA\xFE\xBA\xBE").unwrap();
    }
    writer.finish().unwrap();
}

/// Registry wrapper that records every load request.
#[allow(dead_code)]
pub struct RecordingLoader {
    pub registry: UnitRegistry,
    pub calls: Mutex<Vec<ComponentId>>,
}

#[allow(dead_code)]
impl RecordingLoader {
    pub fn new(units: impl IntoIterator<Item = Unit>) -> Self {
        let registry = UnitRegistry::new();
        registry.register_batch(units);
        Self {
            registry,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ComponentId> {
        let mut calls = self.calls.lock().unwrap().clone();
        calls.sort();
        calls
    }
}

impl UnitLoader for RecordingLoader {
    fn load(&self, id: &ComponentId) -> ApiResult<Unit> {
        self.calls.lock().unwrap().push(id.clone());
        self.registry.load(id)
    }
}

#[allow(dead_code)]
pub fn ids(units: &[Unit]) -> Vec<&str> {
    units.iter().map(|u| u.id.as_str()).collect()
}
