#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the autoload-cache-generator binary.
#[macro_export]
macro_rules! autoload_cache_generator {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("autoload-cache-generator"))
    };
}

/// Creates a temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Canonical path of a fixture file, as it appears in the cache.
    pub fn canonical(&self, relative_path: &str) -> String {
        dunce::canonicalize(self.dir.path().join(relative_path))
            .expect("Failed to canonicalize")
            .to_string_lossy()
            .into_owned()
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    pub fn cache_path(&self) -> PathBuf {
        self.dir.path().join(DEFAULT_CACHE)
    }

    /// Parses the default cache file into (name, location) pairs.
    pub fn cache_entries(&self) -> Vec<(String, String)> {
        let content = self.read(DEFAULT_CACHE);
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&content).expect("Cache is not a JSON object");
        let mut entries: Vec<_> = map
            .into_iter()
            .map(|(k, v)| (k, v.as_str().expect("Non-string location").to_string()))
            .collect();
        entries.sort();
        entries
    }

    /// Lays out the two-file project used by most tests under `src/`.
    pub fn create_two_file_project(&self) {
        self.create_file("src/file1.php", FILE1);
        self.create_file("src/file2.php", FILE2);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const DEFAULT_CACHE: &str = "classes.cache.json";

/// Global class and interface.
pub const FILE1: &str = "<?php\nclass A {}\ninterface B {}\n";

/// Namespaced class, interface and trait.
pub const FILE2: &str = "<?php\nnamespace A;\n\nclass A {}\ninterface C {}\ntrait D {}\n";
