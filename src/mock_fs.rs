use std::collections::{HashMap, HashSet};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::filesystem::FileSystem;

pub struct MockFileSystem {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    dirs: HashSet<PathBuf>,
    read_errors: HashMap<PathBuf, ErrorKind>,
    write_error: Option<ErrorKind>,
    write_limit: Option<usize>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            dirs: HashSet::new(),
            read_errors: HashMap::new(),
            write_error: None,
            write_limit: None,
        }
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.with_bytes(path, content.as_bytes())
    }

    pub fn with_bytes(self, path: impl Into<PathBuf>, content: &[u8]) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(normalize_path(&path.into()), content.to_vec());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(normalize_path(&path.into()));
        self
    }

    pub fn with_read_error(mut self, path: impl Into<PathBuf>, kind: ErrorKind) -> Self {
        self.read_errors.insert(normalize_path(&path.into()), kind);
        self
    }

    pub fn with_write_error(mut self, kind: ErrorKind) -> Self {
        self.write_error = Some(kind);
        self
    }

    /// Accept at most `limit` bytes per write and report the short count.
    pub fn with_write_limit(mut self, limit: usize) -> Self {
        self.write_limit = Some(limit);
        self
    }

    pub fn content(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(&normalize_path(path))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        let normalized = normalize_path(path);
        if let Some(kind) = self.read_errors.get(&normalized) {
            return Err(Error::new(*kind, "mock read failure"));
        }
        self.files
            .lock()
            .unwrap()
            .get(&normalized)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<usize> {
        if let Some(kind) = self.write_error {
            return Err(Error::new(kind, "mock write failure"));
        }
        let written = self.write_limit.map_or(contents.len(), |l| l.min(contents.len()));
        if written == contents.len() {
            self.files
                .lock()
                .unwrap()
                .insert(normalize_path(path), contents.to_vec());
        }
        Ok(written)
    }

    fn exists(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);
        self.dirs.contains(&normalized)
            || self.read_errors.contains_key(&normalized)
            || self.files.lock().unwrap().contains_key(&normalized)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(&normalize_path(path))
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        let normalized = normalize_path(path);
        // In mock, return error if file doesn't exist (like real canonicalize)
        if self.exists(&normalized) {
            Ok(normalized)
        } else {
            Err(Error::new(ErrorKind::NotFound, "file not found"))
        }
    }
}

pub fn normalize_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let mut components = Vec::new();
    for part in path_str.split('/') {
        match part {
            ".." => {
                components.pop();
            }
            "." | "" => {}
            _ => components.push(part),
        }
    }
    let normalized = if path_str.starts_with('/') {
        format!("/{}", components.join("/"))
    } else {
        components.join("/")
    };
    PathBuf::from(normalized)
}
