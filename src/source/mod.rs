//! Where source files come from: a real directory tree, or a set of virtual
//! files held in memory.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::{AutoloadError, Result};
use crate::filesystem::FileSystem;
use crate::scanner::FileScanner;

pub trait SourceProvider {
    /// List the files to scan, in processing order.
    ///
    /// # Errors
    /// Returns an error if the source tree cannot be enumerated.
    fn candidates(&self) -> Result<Vec<PathBuf>>;

    /// The location recorded in the mapping for `candidate`.
    ///
    /// # Errors
    /// Returns an error if the location cannot be determined or is not UTF-8.
    fn location(&self, candidate: &Path) -> Result<String>;

    /// Read the content of `candidate`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read(&self, candidate: &Path) -> Result<String>;
}

/// Files found by walking `root` on disk. Locations are canonical paths.
pub struct FsSourceProvider<S: FileScanner, F: FileSystem> {
    root: PathBuf,
    scanner: S,
    fs: F,
}

impl<S: FileScanner, F: FileSystem> FsSourceProvider<S, F> {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, scanner: S, fs: F) -> Self {
        Self {
            root: root.into(),
            scanner,
            fs,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl<S: FileScanner, F: FileSystem> SourceProvider for FsSourceProvider<S, F> {
    fn candidates(&self) -> Result<Vec<PathBuf>> {
        self.scanner.scan(&self.root)
    }

    fn location(&self, candidate: &Path) -> Result<String> {
        let canonical = self
            .fs
            .canonicalize(candidate)
            .map_err(|e| AutoloadError::FileRead {
                path: candidate.to_path_buf(),
                source: e,
            })?;
        // Locations must map back to exactly one path.
        match canonical.to_str() {
            Some(location) => Ok(location.to_string()),
            None => Err(AutoloadError::InvalidEncoding { path: canonical }),
        }
    }

    fn read(&self, candidate: &Path) -> Result<String> {
        let bytes = self.fs.read(candidate).map_err(|e| AutoloadError::FileRead {
            path: candidate.to_path_buf(),
            source: e,
        })?;
        String::from_utf8(bytes).map_err(|_| AutoloadError::InvalidEncoding {
            path: candidate.to_path_buf(),
        })
    }
}

/// Virtual files keyed by a logical name, which doubles as the location.
#[derive(Debug, Clone, Default)]
pub struct MemorySourceProvider {
    files: IndexMap<String, String>,
}

impl MemorySourceProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, key: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(key.into(), content.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemorySourceProvider {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            files: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SourceProvider for MemorySourceProvider {
    fn candidates(&self) -> Result<Vec<PathBuf>> {
        Ok(self.files.keys().map(PathBuf::from).collect())
    }

    fn location(&self, candidate: &Path) -> Result<String> {
        Ok(candidate.to_string_lossy().into_owned())
    }

    /// Unknown keys read as empty content.
    fn read(&self, candidate: &Path) -> Result<String> {
        let key = candidate.to_string_lossy();
        Ok(self.files.get(key.as_ref()).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
