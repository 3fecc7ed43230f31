mod filter;

pub use filter::{DEFAULT_PATTERN, FileFilter, RegexFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{AutoloadError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory, or any directory below it, cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursive scanner with a stable, name-sorted visiting order.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| AutoloadError::Enumeration {
                path: e.path().unwrap_or(root).to_path_buf(),
                source: e,
            })?;
            // Symlinked files count; symlinked directories are not descended into.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if is_file && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }
        log::debug!("Found {} candidate files under {}", files.len(), root.display());
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
