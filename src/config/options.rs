use std::path::{Path, PathBuf};

use crate::error::AutoloadError;
use crate::filesystem::FileSystem;
use crate::scanner::RegexFilter;

use super::Config;

/// Fully layered settings for one `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub directory: Option<PathBuf>,
    pub filename: String,
    pub regex_filter: String,
}

impl GenerateOptions {
    /// Start from a loaded config; CLI overrides are applied afterwards.
    #[must_use]
    pub fn new(directory: Option<PathBuf>, config: Config) -> Self {
        Self {
            directory,
            filename: config.filename,
            regex_filter: config.regex_filter,
        }
    }

    #[must_use]
    pub fn with_filename(mut self, filename: Option<String>) -> Self {
        if let Some(filename) = filename {
            self.filename = filename;
        }
        self
    }

    #[must_use]
    pub fn with_regex_filter(mut self, regex_filter: Option<String>) -> Self {
        if let Some(regex_filter) = regex_filter {
            self.regex_filter = regex_filter;
        }
        self
    }

    /// Every problem that would prevent a scan, in argument order.
    ///
    /// An empty list means the options are usable.
    pub fn validate<F: FileSystem>(&self, fs: &F) -> Vec<AutoloadError> {
        let mut errors = Vec::new();

        match self.directory.as_deref() {
            None => errors.push(AutoloadError::MissingDirectory),
            Some(dir) if dir.as_os_str().is_empty() => {
                errors.push(AutoloadError::MissingDirectory);
            }
            Some(dir) if !fs.is_dir(dir) => {
                errors.push(AutoloadError::DirectoryNotFound(dir.to_path_buf()));
            }
            Some(_) => {}
        }

        if self.filename.is_empty() {
            errors.push(AutoloadError::EmptyOption("--filename".to_string()));
        }

        if self.regex_filter.is_empty() {
            errors.push(AutoloadError::EmptyOption("--regexfilter".to_string()));
        } else if let Err(e) = RegexFilter::new(&self.regex_filter) {
            errors.push(e);
        }

        errors
    }

    /// Compile the file filter.
    ///
    /// # Errors
    /// Returns [`AutoloadError::InvalidPattern`] if the pattern does not compile.
    pub fn filter(&self) -> crate::Result<RegexFilter> {
        RegexFilter::new(&self.regex_filter)
    }

    #[must_use]
    pub fn cache_path(&self) -> &Path {
        Path::new(&self.filename)
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
