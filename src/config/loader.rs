use std::path::{Path, PathBuf};

use crate::error::{AutoloadError, Result};
use crate::filesystem::{FileSystem, RealFileSystem};

use super::Config;

pub const LOCAL_CONFIG_NAME: &str = ".autoload-cache.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load `.autoload-cache.toml` from `directory`, or the defaults if there
    /// is none.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self, directory: &Path) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(directory: &Path) -> PathBuf {
        directory.join(LOCAL_CONFIG_NAME)
    }

    fn parse_config(path: &Path, bytes: Vec<u8>) -> Result<Config> {
        let content = String::from_utf8(bytes).map_err(|_| {
            AutoloadError::Config(format!("\"{}\" is not valid UTF-8", path.display()))
        })?;
        Ok(toml::from_str(&content)?)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, directory: &Path) -> Result<Config> {
        let path = Self::local_config_path(directory);
        if !self.fs.exists(&path) {
            log::debug!("No {} in {}, using defaults", LOCAL_CONFIG_NAME, directory.display());
            return Ok(Config::default());
        }
        self.load_from_path(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let bytes = self.fs.read(path).map_err(|source| AutoloadError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse_config(path, bytes)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
