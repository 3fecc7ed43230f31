//! Persistence of the type mapping.
//!
//! Cache format (a flat JSON object, one entry per declared type):
//! ```json
//! {
//!   "App\\Model\\User": "/project/src/Model/User.php",
//!   "Helpers": "/project/src/helpers.php"
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{AutoloadError, Result};
use crate::filesystem::FileSystem;
use crate::mapping::TypeMapping;

/// Default cache file name.
pub const DEFAULT_CACHE_FILENAME: &str = "classes.cache.json";

/// Render `mapping` exactly as [`FileCacheStore`] writes it.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json(mapping: &TypeMapping) -> Result<String> {
    let mut json = serde_json::to_string_pretty(mapping)?;
    json.push('\n');
    Ok(json)
}

pub trait CacheStore {
    /// Load the previously persisted mapping, or an empty one if there is none.
    ///
    /// # Errors
    /// Returns an error if an existing cache cannot be read or parsed.
    fn load(&self) -> Result<TypeMapping>;

    /// Persist `mapping`, replacing whatever was stored before.
    ///
    /// # Errors
    /// Returns an error if the mapping cannot be written completely.
    fn store(&mut self, mapping: &TypeMapping) -> Result<()>;
}

/// Cache kept in a JSON file.
pub struct FileCacheStore<F: FileSystem> {
    path: PathBuf,
    fs: F,
}

impl<F: FileSystem> FileCacheStore<F> {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_error(&self, reason: impl Into<String>) -> AutoloadError {
        AutoloadError::CacheParse {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

impl<F: FileSystem> CacheStore for FileCacheStore<F> {
    fn load(&self) -> Result<TypeMapping> {
        let bytes = match self.fs.read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No cache at {}, starting empty", self.path.display());
                return Ok(TypeMapping::new());
            }
            Err(e) => {
                return Err(AutoloadError::FileRead {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let mapping: TypeMapping =
            serde_json::from_slice(&bytes).map_err(|e| self.parse_error(e.to_string()))?;
        if let Some((name, _)) = mapping
            .iter()
            .find(|(name, location)| name.is_empty() || location.is_empty())
        {
            return Err(self.parse_error(format!("empty entry for \"{name}\"")));
        }

        log::debug!(
            "Loaded {} cached entries from {}",
            mapping.len(),
            self.path.display()
        );
        Ok(mapping)
    }

    fn store(&mut self, mapping: &TypeMapping) -> Result<()> {
        let json = to_json(mapping)?;

        let written = self
            .fs
            .write(&self.path, json.as_bytes())
            .map_err(|e| AutoloadError::CacheWrite {
                path: self.path.clone(),
                source: e,
            })?;
        if written != json.len() {
            return Err(AutoloadError::ShortWrite {
                path: self.path.clone(),
                written,
                expected: json.len(),
            });
        }

        log::debug!("Wrote {} entries to {}", mapping.len(), self.path.display());
        Ok(())
    }
}

/// Cache held in memory, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryCacheStore {
    mapping: TypeMapping,
    stores: usize,
}

impl MemoryCacheStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a mapping loaded elsewhere.
    #[must_use]
    pub fn with_mapping(mapping: TypeMapping) -> Self {
        Self { mapping, stores: 0 }
    }

    #[must_use]
    pub const fn mapping(&self) -> &TypeMapping {
        &self.mapping
    }

    #[must_use]
    pub fn into_mapping(self) -> TypeMapping {
        self.mapping
    }

    /// Number of times `store` has been called.
    #[must_use]
    pub const fn store_count(&self) -> usize {
        self.stores
    }
}

impl CacheStore for MemoryCacheStore {
    fn load(&self) -> Result<TypeMapping> {
        Ok(self.mapping.clone())
    }

    fn store(&mut self, mapping: &TypeMapping) -> Result<()> {
        self.mapping = mapping.clone();
        self.stores += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
