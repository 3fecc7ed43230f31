//! Lookup side of the cache: turn a type name into the file that declares it.

use std::path::{Path, PathBuf};

use crate::error::{AutoloadError, Result};
use crate::filesystem::FileSystem;
use crate::mapping::TypeMapping;

/// What to do when a lookup cannot produce a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Report nothing; the lookup yields `None`.
    #[default]
    Ignore,
    Error,
}

/// Separate handling for the two ways a lookup can come up empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvePolicy {
    /// The name is not in the mapping.
    pub unknown_type: FailureMode,
    /// The name is mapped, but the file is gone.
    pub missing_file: FailureMode,
}

impl ResolvePolicy {
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            unknown_type: FailureMode::Ignore,
            missing_file: FailureMode::Ignore,
        }
    }

    #[must_use]
    pub const fn strict() -> Self {
        Self {
            unknown_type: FailureMode::Error,
            missing_file: FailureMode::Error,
        }
    }
}

pub struct TypeResolver<F: FileSystem> {
    mapping: TypeMapping,
    policy: ResolvePolicy,
    fs: F,
}

impl<F: FileSystem> TypeResolver<F> {
    #[must_use]
    pub const fn new(mapping: TypeMapping, policy: ResolvePolicy, fs: F) -> Self {
        Self {
            mapping,
            policy,
            fs,
        }
    }

    /// Find the file declaring `name`.
    ///
    /// A leading `\` on the name is ignored.
    ///
    /// # Errors
    /// Returns [`AutoloadError::UnknownType`] or [`AutoloadError::MissingFile`]
    /// when the policy asks for an error in that situation.
    pub fn resolve(&self, name: &str) -> Result<Option<PathBuf>> {
        let name = name.strip_prefix('\\').unwrap_or(name);
        let Some(location) = self.mapping.get(name) else {
            return match self.policy.unknown_type {
                FailureMode::Ignore => Ok(None),
                FailureMode::Error => Err(AutoloadError::UnknownType(name.to_string())),
            };
        };

        let path = Path::new(location);
        if self.fs.exists(path) {
            return Ok(Some(path.to_path_buf()));
        }
        match self.policy.missing_file {
            FailureMode::Ignore => Ok(None),
            FailureMode::Error => Err(AutoloadError::MissingFile(path.to_path_buf())),
        }
    }

    #[must_use]
    pub const fn mapping(&self) -> &TypeMapping {
        &self.mapping
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
