use serde::{Deserialize, Serialize};

use crate::scanner::DEFAULT_PATTERN;
use crate::store::DEFAULT_CACHE_FILENAME;

/// Settings read from `.autoload-cache.toml`.
///
/// Every key is optional; a missing key keeps the built-in default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Cache file, relative to the working directory unless absolute.
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Pattern selecting source files, matched against the full path.
    #[serde(default = "default_regex_filter")]
    pub regex_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filename: default_filename(),
            regex_filter: default_regex_filter(),
        }
    }
}

fn default_filename() -> String {
    DEFAULT_CACHE_FILENAME.to_string()
}

fn default_regex_filter() -> String {
    DEFAULT_PATTERN.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
