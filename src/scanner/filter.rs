use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::error::{AutoloadError, Result};

/// Default pattern: every `.php` file, case-insensitively.
pub const DEFAULT_PATTERN: &str = r"/^.+\.php$/i";

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Matches a regular expression against the full path of each file.
#[derive(Debug, Clone)]
pub struct RegexFilter {
    regex: Regex,
}

impl RegexFilter {
    /// Compile a filter pattern.
    ///
    /// Both plain patterns (`\.php$`) and delimited ones with trailing flags
    /// (`/^.+\.php$/i`) are accepted. Supported flags are `i`, `m`, `s` and `x`.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self> {
        let (body, flags) = split_delimited(pattern).unwrap_or((pattern, ""));
        let regex = RegexBuilder::new(body)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .ignore_whitespace(flags.contains('x'))
            .build()
            .map_err(|e| AutoloadError::InvalidPattern {
                pattern: pattern.to_string(),
                source: e,
            })?;
        Ok(Self { regex })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl FileFilter for RegexFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.regex.is_match(&path.to_string_lossy())
    }
}

/// Split `/body/flags` into its parts. Returns `None` unless the pattern is
/// wrapped in `/` and everything after the closing `/` is a known flag.
fn split_delimited(pattern: &str) -> Option<(&str, &str)> {
    let inner = pattern.strip_prefix('/')?;
    let end = inner.rfind('/')?;
    let (body, flags) = (&inner[..end], &inner[end + 1..]);
    flags
        .chars()
        .all(|c| matches!(c, 'i' | 'm' | 's' | 'x'))
        .then_some((body, flags))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
