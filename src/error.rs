use std::path::PathBuf;

use thiserror::Error;

/// Broad classes of failure, in the order a run can hit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments or configuration; detected before any scanning.
    Configuration,
    /// The source tree could not be traversed.
    Enumeration,
    /// A source file or the existing cache could not be read.
    Content,
    /// Two files declare the same qualified name.
    Conflict,
    /// The cache could not be written.
    Persistence,
    /// A lookup against an existing cache failed.
    Resolution,
}

#[derive(Error, Debug)]
pub enum AutoloadError {
    #[error("A directory is needed!")]
    MissingDirectory,

    #[error("Directory \"{}\" does not exist!", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Option value of \"{0}\" is empty!")]
    EmptyOption(String),

    #[error("Invalid file filter pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot traverse \"{}\": {source}", .path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file \"{}\": {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content of the file, or its canonical path, is not UTF-8.
    #[error("\"{}\" is not valid UTF-8", .path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("Parse error when loading cache \"{}\": {reason}", .path.display())]
    CacheParse { path: PathBuf, reason: String },

    #[error("class \"{name}\" already load [conflict]")]
    Conflict {
        name: String,
        existing: String,
        location: String,
    },

    #[error("Can't write file \"{}\": {source}", .path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't write the file \"{}\" completely! (only {written} of {expected} bytes)", .path.display())]
    ShortWrite {
        path: PathBuf,
        written: usize,
        expected: usize,
    },

    #[error("Class \"{0}\" not found!")]
    UnknownType(String),

    #[error("File \"{}\" not found!", .0.display())]
    MissingFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AutoloadError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingDirectory
            | Self::DirectoryNotFound(_)
            | Self::EmptyOption(_)
            | Self::InvalidPattern { .. }
            | Self::Config(_)
            | Self::TomlParse(_) => ErrorKind::Configuration,
            Self::Enumeration { .. } => ErrorKind::Enumeration,
            Self::FileRead { .. } | Self::InvalidEncoding { .. } | Self::CacheParse { .. } => {
                ErrorKind::Content
            }
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::CacheWrite { .. } | Self::ShortWrite { .. } | Self::Io(_) | Self::Json(_) => {
                ErrorKind::Persistence
            }
            Self::UnknownType(_) | Self::MissingFile(_) => ErrorKind::Resolution,
        }
    }

    /// Short label used as the heading of a rendered error.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Configuration => "Config",
            ErrorKind::Enumeration => "Scan",
            ErrorKind::Content => "Read",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Persistence => "Write",
            ErrorKind::Resolution => "Resolve",
        }
    }

    /// Extra context that does not fit on the headline.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Conflict {
                existing, location, ..
            } => Some(format!("declared in {existing} and {location}")),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Conflict { .. } => {
                Some("rename one of the declarations or exclude one file with --regexfilter")
            }
            Self::CacheParse { .. } => {
                Some("delete the cache file to regenerate it from scratch")
            }
            Self::FileRead { source, .. } | Self::CacheWrite { source, .. } => {
                match source.kind() {
                    std::io::ErrorKind::NotFound => Some("check that the file path exists"),
                    std::io::ErrorKind::PermissionDenied => Some("check file permissions"),
                    _ => None,
                }
            }
            Self::Enumeration { .. } => Some("check directory permissions"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AutoloadError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
