//! Filesystem abstraction for testability.
//!
//! Provides a trait for the filesystem operations the generator needs, so they
//! can be mocked in tests.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as raw bytes.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the contents of `path`, returning the number of bytes written.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<usize>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Canonicalize a path to its absolute, normalized form.
    ///
    /// # Errors
    /// Returns an error if the path cannot be canonicalized (e.g., file doesn't exist).
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    /// Writes a sibling temp file and renames it over the target, so readers
    /// never observe a half-written file.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<usize> {
        let tmp_path = temp_path_for(path);
        let written = {
            let mut file = fs::File::create(&tmp_path)?;
            let written = write_counted(&mut file, contents);
            file.sync_all()?;
            written
        };
        let written = match written {
            Ok(n) if n == contents.len() => n,
            other => {
                let _ = fs::remove_file(&tmp_path);
                return other;
            }
        };
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        Ok(written)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        dunce::canonicalize(path)
    }
}

/// Write as much of `contents` as the writer accepts and report how much that was.
fn write_counted<W: Write>(w: &mut W, contents: &[u8]) -> io::Result<usize> {
    let mut written = 0;
    while written < contents.len() {
        match w.write(&contents[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(written)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;
