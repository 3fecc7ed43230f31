use std::io::ErrorKind;

use super::*;
use crate::filesystem::RealFileSystem;
use crate::mock_fs::MockFileSystem;
use crate::scanner::{DEFAULT_PATTERN, DirectoryScanner, RegexFilter};

struct FixedScanner(Vec<PathBuf>);

impl FileScanner for FixedScanner {
    fn scan(&self, _root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.0.clone())
    }
}

fn fixed(paths: &[&str]) -> FixedScanner {
    FixedScanner(paths.iter().map(PathBuf::from).collect())
}

#[test]
fn fs_provider_lists_scanner_results() {
    let fs = MockFileSystem::new();
    let provider = FsSourceProvider::new("/project", fixed(&["/project/A.php"]), fs);

    assert_eq!(provider.candidates().unwrap(), vec![PathBuf::from("/project/A.php")]);
    assert_eq!(provider.root(), Path::new("/project"));
}

#[test]
fn fs_provider_location_is_canonical() {
    let fs = MockFileSystem::new().with_file("/project/src/A.php", "");
    let provider = FsSourceProvider::new("/project", fixed(&[]), fs);

    let location = provider
        .location(Path::new("/project/lib/../src/./A.php"))
        .unwrap();

    assert_eq!(location, "/project/src/A.php");
}

#[test]
fn fs_provider_reads_content() {
    let fs = MockFileSystem::new().with_file("/project/A.php", "<?php class A {}");
    let provider = FsSourceProvider::new("/project", fixed(&[]), fs);

    assert_eq!(
        provider.read(Path::new("/project/A.php")).unwrap(),
        "<?php class A {}"
    );
}

#[test]
fn fs_provider_missing_file_is_a_read_error() {
    let provider = FsSourceProvider::new("/project", fixed(&[]), MockFileSystem::new());

    let err = provider.read(Path::new("/project/no-file.php")).unwrap_err();

    assert!(matches!(err, AutoloadError::FileRead { ref source, .. } if source.kind() == ErrorKind::NotFound));
    assert!(err.to_string().contains("no-file.php"));
}

#[test]
fn fs_provider_permission_denied_is_a_read_error() {
    let fs = MockFileSystem::new().with_read_error("/project/locked.php", ErrorKind::PermissionDenied);
    let provider = FsSourceProvider::new("/project", fixed(&[]), fs);

    let err = provider.read(Path::new("/project/locked.php")).unwrap_err();

    assert_eq!(err.suggestion(), Some("check file permissions"));
}

#[test]
fn fs_provider_rejects_invalid_utf8() {
    let fs = MockFileSystem::new().with_bytes("/project/latin1.php", b"<?php // caf\xe9\n");
    let provider = FsSourceProvider::new("/project", fixed(&[]), fs);

    let err = provider.read(Path::new("/project/latin1.php")).unwrap_err();

    assert!(matches!(err, AutoloadError::InvalidEncoding { .. }));
}

#[test]
fn fs_provider_over_real_directory() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("A.php"), "<?php class A {}").unwrap();
    let scanner = DirectoryScanner::new(RegexFilter::new(DEFAULT_PATTERN).unwrap());
    let provider = FsSourceProvider::new(temp_dir.path(), scanner, RealFileSystem);

    let candidates = provider.candidates().unwrap();
    let location = provider.location(&candidates[0]).unwrap();

    assert_eq!(candidates.len(), 1);
    assert!(Path::new(&location).is_absolute());
    assert_eq!(provider.read(&candidates[0]).unwrap(), "<?php class A {}");
}

#[test]
fn memory_provider_keeps_insertion_order() {
    let provider = MemorySourceProvider::new()
        .with_file("b.php", "<?php class B {}")
        .with_file("a.php", "<?php class A {}");

    assert_eq!(
        provider.candidates().unwrap(),
        vec![PathBuf::from("b.php"), PathBuf::from("a.php")]
    );
    assert_eq!(provider.len(), 2);
}

#[test]
fn memory_provider_location_is_the_key() {
    let provider: MemorySourceProvider = [("dir/file1.php", "")].into_iter().collect();
    assert_eq!(
        provider.location(Path::new("dir/file1.php")).unwrap(),
        "dir/file1.php"
    );
}

#[test]
fn memory_provider_unknown_key_reads_empty() {
    let provider = MemorySourceProvider::new();
    assert!(provider.is_empty());
    assert_eq!(provider.read(Path::new("ghost.php")).unwrap(), "");
}

#[cfg(target_os = "linux")]
#[test]
fn fs_provider_rejects_non_utf8_location() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join(OsStr::from_bytes(b"caf\xe9.php"));
    std::fs::write(&path, "<?php class Cafe {}").unwrap();
    let provider = FsSourceProvider::new(temp_dir.path(), fixed(&[]), RealFileSystem);

    let err = provider.location(&path).unwrap_err();

    assert!(matches!(err, AutoloadError::InvalidEncoding { .. }));
    assert_eq!(err.kind(), crate::error::ErrorKind::Content);
}
