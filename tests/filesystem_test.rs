//! Tests for RealFileSystem

use std::fs;

use tempfile::TempDir;

use tripwise::infrastructure::traits::{FileSystem, RealFileSystem};

// ============================================================
// write_atomic tests
// ============================================================

#[test]
fn given_existing_file_when_write_atomic_then_replaces_content() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tree.txt");
    fs::write(&path, "A:Old\n").unwrap();

    let fs = RealFileSystem;

    // Act
    fs.write_atomic(&path, "A:New\n").unwrap();

    // Assert
    assert_eq!(fs.read_to_string(&path).unwrap(), "A:New\n");
}

#[test]
fn given_missing_parent_dirs_when_write_atomic_then_creates_them() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a/b/tree.txt");

    let fs = RealFileSystem;
    fs.write_atomic(&path, "A:Paris\n").unwrap();

    assert!(fs.exists(&path));
}

#[test]
fn given_directory_target_when_write_atomic_then_fails_and_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("dir");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "x").unwrap();

    let fs = RealFileSystem;
    let result = fs.write_atomic(&target, "A:Paris\n");

    assert!(result.is_err());
    assert!(target.join("keep.txt").exists());
    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "temporary file should be cleaned up");
}

#[test]
fn given_missing_file_when_read_then_not_found() {
    let temp = TempDir::new().unwrap();

    let err = RealFileSystem
        .read_to_string(&temp.path().join("nope.txt"))
        .unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
