use ezpresso::materializer::{copy_static, ensure_dir, write_artifact, OverwritePolicy};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_ensure_dir_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a/b/c");

    ensure_dir(&path).unwrap();
    ensure_dir(&path).unwrap();

    assert!(path.is_dir());
}

#[test]
fn test_write_artifact_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("src/controllers/user.controller.ts");

    let written = write_artifact(&target, "content", OverwritePolicy::Overwrite).unwrap();

    assert!(written);
    assert_eq!(fs::read_to_string(&target).unwrap(), "content");
}

#[test]
fn test_overwrite_policy_replaces_content() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("file.ts");

    write_artifact(&target, "old", OverwritePolicy::Overwrite).unwrap();
    let written = write_artifact(&target, "new", OverwritePolicy::Overwrite).unwrap();

    assert!(written);
    assert_eq!(fs::read_to_string(&target).unwrap(), "new");
}

#[test]
fn test_skip_policy_keeps_existing_content() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("file.ts");

    write_artifact(&target, "old", OverwritePolicy::Overwrite).unwrap();
    let written = write_artifact(&target, "new", OverwritePolicy::Skip).unwrap();

    assert!(!written);
    assert_eq!(fs::read_to_string(&target).unwrap(), "old");
}

#[test]
fn test_skip_policy_writes_when_absent() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("file.ts");

    let written = write_artifact(&target, "content", OverwritePolicy::Skip).unwrap();

    assert!(written);
    assert_eq!(fs::read_to_string(&target).unwrap(), "content");
}

#[test]
fn test_copy_static_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source.txt");
    let dest = temp_dir.path().join("nested/dest.txt");
    fs::write(&source, "PORT=3000\n{{ not_rendered }}\n").unwrap();

    let copied = copy_static(&source, &dest, OverwritePolicy::Overwrite).unwrap();

    assert!(copied);
    assert_eq!(fs::read(&source).unwrap(), fs::read(&dest).unwrap());
}

#[test]
fn test_copy_static_skip_policy_keeps_existing_content() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source.txt");
    let dest = temp_dir.path().join("dest.txt");
    fs::write(&source, "new").unwrap();
    fs::write(&dest, "old").unwrap();

    let copied = copy_static(&source, &dest, OverwritePolicy::Skip).unwrap();

    assert!(!copied);
    assert_eq!(fs::read_to_string(&dest).unwrap(), "old");
}
