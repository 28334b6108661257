use crudforge::writer::{write_file, WriteOutcome};
use std::fs;

#[test]
fn test_write_then_write_is_skipped_and_content_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("src/services/invoice/service.rs");

    let first = write_file(&path, "original", false).unwrap();
    assert_eq!(first, WriteOutcome::Written);

    let second = write_file(&path, "replacement", false).unwrap();
    assert_eq!(second, WriteOutcome::Skipped);
    assert_eq!(fs::read_to_string(&path).unwrap(), "original");
}

#[test]
fn test_force_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.rs");
    write_file(&path, "original", false).unwrap();

    let outcome = write_file(&path, "replacement", true).unwrap();
    assert_eq!(outcome, WriteOutcome::Written);
    assert_eq!(fs::read_to_string(&path).unwrap(), "replacement");
}

#[test]
fn test_parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a/b/c/d.rs");
    assert!(!path.parent().unwrap().exists());

    write_file(&path, "content", false).unwrap();
    assert!(path.exists());
}

#[test]
fn test_repeated_writes_stay_idempotent_across_entities() {
    let dir = tempfile::tempdir().unwrap();
    for entity in ["invoice", "order", "customer_note"] {
        let path = dir.path().join(format!("{entity}.rs"));
        assert_eq!(
            write_file(&path, entity, false).unwrap(),
            WriteOutcome::Written
        );
        assert_eq!(
            write_file(&path, "changed", false).unwrap(),
            WriteOutcome::Skipped
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), entity);
    }
}
