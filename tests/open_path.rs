mod common;

use std::sync::Arc;

use assert_fs::prelude::*;
use common::{harness, FailingStore};

#[test]
fn typed_path_delivers_the_file() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let fixture = tmp.child("holiday.jpg");
    fixture.write_binary(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

    let mut h = harness(Arc::new(FailingStore), true);
    h.app.open_path(&fixture.path().display().to_string());

    let files = h.files.borrow();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "holiday.jpg");
    assert_eq!(files[0].content_type.as_deref(), Some("image/jpeg"));
    assert_eq!(files[0].bytes, [0xFF, 0xD8, 0xFF, 0xE0]);
    assert!(h.app.snackbar.is_empty());
}

#[test]
fn quoted_dropped_path_is_unwrapped() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let fixture = tmp.child("with spaces.png");
    fixture.write_binary(&[1, 2, 3]).unwrap();

    let mut h = harness(Arc::new(FailingStore), true);
    // Terminals quote dropped paths that contain spaces.
    h.app.open_path(&format!("'{}'", fixture.path().display()));

    let files = h.files.borrow();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "with spaces.png");
    assert_eq!(files[0].content_type.as_deref(), Some("image/png"));
}

#[test]
fn missing_path_snacks_and_delivers_nothing() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let missing = tmp.child("not-there.png");

    let mut h = harness(Arc::new(FailingStore), true);
    h.app.open_path(&missing.path().display().to_string());

    assert!(h.files.borrow().is_empty());
    assert_eq!(h.app.snackbar.current(), Some("Couldn't open file"));
}
