//! File system tests for artifact persistence.

use std::fs;

use image::{GrayImage, Luma};
use tagpress_compose::{Artifact, ArtifactComposer, CompositionError, MatrixEncoder};
use tagpress_model::Code;
use tagpress_store::{ArtifactStore, FileNaming, StorageError};
use tempfile::tempdir;

struct Checkerboard;

impl MatrixEncoder for Checkerboard {
    fn encode(&self, _payload: &str) -> Result<GrayImage, CompositionError> {
        Ok(GrayImage::from_fn(64, 64, |x, y| {
            if (x / 8 + y / 8) % 2 == 0 {
                Luma([0])
            } else {
                Luma([255])
            }
        }))
    }
}

fn artifact() -> Artifact {
    let mut composer = ArtifactComposer::new(Box::new(Checkerboard));
    composer.render(&Code::parse("4071").unwrap(), None).unwrap()
}

#[test]
fn save_creates_directory_and_jpeg() {
    let dir = tempdir().unwrap();
    let store = ArtifactStore::new(dir.path().join("data"));
    let code = Code::parse("4071").unwrap();

    let path = store.save(&artifact(), &code).unwrap();

    assert_eq!(path, dir.path().join("data").join("qr_code_4071.jpg"));
    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[0..2], &[0xFF, 0xD8], "JPEG SOI marker");
    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (64, 64));
}

#[test]
fn same_code_maps_to_same_path_and_overwrites() {
    let dir = tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    let code = Code::parse("5682").unwrap();

    let first = store.save(&artifact(), &code).unwrap();
    let second = store.save(&artifact(), &code).unwrap();

    assert_eq!(first, second);
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "no temp files or duplicates left behind");
}

#[test]
fn png_extension_writes_png() {
    let dir = tempdir().unwrap();
    let store = ArtifactStore::new(dir.path()).with_naming(FileNaming::new("tag_", "png"));
    let path = store
        .save(&artifact(), &Code::parse("1234").unwrap())
        .unwrap();
    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn unsupported_extension_writes_nothing() {
    let dir = tempdir().unwrap();
    let store = ArtifactStore::new(dir.path().join("out")).with_naming(FileNaming::new("x", "txt"));
    let err = store
        .save(&artifact(), &Code::parse("1234").unwrap())
        .unwrap_err();
    assert!(matches!(err, StorageError::UnsupportedFormat { .. }));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn unwritable_directory_is_storage_error() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();

    let store = ArtifactStore::new(blocker.join("data"));
    let err = store
        .save(&artifact(), &Code::parse("1234").unwrap())
        .unwrap_err();
    assert!(matches!(err, StorageError::Io { operation: "create directory", .. }));
    assert!(!err.user_message().is_empty());
}
