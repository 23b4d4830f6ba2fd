//! End-to-end tests for the `generate` subcommand.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn write_config(dir: &Path, extra: &str) -> std::path::PathBuf {
    let path = dir.join("station.toml");
    let body = format!(
        "[store]\ndirectory = {:?}\n\n[dispatch]\nprint = false\n{extra}",
        dir.join("out").display().to_string()
    );
    fs::write(&path, body).unwrap();
    path
}

fn tagpress(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tagpress"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_generate_with_fixed_code_writes_named_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");

    let output = tagpress(&[
        "generate",
        "--config",
        config.to_str().unwrap(),
        "--code",
        "0381",
    ]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let saved = dir.path().join("out").join("qr_code_0381.jpg");
    let bytes = fs::read(&saved).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("0381"));
}

#[test]
fn test_generate_random_code_writes_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");

    let output = tagpress(&["generate", "-c", config.to_str().unwrap()]);

    assert!(output.status.success());
    let files: Vec<_> = fs::read_dir(dir.path().join("out"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("qr_code_") && files[0].ends_with(".jpg"));
}

#[test]
fn test_generate_rejects_repeated_digits() {
    let output = tagpress(&["generate", "--code", "1123"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("1123"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let output = tagpress(&["generate", "-c", missing.to_str().unwrap(), "--no-print"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
}
