//! Error scenario integration tests

use std::process::Command;

fn pastebridge_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pastebridge"))
}

#[test]
fn config_get_unknown_key() {
    let output = pastebridge_bin()
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown key"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_backend() {
    let home = tempfile::tempdir().unwrap();
    let output = pastebridge_bin()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .args(["config", "set", "backend", "xclip"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("native, arboard"),
        "Expected list of valid backends, got: {}",
        stderr
    );
}

#[test]
fn invalid_backend_flag_is_usage_error() {
    let output = pastebridge_bin()
        .args(["--backend", "xclip", "kind"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid pasteboard backend"));
}

#[test]
fn set_image_missing_file() {
    let output = pastebridge_bin()
        .args(["set-image", "/nonexistent/pastebridge/image.png"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to access"),
        "Expected file access error, got: {}",
        stderr
    );
}

#[test]
fn unknown_subcommand() {
    let output = pastebridge_bin()
        .arg("transcribe")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
