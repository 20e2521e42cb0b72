//! CLI integration tests
//!
//! Spawn the built `errlens` binary against payload files and stdin.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde_json::{json, Value};
use tempfile::TempDir;

fn write_payload(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn errlens(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_errlens"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

fn errlens_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_errlens"))
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_classify_sap_file() {
    let dir = TempDir::new().unwrap();
    let payload = json!({
        "errorMessage": {"error": {"message": {"error": {
            "message": {"lang": "en", "value": "Backend unavailable"}
        }}}}
    });
    let path = write_payload(&dir, "sap.json", &payload.to_string());

    let out = stdout_json(&errlens(&[
        "classify",
        path.to_str().unwrap(),
        "--correlation-id",
        "req-42",
    ]));

    assert_eq!(out["httpStatus"], 502);
    assert_eq!(out["error"]["type"], "SAP_ERROR");
    assert_eq!(out["error"]["code"], "SAP_BACKEND_ERROR");
    assert_eq!(out["error"]["message"], "Backend unavailable");
    assert_eq!(out["error"]["retryable"], true);
    assert_eq!(out["error"]["correlationId"], "req-42");
}

#[test]
fn test_classify_plain_text_from_stdin() {
    let output = errlens_with_stdin(&["classify"], "connection refused\n");
    let out = stdout_json(&output);

    assert_eq!(out["httpStatus"], 500);
    assert_eq!(out["error"]["message"], "connection refused");
    assert_eq!(out["error"]["source"], "Runtime");
}

#[test]
fn test_classify_text_format() {
    let dir = TempDir::new().unwrap();
    let payload = json!({
        "errorMessage": {"error": {
            "errorDescription": "Invalid customer ID",
            "errorType": "VALIDATION_ERROR"
        }}
    });
    let path = write_payload(&dir, "raml.json", &payload.to_string());

    let output = errlens(&["classify", path.to_str().unwrap(), "--format", "text"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "400 RAML_ERROR [VALIDATION_ERROR] Invalid customer ID"
    );
}

#[test]
fn test_classify_with_hint() {
    let dir = TempDir::new().unwrap();
    let payload = json!({
        "errorMessage": {"error": {
            "errorDescription": "Invalid customer ID",
            "errorType": "VALIDATION_ERROR",
            "message": "Customer 12345 does not exist"
        }}
    });
    let path = write_payload(&dir, "overlap.json", &payload.to_string());

    let out = stdout_json(&errlens(&[
        "classify",
        path.to_str().unwrap(),
        "--hint",
        "gateway",
    ]));
    assert_eq!(out["httpStatus"], 400);
    assert_eq!(out["error"]["type"], "RAML_ERROR");
    assert_eq!(out["error"]["message"], "Invalid customer ID");

    let unregistered = stdout_json(&errlens(&[
        "classify",
        path.to_str().unwrap(),
        "--hint",
        "mainframe",
    ]));
    assert_eq!(unregistered["error"]["type"], "RAML_ERROR");
}

#[test]
fn test_classify_unrecognized_json_is_unknown() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, "odd.json", r#"{"status": 418}"#);

    let out = stdout_json(&errlens(&["classify", path.to_str().unwrap()]));
    assert_eq!(out["httpStatus"], 500);
    assert_eq!(out["error"]["type"], "UNKNOWN_ERROR");
    assert_eq!(out["error"]["message"], "Unknown error occurred");
}

#[test]
fn test_classify_missing_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let output = errlens(&["classify", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr was: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_shapes_lists_registry_in_order() {
    let output = errlens(&["shapes"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1))
        .collect();
    assert_eq!(ids, ["sap", "salesforce", "raml", "gateway", "generic"]);

    let listing = stdout_json(&errlens(&["shapes", "--format", "json"]));
    assert_eq!(listing[0]["type"], "SAP_ERROR");
    assert_eq!(listing[4]["source"], "Runtime");
    assert_eq!(
        listing[0]["message"]["paths"][0],
        "errorMessage.error.message.error.message.value"
    );
    assert_eq!(listing[0]["code"]["fallback"], "SAP_BACKEND_ERROR");
    assert_eq!(listing[1]["message"]["paths"][0], "errorMessage.payload[0].message");
    assert_eq!(listing[4]["message"]["paths"][0], "$");
}

#[test]
fn test_strict_hint_rejects_unregistered_shape() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, "plain.json", r#"{"message": "boom"}"#);

    let output = errlens(&[
        "classify",
        path.to_str().unwrap(),
        "--hint",
        "mainframe",
        "--strict-hint",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown shape id: mainframe"));
    assert!(output.stdout.is_empty());

    let accepted = stdout_json(&errlens(&[
        "classify",
        path.to_str().unwrap(),
        "--hint",
        "generic",
        "--strict-hint",
    ]));
    assert_eq!(accepted["error"]["message"], "boom");
}
