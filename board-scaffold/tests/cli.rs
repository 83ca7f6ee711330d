//! End-to-end tests for the `create-feature` binary.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_create-feature"))
        .args(args)
        .output()
        .expect("failed to run create-feature")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Usage: create-feature <feature-name> <package-path>"));
    assert!(out.contains("Example: create-feature array-element packages/canvas"));
}

#[test]
fn missing_package_path_fails() {
    let output = run(&["array-element"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn creates_feature_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let package = dir.path().join("packages/canvas");

    let output = run(&["array-element", package.to_str().expect("utf8 path")]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).contains("Created feature: array-element"));

    let feature = package.join("src/features/array-element");
    for file in [
        "ArrayElement.tsx",
        "array-element.types.ts",
        "__tests__/ArrayElement.test.tsx",
    ] {
        assert!(feature.join(file).is_file(), "missing {file}");
    }
}

#[test]
fn extra_arguments_are_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = run(&[
        "stack",
        dir.path().to_str().expect("utf8 path"),
        "extra",
        "--verbose",
    ]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout(&output).contains("Created feature: stack"));
    assert!(dir.path().join("src/features/stack/Stack.tsx").is_file());
}

#[test]
fn filesystem_error_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("canvas");
    std::fs::write(&blocker, "file, not a directory").expect("write blocker");

    let output = run(&["array-element", blocker.to_str().expect("utf8 path")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error creating feature"));
}

#[test]
fn invalid_name_fails() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = run(&["Array_Element", dir.path().to_str().expect("utf8 path")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid feature name"));
}
