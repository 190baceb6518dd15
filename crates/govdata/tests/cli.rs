//! End-to-end tests over the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn govdata() -> Command {
    Command::cargo_bin("govdata").unwrap()
}

#[test]
fn type_generates_module_beside_source() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("point.json"), r#"{"x": "3", "y": "abc"}"#).unwrap();

    govdata()
        .args([
            "type",
            "point.json",
            "--type-import",
            "./point.ts",
            "--type",
            "Point",
        ])
        .current_dir(dir.path())
        .assert()
        .success();

    let generated = std::fs::read_to_string(dir.path().join("point.auto.ts")).unwrap();
    assert!(generated.contains("export const instance: Point = {\n  x: 3,\n  y: \"abc\"\n};"));
}

#[test]
fn type_dry_run_reports_destination_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("point.json"), r#"{"x": 1}"#).unwrap();

    govdata()
        .args([
            "type",
            "point.json",
            "--type-import",
            "./point.ts",
            "--type",
            "Point",
            "--dry-run",
        ])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(contains("point.auto.ts"));

    assert!(!dir.path().join("point.auto.ts").exists());
}

#[test]
fn type_requires_its_options() {
    govdata()
        .args(["type", "*.json", "--type", "Point"])
        .assert()
        .failure();
}

#[test]
fn emit_renders_toml_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("cfg.json");
    std::fs::write(&src, r#"{"title": "demo", "count": 2}"#).unwrap();

    govdata()
        .args(["emit", src.to_str().unwrap(), "--format", "toml"])
        .assert()
        .success()
        .stdout(contains("title = \"demo\"").and(contains("count = 2")));
}

#[test]
fn emit_derives_bare_extension_destination() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("cfg.auto.json");
    std::fs::write(&src, r#"{"k": "v"}"#).unwrap();

    govdata()
        .args([
            "emit",
            src.to_str().unwrap(),
            "--format",
            "yaml",
            "--dest",
            ".yaml",
        ])
        .assert()
        .success();

    let out = std::fs::read_to_string(dir.path().join("cfg.auto.yaml")).unwrap();
    assert!(out.contains("k: v"));
}

#[test]
fn merge_combines_documents_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.json");
    let over = dir.path().join("over.json");
    std::fs::write(&base, r#"{"a": 1, "nested": {"x": 1}}"#).unwrap();
    std::fs::write(&over, r#"{"a": 2, "nested": {"y": 2}}"#).unwrap();

    govdata()
        .args(["merge", base.to_str().unwrap(), over.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("\"a\": 2").and(contains("\"x\": 1")).and(contains("\"y\": 2")));
}

#[test]
fn inspect_prints_embedded_record() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("point.json"), r#"{"x": 1}"#).unwrap();

    govdata()
        .args([
            "type",
            "point.json",
            "--type-import",
            "./point.ts",
            "--type",
            "Point",
        ])
        .current_dir(dir.path())
        .assert()
        .success();

    govdata()
        .args(["inspect", "point.auto.ts"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(contains("\"typeName\": \"Point\"").and(contains("point.json")));
}

#[test]
fn retype_regenerates_from_embedded_record() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("point.json"), r#"{"x": "3"}"#).unwrap();

    govdata()
        .args([
            "type",
            "point.json",
            "--type-import",
            "./point.ts",
            "--type",
            "Point",
        ])
        .current_dir(dir.path())
        .assert()
        .success();
    let first = std::fs::read_to_string(dir.path().join("point.auto.ts")).unwrap();

    govdata()
        .args(["retype", "point.auto.ts", "--overwrite"])
        .current_dir(dir.path())
        .assert()
        .success();
    let second = std::fs::read_to_string(dir.path().join("point.auto.ts")).unwrap();

    let instance = |text: &str| text.split("\nexport const retyper").next().unwrap().to_string();
    assert_eq!(instance(&first), instance(&second));
}
