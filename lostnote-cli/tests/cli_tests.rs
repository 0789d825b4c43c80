//! Integration tests for the Lost Note CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Write a small content file for testing
fn create_test_content(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("read"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lostnote"));
}

#[test]
fn test_export_help() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["export", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Export every page"))
        .stdout(predicate::str::contains("--output-dir"))
        .stdout(predicate::str::contains("--jobs"));
}

#[test]
fn test_info_bundled_story() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Little Lost Note"))
        .stdout(predicate::str::contains("Pages:       21"))
        .stdout(predicate::str::contains("multi-image"));
}

#[test]
fn test_info_json() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    let output = cmd.args(["info", "--json"]).output().unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["pages"], 21);
    assert_eq!(info["sheet_music_pages"], 2);
    assert_eq!(info["layouts"]["text-only"], 1);
}

#[test]
fn test_validate_bundled_story_strict() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["validate", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid story content"));
}

#[test]
fn test_validate_warnings_fail_only_in_strict_mode() {
    let temp_dir = TempDir::new().unwrap();
    let content = create_test_content(
        &temp_dir,
        "story.json",
        r#"[{"id": 1, "type": "story", "layout": "full-image", "imageSrc": "/a.png", "audioSrc": "/a.mp3"}]"#,
    );

    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["validate", "--content", content.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("audioSrc is ignored"));

    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["validate", "--strict", "--content", content.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_validate_duplicate_ids() {
    let temp_dir = TempDir::new().unwrap();
    let content = create_test_content(
        &temp_dir,
        "story.json",
        r#"[{"id": 1, "type": "story", "content": ["a"]}, {"id": 1, "type": "story", "content": ["b"]}]"#,
    );

    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["validate", "--content", content.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate page id: 1"));
}

#[test]
fn test_invalid_content_is_refused_outside_validate() {
    let temp_dir = TempDir::new().unwrap();
    let content = create_test_content(
        &temp_dir,
        "story.json",
        r#"[{"id": 1, "type": "story", "content": ["a"]}, {"id": 1, "type": "story", "content": ["b"]}]"#,
    );
    let path = content.to_str().unwrap();
    let out = temp_dir.path().join("out");

    let runs: Vec<Vec<&str>> = vec![
        vec!["render", "1", "--content", path],
        vec!["info", "--content", path],
        vec![
            "export",
            "--output-dir",
            out.to_str().unwrap(),
            "--content",
            path,
        ],
    ];
    for args in runs {
        let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
        cmd.args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Duplicate page id: 1"));
    }

    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["read", "--content", path])
        .write_stdin("n\nq\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid story content"));
    assert!(!out.exists());
}

#[test]
fn test_image_left_without_source_is_refused() {
    let temp_dir = TempDir::new().unwrap();
    let content = create_test_content(
        &temp_dir,
        "story.json",
        r#"[{"id": 1, "type": "story", "layout": "image-left", "content": ["a"]}]"#,
    );

    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["render", "1", "--content", content.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field"));
}

#[test]
fn test_validate_nonexistent_file() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["validate", "--content", "/nonexistent/story.json"])
        .assert()
        .failure();
}

#[test]
fn test_render_text_to_stdout() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["render", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("There once was a Little Lost Note."))
        .stdout(predicate::str::contains(
            "[image: Little Lost Note sitting on staff crying]",
        ));
}

#[test]
fn test_render_json() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    let output = cmd.args(["render", "2", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["kind"], "column");
    assert_eq!(tree["children"][0]["style"], "note");
}

#[test]
fn test_render_html_file_is_a_document() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("page.html");

    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args([
        "render",
        "1",
        "--format",
        "html",
        "--output",
        output.to_str().unwrap(),
    ])
    .assert()
    .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("/assets/logo.png"));
}

#[test]
fn test_render_unsupported_format() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["render", "1", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No encoder available"));
}

#[test]
fn test_export_all_pages() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args([
        "export",
        "--output-dir",
        out.to_str().unwrap(),
        "--format",
        "text",
        "--jobs",
        "2",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Success: 21"));

    assert_eq!(fs::read_dir(&out).unwrap().count(), 21);
    assert!(out.join("page-01.txt").exists());
    assert!(out.join("page-21.txt").exists());
}

#[test]
fn test_export_invalid_jobs() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["export", "--output-dir", "/some/output/dir", "--jobs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_export_missing_output_dir() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output-dir"));
}

#[test]
fn test_read_session_from_stdin() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.arg("read")
        .write_stdin("n\nnext\nclick 100 1000\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 / 21"))
        .stdout(predicate::str::contains("3 / 21"))
        .stdout(predicate::str::contains("2 / 21"));
}

#[test]
fn test_read_stops_at_last_page() {
    let temp_dir = TempDir::new().unwrap();
    let content = create_test_content(
        &temp_dir,
        "story.json",
        r#"[{"id": 1, "type": "title", "layout": "text-only", "content": ["Start"]},
            {"id": 2, "type": "end", "layout": "text-only", "content": ["Finish"]}]"#,
    );

    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["read", "--content", content.to_str().unwrap()])
        .write_stdin("n\nn\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Finish"))
        .stdout(predicate::str::contains("3 / 2").not());
}

#[test]
fn test_read_about_overlay() {
    let mut cmd = Command::cargo_bin("lostnote-cli").unwrap();
    cmd.args(["read", "--show-about"])
        .write_stdin("about\nesc\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("About Little Lost Note"));
}
