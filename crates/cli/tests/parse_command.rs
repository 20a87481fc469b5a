use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn pmt(xdg: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pmt"));
    cmd.env("XDG_CONFIG_HOME", xdg);
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn parse_prints_metadata_table() {
    let tmp = tempdir().unwrap();
    let post = tmp.path().join("hello.md");
    fs::write(
        &post,
        "---\ntitle: \"Hello World\"\nslug: \"hello-world\"\nkeywords: [\"rust\", \"cli\"]\nstatus: PUBLISHED\npublishedAt: \"2025-01-15\"\n---\n\n# Hello",
    )
    .unwrap();

    pmt(tmp.path())
        .arg("parse")
        .arg(&post)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello World"))
        .stdout(predicate::str::contains("hello-world"))
        .stdout(predicate::str::contains("rust, cli"))
        .stdout(predicate::str::contains("PUBLISHED"))
        .stdout(predicate::str::contains("2025-01-15 00:00 UTC"));
}

#[test]
fn parse_json_output() {
    let tmp = tempdir().unwrap();
    let post = tmp.path().join("hello.md");
    fs::write(&post, "---\ntitle: \"T\"\nslug: \"t\"\n---\nBody text").unwrap();

    let output = pmt(tmp.path()).args(["parse", "--json"]).arg(&post).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["meta"]["title"], "T");
    assert_eq!(json["meta"]["slug"], "t");
    assert_eq!(json["meta"]["status"], "DRAFT");
    assert_eq!(json["meta"]["keywords"], serde_json::json!([]));
    assert_eq!(json["content"], "Body text");
}

#[test]
fn parse_legacy_document_succeeds_with_defaults() {
    let tmp = tempdir().unwrap();
    let post = tmp.path().join("legacy.md");
    fs::write(&post, "\n# Old post\n\nNo metadata here.\n").unwrap();

    let output = pmt(tmp.path()).args(["parse", "--json"]).arg(&post).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["meta"]["title"], "");
    assert_eq!(json["content"], "# Old post\n\nNo metadata here.");
}

#[test]
fn parse_failure_lists_every_violation() {
    let tmp = tempdir().unwrap();
    let post = tmp.path().join("bad.md");
    fs::write(&post, "---\ntitle: \"\"\nslug: \"Not A Slug\"\nstatus: LIVE\n---\nBody").unwrap();

    pmt(tmp.path())
        .arg("parse")
        .arg(&post)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid frontmatter in"))
        .stderr(predicate::str::contains("  - title: Title is required"))
        .stderr(predicate::str::contains(
            "  - slug: Slug must be lowercase with hyphens (e.g. my-post-title)",
        ))
        .stderr(predicate::str::contains("  - status: Invalid enum value."));
}

#[test]
fn parse_failure_as_json() {
    let tmp = tempdir().unwrap();
    let post = tmp.path().join("empty-block.md");
    fs::write(&post, "---\n---\nBody").unwrap();

    let output = pmt(tmp.path()).args(["parse", "--json"]).arg(&post).output().unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "slug"]);
}

#[test]
fn parse_missing_file_fails() {
    let tmp = tempdir().unwrap();
    pmt(tmp.path())
        .arg("parse")
        .arg(tmp.path().join("nope.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}
