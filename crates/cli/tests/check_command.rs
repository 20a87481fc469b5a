use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn pmt(xdg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pmt"));
    cmd.env("XDG_CONFIG_HOME", xdg);
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_post(dir: &Path, name: &str, title: &str, slug: &str) {
    fs::write(dir.join(name), format!("---\ntitle: \"{title}\"\nslug: \"{slug}\"\n---\n\nBody")).unwrap();
}

#[test]
fn clean_directory_passes() {
    let tmp = tempdir().unwrap();
    let posts = tmp.path().join("posts");
    fs::create_dir_all(&posts).unwrap();
    write_post(&posts, "a.md", "A", "a");
    write_post(&posts, "b.md", "B", "b");

    pmt(tmp.path())
        .arg("check")
        .arg(&posts)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "checked 2 posts: 0 invalid, 0 legacy, 0 duplicate slugs",
        ));
}

#[test]
fn reports_invalid_legacy_and_duplicates() {
    let tmp = tempdir().unwrap();
    let posts = tmp.path().join("posts");
    fs::create_dir_all(posts.join("nested")).unwrap();
    write_post(&posts, "one.md", "One", "same");
    write_post(&posts.join("nested"), "two.md", "Two", "same");
    fs::write(posts.join("broken.md"), "---\ntitle: \"Broken\"\n---\nBody").unwrap();
    fs::write(posts.join("old.md"), "# Legacy post").unwrap();
    fs::write(posts.join("notes.txt"), "ignored").unwrap();

    pmt(tmp.path())
        .arg("check")
        .arg(&posts)
        .assert()
        .failure()
        .stdout(predicate::str::contains("broken.md"))
        .stdout(predicate::str::contains("slug: Required"))
        .stdout(predicate::str::contains("duplicate slug 'same'"))
        .stdout(predicate::str::contains("no frontmatter (legacy post)"))
        .stdout(predicate::str::contains(
            "checked 4 posts: 1 invalid, 1 legacy, 1 duplicate slugs",
        ));
}

#[test]
fn legacy_posts_alone_do_not_fail() {
    let tmp = tempdir().unwrap();
    let posts = tmp.path().join("posts");
    fs::create_dir_all(&posts).unwrap();
    fs::write(posts.join("old.md"), "Just text").unwrap();

    pmt(tmp.path()).arg("check").arg(&posts).assert().success();
}

#[test]
fn check_json_report() {
    let tmp = tempdir().unwrap();
    let posts = tmp.path().join("posts");
    fs::create_dir_all(&posts).unwrap();
    write_post(&posts, "a.md", "A", "dup");
    write_post(&posts, "b.md", "B", "dup");

    let output = pmt(tmp.path()).args(["check", "--json"]).arg(&posts).output().unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["checked"], 2);
    assert_eq!(json["duplicate_slugs"][0]["slug"], "dup");
    assert_eq!(json["duplicate_slugs"][0]["paths"], serde_json::json!(["a.md", "b.md"]));
}

#[test]
fn uses_posts_dir_from_config() {
    let tmp = tempdir().unwrap();
    let posts = tmp.path().join("posts");
    fs::create_dir_all(&posts).unwrap();
    write_post(&posts, "a.md", "A", "a");

    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, format!("version = 1\n[posts]\ndir = \"{}\"\n", posts.display())).unwrap();

    pmt(tmp.path())
        .args(["--config", cfg.to_str().unwrap(), "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checked 1 posts"));
}

#[test]
fn no_directory_is_an_error() {
    let tmp = tempdir().unwrap();
    pmt(tmp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no posts directory given"));
}
