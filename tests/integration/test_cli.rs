use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const NOW: &str = "2026-02-15T10:00:00Z";

const HISTORY: &str = r#"[
    {"url": "https://www.rust-lang.org/", "title": "Rust Programming Language", "last_accessed": "2026-02-15T07:00:00Z"},
    {"url": "https://doc.rust-lang.org/book/", "title": "The Rust Programming Language", "last_accessed": "2026-02-13T10:00:00Z"},
    {"url": "https://python.org/", "title": "Welcome to Python.org", "last_accessed": "2026-02-15T09:00:00Z"}
]"#;

fn histrank(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("histrank").unwrap();
    cmd.env("HOME", home).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_rank_plain_output() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("history.json");
    fs::write(&input, HISTORY).unwrap();

    histrank(home.path())
        .args(["rank", "rust", "--now", NOW, "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Rust Programming Language"))
        .stdout(predicate::str::contains("https://doc.rust-lang.org/book/"))
        .stdout(predicate::str::contains("python.org").not());
}

#[test]
fn test_rank_json_with_limit() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("history.json");
    fs::write(&input, HISTORY).unwrap();

    let output = histrank(home.path())
        .args(["rank", "rust", "--json", "--limit", "1", "--now", NOW, "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["url"], "https://www.rust-lang.org/");
}

#[test]
fn test_rank_reads_stdin() {
    let home = tempfile::tempdir().unwrap();

    histrank(home.path())
        .args(["rank", "Python", "--json", "--now", NOW, "--input", "-"])
        .write_stdin(HISTORY)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://python.org/"))
        .stdout(predicate::str::contains("rust-lang").not());
}

#[test]
fn test_rank_glob_input() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("exports");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("a.json"), HISTORY).unwrap();
    fs::write(dir.join("b.json"), HISTORY).unwrap();
    let pattern = dir.join("*.json").to_string_lossy().to_string();

    let output = histrank(home.path())
        .args(["rank", "book", "--json", "--now", NOW, "--input", &pattern])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn test_rank_no_results() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("history.json");
    fs::write(&input, HISTORY).unwrap();

    histrank(home.path())
        .args(["rank", "haskell", "--now", NOW, "--input"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("No entries matching"));
}

#[test]
fn test_rank_rejects_bad_timestamp() {
    let home = tempfile::tempdir().unwrap();

    histrank(home.path())
        .args(["rank", "rust", "--now", "yesterday", "--input", "-"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid RFC 3339 timestamp"));
}

#[test]
fn test_explain_breakdown() {
    let home = tempfile::tempdir().unwrap();

    histrank(home.path())
        .args([
            "explain",
            "stack",
            "http://stackoverflow.com",
            "--title",
            "Stack Overflow",
            "--now",
            NOW,
            "--last-accessed",
            NOW,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("matches: true"))
        .stdout(predicate::str::contains("url: score 2 matched 5/24"))
        .stdout(predicate::str::contains("title: score 3 matched 5/14"))
        .stdout(predicate::str::contains("recency: 0.6667"));
}

#[test]
fn test_config_uses_file_settings() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".histrank");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "max_results = 1\n").unwrap();
    let input = home.path().join("history.json");
    fs::write(&input, HISTORY).unwrap();

    let output = histrank(home.path())
        .args(["rank", "rust", "--json", "--now", NOW, "--input"])
        .arg(&input)
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[test]
fn test_config_command_creates_default() {
    let home = tempfile::tempdir().unwrap();

    histrank(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("recency_window_days = 30.0"));

    assert!(home.path().join(".histrank").join("config.toml").exists());
}
