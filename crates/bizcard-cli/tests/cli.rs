//! Command-line behavior of the `bizcard` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CARD: &str = "Jane Doe\nSenior Engineer\nAcme Corp\n555-123-4567\njane@acme.com\n123 Main St\nSpringfield, IL 62704\n";

/// A `bizcard` command isolated from the user's real config directory.
fn bizcard(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bizcard").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

#[test]
fn parse_file_as_json() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("card.txt");
    fs::write(&input, CARD).unwrap();

    let output = bizcard(home.path())
        .args(["parse", input.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["title"], "Senior Engineer");
    assert_eq!(json["company"], "Acme Corp");
    assert_eq!(json["phone"], "5551234567");
    assert_eq!(json["email"], "jane@acme.com");
    assert_eq!(json["address"], "123 Main St Springfield, IL 62704");
    assert!(json["created_at"].is_string());
}

#[test]
fn parse_stdin_as_text() {
    let home = TempDir::new().unwrap();

    bizcard(home.path())
        .args(["parse", "-", "--format", "text"])
        .write_stdin(CARD)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:    Jane Doe"))
        .stdout(predicate::str::contains("Email:   jane@acme.com"));
}

#[test]
fn parse_as_csv_row() {
    let home = TempDir::new().unwrap();

    bizcard(home.path())
        .args(["parse", "-", "--format", "csv"])
        .write_stdin(CARD)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Name,Title,Company,Phone,Email,Address,Date Added\n",
        ))
        .stdout(predicate::str::contains(
            "Jane Doe,Senior Engineer,Acme Corp,5551234567,jane@acme.com,\"123 Main St Springfield, IL 62704\",",
        ));
}

#[test]
fn parse_explain_and_validate_write_to_stderr() {
    let home = TempDir::new().unwrap();

    bizcard(home.path())
        .args(["parse", "-", "--explain", "--validate"])
        .write_stdin("CEO\ninfo@acme.com")
        .assert()
        .success()
        .stderr(predicate::str::contains("title"))
        .stderr(predicate::str::contains("Contact name is required"));
}

#[test]
fn parse_empty_input_succeeds_with_empty_fields() {
    let home = TempDir::new().unwrap();

    let output = bizcard(home.path())
        .args(["parse", "-"])
        .write_stdin("")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for field in ["name", "title", "company", "phone", "email", "address"] {
        assert_eq!(json[field], "", "field {}", field);
    }
}

#[test]
fn parse_missing_file_fails() {
    let home = TempDir::new().unwrap();

    bizcard(home.path())
        .args(["parse", "/nonexistent/card.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn parse_uses_explicit_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.json");
    fs::write(&config, r#"{ "parser": { "address_separator": ", " } }"#).unwrap();

    bizcard(home.path())
        .args(["--config", config.to_str().unwrap(), "parse", "-"])
        .write_stdin(CARD)
        .assert()
        .success()
        .stdout(predicate::str::contains("123 Main St, Springfield, IL 62704"));
}

#[test]
fn batch_writes_sheet_and_outputs() {
    let home = TempDir::new().unwrap();
    let cards = home.path().join("cards");
    fs::create_dir_all(&cards).unwrap();
    fs::write(cards.join("a.txt"), CARD).unwrap();
    fs::write(cards.join("b.txt"), "John Smith\nCTO\nGlobex LLC\njohn@globex.com\n").unwrap();
    fs::write(cards.join("ignored.md"), "Not a card").unwrap();

    let out_dir = home.path().join("out");
    let sheet = home.path().join("contacts.csv");
    let pattern = format!("{}/*", cards.display());

    bizcard(home.path())
        .args([
            "batch",
            &pattern,
            "--output-dir",
            out_dir.to_str().unwrap(),
            "--sheet",
            sheet.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"))
        .stdout(predicate::str::contains("2 successful"));

    assert!(out_dir.join("a.json").exists());
    assert!(out_dir.join("b.json").exists());

    let content = fs::read_to_string(&sheet).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Name,Title,Company,Phone,Email,Address,Date Added");
    assert!(lines[1].starts_with("Jane Doe,"));
    assert!(lines[2].starts_with("John Smith,CTO,Globex LLC,,john@globex.com,,"));
}

#[test]
fn batch_without_matches_fails() {
    let home = TempDir::new().unwrap();
    let pattern = format!("{}/*.txt", home.path().display());

    bizcard(home.path())
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files found"));
}

#[test]
fn config_init_get_and_set() {
    let home = TempDir::new().unwrap();

    bizcard(home.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(home.path().join("bizcard").join("config.json").exists());

    bizcard(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    bizcard(home.path())
        .args(["config", "get", "parser.min_phone_digits"])
        .assert()
        .success()
        .stdout(predicate::str::diff("7\n"));

    bizcard(home.path())
        .args(["config", "set", "parser.min_phone_digits", "10"])
        .assert()
        .success();

    bizcard(home.path())
        .args(["config", "get", "parser.min_phone_digits"])
        .assert()
        .success()
        .stdout(predicate::str::diff("10\n"));
}

#[test]
fn config_set_rejects_invalid_values() {
    let home = TempDir::new().unwrap();

    bizcard(home.path())
        .args(["config", "set", "parser.min_phone_digits", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_phone_digits"));

    bizcard(home.path())
        .args(["config", "set", "parser.no_such_key", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));

    assert!(!home.path().join("bizcard").join("config.json").exists());
}

#[test]
fn config_path_reports_missing_file() {
    let home = TempDir::new().unwrap();

    bizcard(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created"));
}

#[test]
fn config_commands_follow_global_config_flag() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("team").join("bizcard.json");
    let custom_arg = custom.to_str().unwrap();

    bizcard(home.path())
        .args(["--config", custom_arg, "config", "set", "parser.address_separator", ", "])
        .assert()
        .success();
    assert!(custom.exists());
    assert!(!home.path().join("bizcard").join("config.json").exists());

    bizcard(home.path())
        .args(["--config", custom_arg, "config", "get", "parser.address_separator"])
        .assert()
        .success()
        .stdout(predicate::str::diff("\", \"\n"));

    bizcard(home.path())
        .args(["--config", custom_arg, "parse", "-"])
        .write_stdin(CARD)
        .assert()
        .success()
        .stdout(predicate::str::contains("123 Main St, Springfield, IL 62704"));
}
