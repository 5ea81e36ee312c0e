//! End-to-end tests for the `uniqmap` binary.

use assert_cmd::Command;
use indoc::indoc;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run the binary from an empty directory so no stray config file is found
fn uniqmap(dir: &TempDir) -> Command {
    let mut cmd = Command::from_std(std::process::Command::new(env!("CARGO_BIN_EXE_uniqmap")));
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_dedupe_from_args() {
    let dir = TempDir::new().unwrap();
    uniqmap(&dir)
        .args(["dedupe", "--plain", "1", "2", "2", "3", "3", "4", "5", "5", "6"])
        .assert()
        .success()
        .stdout(indoc! {"
            Original:     [1, 2, 2, 3, 3, 4, 5, 5, 6]
            Deduplicated: [1, 2, 3, 4, 5, 6]
            removed 3 repeated values
        "});
}

#[test]
fn test_dedupe_from_stdin_as_json() {
    let dir = TempDir::new().unwrap();
    let output = uniqmap(&dir)
        .args(["dedupe", "--format", "json"])
        .write_stdin("[3, -1, 3, 7, -1]\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["unique"], serde_json::json!([3, -1, 7]));
    assert_eq!(value["removed"], serde_json::json!(2));
}

#[test]
fn test_dedupe_empty_stdin() {
    let dir = TempDir::new().unwrap();
    uniqmap(&dir)
        .args(["dedupe", "--plain"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deduplicated: []"));
}

#[test]
fn test_dedupe_rejects_invalid_element() {
    let dir = TempDir::new().unwrap();
    uniqmap(&dir)
        .args(["dedupe", "1", "two", "3"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("Invalid element \"two\" at position 2"));
}

#[test]
fn test_dedupe_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.md");
    uniqmap(&dir)
        .args(["dedupe", "--format", "markdown", "--output"])
        .arg(&out)
        .args(["4", "4"])
        .assert()
        .success()
        .stdout("");

    let markdown = std::fs::read_to_string(&out).unwrap();
    assert!(markdown.starts_with("# Dedupe Report"));
    assert!(markdown.contains("| Deduplicated | `[4]` | 1 |"));
}

#[test]
fn test_demo_renders_page() {
    let dir = TempDir::new().unwrap();
    uniqmap(&dir)
        .args(["demo", "--plain"])
        .assert()
        .success()
        .stdout(indoc! {"
            Hello, uniqmap!

            [*] Array dedupe demo
              Original:     [1, 2, 2, 3, 3, 4, 5, 5, 6]
              Deduplicated: [1, 2, 3, 4, 5, 6]

            [#] Counter demo
              Current count: 0
        "});
}

#[test]
fn test_demo_accepts_negative_values() {
    let dir = TempDir::new().unwrap();
    uniqmap(&dir)
        .args(["demo", "--plain", "--values", "-1,2,-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Original:     [-1, 2, -1]"))
        .stdout(predicate::str::contains("Deduplicated: [-1, 2]"));
}

#[test]
fn test_output_file_has_no_escape_codes() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("page.txt");
    uniqmap(&dir)
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .args(["demo", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    let page = std::fs::read_to_string(&out).unwrap();
    assert!(!page.contains('\u{1b}'));
    assert!(page.contains("[*] Array dedupe demo"));
}

#[test]
fn test_demo_interactive_counter() {
    let dir = TempDir::new().unwrap();
    let output = uniqmap(&dir)
        .args(["demo", "--interactive", "--format", "json"])
        .write_stdin("+\n+\nbogus\nreset\n+\nquit\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let counts: Vec<u64> = serde_json::Deserializer::from_str(&stdout)
        .into_iter::<serde_json::Value>()
        .map(|page| page.unwrap()["counter"]["count"].as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![0, 1, 2, 0, 1]);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Warning: Unknown action \"bogus\""));
}

#[test]
fn test_init_then_demo_uses_config() {
    let dir = TempDir::new().unwrap();
    uniqmap(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .uniqmap.toml"));

    uniqmap(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    std::fs::write(
        dir.path().join(".uniqmap.toml"),
        "[demo]\ntitle = \"Configured\"\nvalues = [2, 2, 9]\n\n[output]\nplain = true\n",
    )
    .unwrap();

    uniqmap(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Configured\n"))
        .stdout(predicate::str::contains("Deduplicated: [2, 9]"));
}
