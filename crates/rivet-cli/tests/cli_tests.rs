//! CLI Integration Tests
//!
//! Exercises the rivet binary end-to-end:
//! - validate-manifest output and exit codes
//! - append-decision log format and idempotent newline handling
//! - fatal-error reporting at the process boundary

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn rivet_cmd() -> Command {
    Command::cargo_bin("rivet").unwrap()
}

const FULL_MANIFEST: &str = r#"
schema: permission-manifest/v0.1
name: example
version: 0.1.0
permissions:
  filesystem:
    - path: /tmp
      mode: read
  network:
    - host: api.example.com
      ports: [443]
  secrets:
    - name: EXAMPLE_KEY
  processes:
    - name: bash
"#;

// ══════════════════════════════════════════════════════════════════════════════
// VALIDATE-MANIFEST WORKFLOW TESTS
// ══════════════════════════════════════════════════════════════════════════════

mod validate_workflow {
    use super::*;

    #[test]
    fn test_valid_manifest_prints_valid() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("m.yaml");
        fs::write(&file, FULL_MANIFEST).unwrap();

        rivet_cmd()
            .arg("validate-manifest")
            .arg(&file)
            .assert()
            .success()
            .stdout(predicate::str::contains("VALID"));
    }

    #[test]
    fn test_valid_json_manifest() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("m.json");
        fs::write(
            &file,
            r#"{
  "schema": "permission-manifest/v0.1",
  "name": "example",
  "version": "0.1.0",
  "permissions": {"secrets": [{"name": "EXAMPLE_KEY"}]}
}"#,
        )
        .unwrap();

        rivet_cmd()
            .arg("validate-manifest")
            .arg(&file)
            .assert()
            .success()
            .stdout(predicate::str::contains("VALID"));
    }

    #[test]
    fn test_empty_permissions_exits_one_with_invalid_line() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("m.yaml");
        fs::write(
            &file,
            "schema: permission-manifest/v0.1\nname: example\nversion: 0.1.0\npermissions: {}\n",
        )
        .unwrap();

        rivet_cmd()
            .arg("validate-manifest")
            .arg(&file)
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "INVALID: permissions must declare at least one of filesystem/network/secrets/processes",
            ))
            .stdout(predicate::str::contains("VALID").not());
    }

    #[test]
    fn test_each_finding_gets_its_own_invalid_line() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("m.yaml");
        fs::write(
            &file,
            r#"
schema: s
name: n
version: v
permissions:
  filesystem:
    - mode: execute
  network:
    - ports: [80, "x"]
"#,
        )
        .unwrap();

        rivet_cmd()
            .arg("validate-manifest")
            .arg(&file)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("INVALID: filesystem[0] missing path"))
            .stderr(predicate::str::contains(
                "INVALID: filesystem[0] mode must be read|read-write",
            ))
            .stderr(predicate::str::contains("INVALID: network[0] missing host"))
            .stderr(predicate::str::contains(
                "INVALID: network[0] ports must be a list of ints",
            ));
    }

    #[test]
    fn test_undecodable_manifest_reports_single_error_line() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("m.yaml");
        fs::write(&file, "permissions: [unclosed\n").unwrap();

        rivet_cmd()
            .arg("validate-manifest")
            .arg(&file)
            .assert()
            .code(1)
            .stderr(predicate::str::starts_with("error: "))
            .stderr(predicate::str::contains("INVALID").not());
    }

    #[test]
    fn test_missing_manifest_file_is_fatal() {
        rivet_cmd()
            .arg("validate-manifest")
            .arg("no-such-manifest.yaml")
            .assert()
            .code(1)
            .stderr(predicate::str::starts_with("error: "))
            .stderr(predicate::str::contains("no-such-manifest.yaml"));
    }

    #[test]
    fn test_json_report_for_valid_manifest() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("m.yaml");
        fs::write(&file, FULL_MANIFEST).unwrap();

        rivet_cmd()
            .arg("validate-manifest")
            .arg(&file)
            .arg("--json")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"valid\":true"));
    }

    #[test]
    fn test_json_report_for_invalid_manifest() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("m.yaml");
        fs::write(&file, "schema: s\nname: n\nversion: v\npermissions: {}\n").unwrap();

        rivet_cmd()
            .arg("validate-manifest")
            .arg(&file)
            .arg("--json")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("\"valid\":false"))
            .stdout(predicate::str::contains(
                "permissions must declare at least one of",
            ));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// APPEND-DECISION WORKFLOW TESTS
// ══════════════════════════════════════════════════════════════════════════════

mod append_workflow {
    use super::*;

    #[test]
    fn test_append_with_explicit_when() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("logs/2026-01-31.md");

        rivet_cmd()
            .args(["append-decision", "--log"])
            .arg(&log)
            .args(["--what", "test what"])
            .args(["--why", "test why"])
            .args(["--lesson", "test lesson"])
            .args(["--when", "2026-01-31T00:00:00Z"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Appended to"));

        let content = fs::read_to_string(&log).unwrap();
        assert_eq!(
            content,
            "- when: 2026-01-31T00:00:00Z\n\
             \x20 what: test what\n\
             \x20 why: test why\n\
             \x20 lesson: test lesson\n"
        );
    }

    #[test]
    fn test_append_twice_keeps_one_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("decisions.md");

        for _ in 0..2 {
            rivet_cmd()
                .args(["append-decision", "--log"])
                .arg(&log)
                .args(["--what", "w", "--why", "y", "--when", "2026-01-31T00:00:00Z"])
                .assert()
                .success();
        }

        let content = fs::read_to_string(&log).unwrap();
        assert_eq!(content.matches("- when:").count(), 2);
        assert!(content.ends_with('\n'));
        assert!(!content.contains("\n\n"));
    }

    #[test]
    fn test_append_without_lesson_renders_empty_lesson() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("decisions.md");

        rivet_cmd()
            .args(["append-decision", "--log"])
            .arg(&log)
            .args(["--what", "w", "--why", "y"])
            .assert()
            .success();

        let content = fs::read_to_string(&log).unwrap();
        assert!(content.contains("  lesson: \n"));
    }

    #[test]
    fn test_append_defaults_when_to_utc_now() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("decisions.md");

        rivet_cmd()
            .args(["append-decision", "--log"])
            .arg(&log)
            .args(["--what", "w", "--why", "y"])
            .assert()
            .success();

        let content = fs::read_to_string(&log).unwrap();
        let when_line = content.lines().next().unwrap();
        assert!(when_line.starts_with("- when: 20"));
        assert!(when_line.ends_with('Z'));
        assert!(!when_line.contains('.'));
    }

    #[test]
    fn test_append_to_unwritable_path_is_fatal() {
        let dir = TempDir::new().unwrap();

        // The log path is an existing directory
        rivet_cmd()
            .args(["append-decision", "--log"])
            .arg(dir.path())
            .args(["--what", "w", "--why", "y"])
            .assert()
            .code(1)
            .stderr(predicate::str::starts_with("error: "));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// MISC CLI TESTS
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_completions_bash() {
    rivet_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rivet"));
}

#[test]
fn test_unknown_subcommand_fails() {
    rivet_cmd().arg("enforce-manifest").assert().failure();
}
