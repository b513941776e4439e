use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's config, pointed at a closed port
fn fintrack(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_CONFIG_DIR", config_dir.path())
        .env("FINTRACK_API_URL", "http://127.0.0.1:9")
        .env_remove("FINTRACK_ACCESS_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("credit-card"))
        .stdout(predicate::str::contains("secrets"));
}

#[test]
fn test_secrets_prints_three_env_lines() {
    let dir = TempDir::new().unwrap();
    let output = fintrack(&dir).arg("secrets").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("JWT_SECRET="));
    assert!(lines[1].starts_with("JWT_REFRESH_SECRET="));
    assert!(lines[2].starts_with("SESSION_SECRET="));
    // 32 bytes of base64 is 44 characters
    assert_eq!(lines[0].len(), "JWT_SECRET=".len() + 44);
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:9"))
        .stdout(predicate::str::contains("Signed in:       no"));
}

#[test]
fn test_invalid_due_day_is_rejected_before_any_request() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["credit-card", "add", "Travel", "--limit", "1000", "--due", "32"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Due date must be a day of the month (1-31)",
        ));
}

#[test]
fn test_export_requires_sign_in() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not authenticated"));
}

#[test]
fn test_bad_period_is_rejected() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["dashboard", "--period", "fortnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period 'fortnight'"));
}
