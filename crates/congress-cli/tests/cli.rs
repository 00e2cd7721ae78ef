use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONGRESS_ENV: &[&str] = &[
    "CONGRESS_API_KEY",
    "CONGRESS_API_BASE_URL",
    "CONGRESS_DEFAULT_LIMIT",
    "CONGRESS_MAX_LIMIT",
    "CONGRESS_TIMEOUT",
    "CONGRESS_MAX_RETRIES",
    "CONGRESS_RETRY_BASE_DELAY",
];

/// Binary with a private settings directory and no Congress variables set
fn congress_cli(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("congress-cli").expect("binary should build");
    for var in CONGRESS_ENV {
        cmd.env_remove(var);
    }
    cmd.arg("--config-dir").arg(config_dir.path());
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().expect("tempdir");
    congress_cli(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bill"))
        .stdout(predicate::str::contains("member"))
        .stdout(predicate::str::contains("nomination"))
        .stdout(predicate::str::contains("crs-report"))
        .stdout(predicate::str::contains("house-requirement"))
        .stdout(predicate::str::contains("CONGRESS_API_KEY"));
}

#[test]
fn test_info_works_without_api_key() {
    let dir = TempDir::new().expect("tempdir");
    congress_cli(&dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("5,000 requests per hour"))
        .stdout(predicate::str::contains("https://api.congress.gov/v3"))
        .stdout(predicate::str::contains("recent_congresses"));
}

#[test]
fn test_info_enums() {
    let dir = TempDir::new().expect("tempdir");
    congress_cli(&dir)
        .args(["info", "--enums"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hjres"))
        .stdout(predicate::str::contains("suamdt"));
}

#[test]
fn test_api_command_without_key_fails_with_hint() {
    let dir = TempDir::new().expect("tempdir");
    congress_cli(&dir)
        .args(["bill", "list", "118"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CONGRESS_API_KEY"))
        .stderr(predicate::str::contains("https://api.congress.gov/sign-up/"));
}

#[test]
fn test_invalid_bill_type_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    congress_cli(&dir)
        .args(["--api-key", "test_key", "--format", "json"])
        .env("CONGRESS_API_BASE_URL", "http://127.0.0.1:9")
        .args(["bill", "get", "118", "xx", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Must be one of"));
}

#[test]
fn test_config_show_defaults() {
    let dir = TempDir::new().expect("tempdir");
    congress_cli(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API Key: Not set"))
        .stdout(predicate::str::contains("max_retries: 3 (default)"))
        .stdout(predicate::str::contains("default_limit: 20 (default)"));
}

#[test]
fn test_config_set_then_show() {
    let dir = TempDir::new().expect("tempdir");
    congress_cli(&dir)
        .args(["config", "set", "--max-retries", "5", "--retry-base-delay", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved successfully."));

    assert!(dir.path().join("config.toml").exists());

    congress_cli(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_retries: 5 (settings file)"))
        .stdout(predicate::str::contains("retry_base_delay_secs: 2 (settings file)"));

    congress_cli(&dir)
        .args(["config", "show"])
        .env("CONGRESS_MAX_RETRIES", "7")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_retries: 7 (env)"));
}

#[test]
fn test_config_set_requires_a_value() {
    let dir = TempDir::new().expect("tempdir");
    congress_cli(&dir)
        .args(["config", "set"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No configuration values provided"));
}

#[test]
fn test_config_show_masks_api_key() {
    let dir = TempDir::new().expect("tempdir");
    congress_cli(&dir)
        .args(["config", "show"])
        .env("CONGRESS_API_KEY", "abcd1234efgh5678")
        .assert()
        .success()
        .stdout(predicate::str::contains("abcd...5678"))
        .stdout(predicate::str::contains("abcd1234efgh5678").not());
}

#[test]
fn test_communication_type_checked_per_chamber() {
    let dir = TempDir::new().expect("tempdir");
    congress_cli(&dir)
        .env("CONGRESS_API_KEY", "test_key")
        .env("CONGRESS_API_BASE_URL", "http://127.0.0.1:9")
        .args(["communication", "list", "118", "house", "pom"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ec, pm, pt, ml"));
}

#[test]
fn test_bound_record_day_requires_month() {
    let dir = TempDir::new().expect("tempdir");
    congress_cli(&dir)
        .env("CONGRESS_API_KEY", "test_key")
        .args(["record", "bound", "--year", "2023", "--day", "14"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--month"));
}
