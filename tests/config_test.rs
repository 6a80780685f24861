use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn monitor(state: &assert_fs::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("ethics-monitor");
    cmd.env_remove("ETHICS_MONITOR_API_URL")
        .args(["--state-dir", &state.path().to_string_lossy()]);
    cmd
}

#[test]
fn show_prints_defaults() {
    let state = assert_fs::TempDir::new().unwrap();

    monitor(&state)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8000"))
        .stdout(predicate::str::contains("not found, using defaults"))
        .stdout(predicate::str::contains("refresh.interval_secs         30"));
}

#[test]
fn file_values_are_used() {
    let state = assert_fs::TempDir::new().unwrap();
    state
        .child("config.toml")
        .write_str("[api]\nbase_url = \"http://monitor.internal:8001\"\n\n[pagination]\nlogs_page_size = 50\n")
        .unwrap();

    monitor(&state)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://monitor.internal:8001"))
        .stdout(predicate::str::contains("pagination.logs_page_size     50"));
}

#[test]
fn env_var_overrides_base_url() {
    let state = assert_fs::TempDir::new().unwrap();

    monitor(&state)
        .env("ETHICS_MONITOR_API_URL", "https://ethics.example.org")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://ethics.example.org"))
        .stdout(predicate::str::contains("overridden"));
}

#[test]
fn invalid_config_is_an_error() {
    let state = assert_fs::TempDir::new().unwrap();
    state
        .child("config.toml")
        .write_str("[refresh]\ninterval_secs = 0\n")
        .unwrap();

    monitor(&state)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn bad_api_url_is_rejected() {
    let state = assert_fs::TempDir::new().unwrap();

    monitor(&state)
        .args(["--api-url", "localhost:8000", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must start with http"));
}
