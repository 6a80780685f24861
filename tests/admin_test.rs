use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

fn monitor(state: &assert_fs::TempDir, server: &MockServer) -> Command {
    let mut cmd = cargo_bin_cmd!("ethics-monitor");
    cmd.env_remove("ETHICS_MONITOR_API_URL")
        .env_remove("RUST_LOG")
        .args(["--state-dir", &state.path().to_string_lossy()])
        .args(["--api-url", &server.base_url()]);
    cmd
}

fn sign_in(state: &assert_fs::TempDir, server: &MockServer, role: &str) {
    server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200).json_body(json!({"access_token": "tok-a"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/users/me");
        then.status(200).json_body(json!({
            "id": 7, "username": "zeynep", "email": "zeynep@example.org",
            "name": "Zeynep Kaya", "role": role
        }));
    });
    monitor(state, server)
        .args(["login", "--username", "zeynep", "--password-stdin", "--remember"])
        .write_stdin("pw\n")
        .assert()
        .success();
}

#[test]
fn non_admin_is_kept_out_of_logs() {
    let state = assert_fs::TempDir::new().unwrap();
    let server = MockServer::start();
    sign_in(&state, &server, "analyst");
    let logs = server.mock(|when, then| {
        when.method(GET).path("/admin/logs");
        then.status(200).json_body(json!([]));
    });

    monitor(&state, &server)
        .arg("logs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires the admin role"));

    logs.assert_hits(0);
}

#[test]
fn empty_log_feed_renders_one_placeholder_row() {
    let state = assert_fs::TempDir::new().unwrap();
    let server = MockServer::start();
    sign_in(&state, &server, "admin");
    server.mock(|when, then| {
        when.method(GET).path("/admin/logs").query_param("page", "1");
        then.status(200)
            .json_body(json!({"logs": [], "total": 0, "page": 1, "totalPages": 1}));
    });

    let out = monitor(&state, &server).arg("logs").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.matches("No log data found").count(), 1);
    assert!(stdout.contains("Page 1 of 1"));
}

#[test]
fn log_filters_reach_the_backend() {
    let state = assert_fs::TempDir::new().unwrap();
    let server = MockServer::start();
    sign_in(&state, &server, "admin");
    let filtered = server.mock(|when, then| {
        when.method(GET)
            .path("/admin/logs")
            .query_param("page", "2")
            .query_param("offset", "20")
            .query_param("event_type", "critical")
            .query_param("start_date", "2026-01-01")
            .query_param("search", "model drift");
        then.status(200).json_body(json!({
            "logs": [{
                "id": 501, "timestamp": "2026-01-03T08:00:00Z", "level": "critical",
                "source": "fairness-engine", "message": "Demographic parity below threshold",
                "hash": "9f86d081884c7d65"
            }],
            "total": 21,
            "page": 2,
            "totalPages": 2
        }));
    });

    monitor(&state, &server)
        .args([
            "logs", "--page", "2", "--level", "CRITICAL", "--since", "2026-01-01",
            "--search", "model drift",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CRITICAL"))
        .stdout(predicate::str::contains("9f86d081..."))
        .stdout(predicate::str::contains("previous: --page 1"));

    filtered.assert();
}

#[test]
fn page_zero_is_rejected() {
    let state = assert_fs::TempDir::new().unwrap();
    let server = MockServer::start();
    let logs = server.mock(|when, then| {
        when.method(GET).path("/admin/logs");
        then.status(200).json_body(json!([]));
    });

    monitor(&state, &server)
        .args(["logs", "--page", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--page"));
    logs.assert_hits(0);
}

#[test]
fn bad_date_is_rejected() {
    let state = assert_fs::TempDir::new().unwrap();
    let server = MockServer::start();
    sign_in(&state, &server, "admin");

    monitor(&state, &server)
        .args(["logs", "--since", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn reports_page_is_listed() {
    let state = assert_fs::TempDir::new().unwrap();
    let server = MockServer::start();
    sign_in(&state, &server, "admin");
    server.mock(|when, then| {
        when.method(GET)
            .path("/admin/reports")
            .query_param("page", "1")
            .query_param("pageSize", "10");
        then.status(200).json_body(json!({
            "reports": [{
                "id": "RPT-7", "date": "2026-02-01", "model": "loan-v3",
                "decisionCount": 340, "biasRate": 0.12, "fairnessScore": 0.66
            }],
            "total": 1
        }));
    });

    monitor(&state, &server)
        .arg("reports")
        .assert()
        .success()
        .stdout(predicate::str::contains("RPT-7"))
        .stdout(predicate::str::contains("12.0%"))
        .stdout(predicate::str::contains("Page 1 of 1"));
}

#[test]
fn report_download_writes_file_and_digest() {
    let state = assert_fs::TempDir::new().unwrap();
    let server = MockServer::start();
    sign_in(&state, &server, "admin");
    server.mock(|when, then| {
        when.method(GET).path("/admin/reports/RPT-7/download");
        then.status(200).body("abc");
    });
    let target = state.child("out/rpt-7.pdf");

    monitor(&state, &server)
        .args(["report", "download", "RPT-7", "--output"])
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ));

    target.assert("abc");
}

#[test]
fn report_ids_are_validated() {
    let state = assert_fs::TempDir::new().unwrap();
    let server = MockServer::start();

    monitor(&state, &server)
        .args(["report", "download", "../secrets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid report id"));
}
