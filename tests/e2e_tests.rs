//! End-to-end tests running the tcpping binary against loopback listeners
//!
//! No external network is involved: success runs target a listener bound to
//! an ephemeral port, failure runs target a port that was just released.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::net::{SocketAddr, TcpListener};
use std::process::Command;

fn create_test_cmd() -> Command {
    Command::cargo_bin("tcpping").unwrap()
}

/// Bind a listener on an ephemeral loopback port and keep it alive
fn loopback_listener() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

/// An ephemeral loopback port with nothing listening on it
fn refused_addr() -> SocketAddr {
    let (listener, addr) = loopback_listener();
    drop(listener);
    addr
}

#[test]
fn test_successful_run_prints_probes_and_summary() {
    let (_listener, addr) = loopback_listener();

    let output = create_test_cmd()
        .args([
            "127.0.0.1",
            "-p",
            &addr.port().to_string(),
            "-c",
            "3",
            "-i",
            "0.01",
            "--no-color",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains(&format!(
        "TCP PING 127.0.0.1 (127.0.0.1) tcp port {}",
        addr.port()
    )));
    let probe_lines = stdout
        .lines()
        .filter(|l| l.starts_with("127.0.0.1: ") && l.ends_with(" ms"))
        .count();
    assert_eq!(probe_lines, 3);
    assert!(stdout.contains("--- 127.0.0.1 tcp ping statistics ---"));
    assert!(stdout.contains("3 pings, 3 success, 0 failed, 0.0% loss"));
    assert!(stdout.contains("rtt min/mean/max/range = "));
    assert!(stdout.contains("jitter mean = "));
}

#[test]
fn test_refused_run_reports_connection_errors_and_undefined_rtt() {
    let addr = refused_addr();

    let output = create_test_cmd()
        .args([
            "127.0.0.1",
            "-p",
            &addr.port().to_string(),
            "-c",
            "2",
            "-i",
            "0.01",
            "--no-color",
        ])
        .output()
        .unwrap();

    // Failed probes are recoverable outcomes; the run itself completed
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("connection error"));
    assert!(stdout.contains("2 pings, 0 success, 2 failed, 100.0% loss"));
    assert!(stdout.contains("rtt min/mean/max/range = -/-/-/- ms"));
    assert!(stdout.contains("jitter mean = - ms"));
}

#[test]
fn test_skip_excludes_warmup_from_statistics_but_not_display() {
    let (_listener, addr) = loopback_listener();

    let output = create_test_cmd()
        .args([
            "127.0.0.1",
            "-p",
            &addr.port().to_string(),
            "-c",
            "4",
            "-s",
            "2",
            "-i",
            "0.01",
            "--no-color",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    // All four probes print a line; only two enter the statistics
    let probe_lines = stdout
        .lines()
        .filter(|l| l.starts_with("127.0.0.1: "))
        .count();
    assert_eq!(probe_lines, 4);
    assert!(stdout.contains("2 pings, 2 success, 0 failed"));
}

#[test]
fn test_quiet_mode_prints_summary_only() {
    let (_listener, addr) = loopback_listener();

    create_test_cmd()
        .args([
            "127.0.0.1",
            "-p",
            &addr.port().to_string(),
            "-c",
            "2",
            "-i",
            "0.01",
            "-q",
            "--no-color",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"(?m)^127\.0\.0\.1: ")
                .unwrap()
                .not()
                .and(predicate::str::contains("tcp ping statistics")),
        );
}

#[test]
fn test_verbose_mode_shows_running_statistics() {
    let (_listener, addr) = loopback_listener();

    create_test_cmd()
        .args([
            "127.0.0.1",
            "-p",
            &addr.port().to_string(),
            "-c",
            "2",
            "-i",
            "0.01",
            "--verbose",
            "--no-color",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("seq=")
                .and(predicate::str::contains("mean="))
                .and(predicate::str::contains("loss=")),
        );
}

#[test]
fn test_json_summary_is_machine_readable() {
    let (_listener, addr) = loopback_listener();

    let output = create_test_cmd()
        .args([
            "127.0.0.1",
            "-p",
            &addr.port().to_string(),
            "-c",
            "2",
            "-i",
            "0.01",
            "--json",
            "-q",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["hostname"], "127.0.0.1");
    assert_eq!(json["port"], addr.port());
    assert_eq!(json["total_count"], 2);
    assert_eq!(json["success_count"], 2);
    assert_eq!(json["fail_count"], 0);
    assert!(json["min_rtt_ms"].is_number());
    assert!(json["total_run_ms"].is_number());
}

#[test]
fn test_json_summary_keeps_undefined_fields_null() {
    let addr = refused_addr();

    let output = create_test_cmd()
        .args([
            "127.0.0.1",
            "-p",
            &addr.port().to_string(),
            "-c",
            "1",
            "--json",
            "-q",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["fail_count"], 1);
    // Undefined statistics are null, never 0.0
    assert!(json["min_rtt_ms"].is_null());
    assert!(json["mean_rtt_ms"].is_null());
    assert!(json["jitter_ms"].is_null());
}

#[test]
fn test_skip_covering_whole_run_warns_and_reports_empty_stats() {
    let (_listener, addr) = loopback_listener();

    let output = create_test_cmd()
        .args([
            "127.0.0.1",
            "-p",
            &addr.port().to_string(),
            "-c",
            "2",
            "-s",
            "2",
            "-i",
            "0.01",
            "--no-color",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(stderr.contains("skip window"));
    assert!(stdout.contains("0 pings, 0 success, 0 failed"));
    assert!(stdout.contains("rtt min/mean/max/range = -/-/-/- ms"));
}
