//! Exit status and console output of the `job-import` binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

/// Run the binary with a clean environment for config and logging
fn job_import(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_job-import"))
        .args(args)
        .env_remove("JOBS_IMPORT_ENDPOINT")
        .env_remove("JOBS_IMPORT_DRY_RUN")
        .env_remove("JOBS_IMPORT_VERBOSE")
        .env_remove("JOBS_IMPORT_JSON_LOGS")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run job-import")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Helper for an endpoint on a port nothing listens on
fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/admin/recommend", addr)
}

fn write_report(dir: &Path, content: &str) -> String {
    let path = dir.join("Jobs_Report.json");
    std::fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[test]
fn test_no_arguments_prints_usage_and_exits_2() {
    let output = job_import(&[]);

    assert_eq!(output.status.code(), Some(2));
    let text = format!("{}{}", stdout(&output), String::from_utf8_lossy(&output.stderr));
    assert!(text.contains("Usage:"));
    assert!(text.contains("Example:"));
}

#[test]
fn test_missing_file_exits_1_before_banner() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("nope.json").display().to_string();

    let output = job_import(&["--endpoint", &closed_endpoint(), &missing]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.starts_with("File not found: "));
    assert!(!out.contains("Importing jobs from"));
}

#[test]
fn test_no_eligible_listings_exits_0() {
    let temp = tempdir().unwrap();
    let path = write_report(temp.path(), r#"{"remote_other": [{"title": "no url"}]}"#);

    let output = job_import(&["--endpoint", &closed_endpoint(), &path]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("No jobs found in JSON file"));
    assert!(!out.contains("Found "));
}

#[test]
fn test_malformed_json_exits_1() {
    let temp = tempdir().unwrap();
    let path = write_report(temp.path(), "{\"side_gigs\": [");

    let output = job_import(&["--endpoint", &closed_endpoint(), &path]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Invalid JSON in"));
}

#[test]
fn test_network_failure_exits_1_with_hint() {
    let temp = tempdir().unwrap();
    let path = write_report(temp.path(), r#"{"side_gigs": [{"url": "https://gigs.example/1"}]}"#);

    let output = job_import(&["--endpoint", &closed_endpoint(), &path]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Found 1 jobs to import..."));
    assert!(out.contains("Network error: "));
    assert!(out.contains("Hint: Make sure the backend is running!"));
}

#[test]
fn test_dry_run_exits_0_and_prints_payload() {
    let temp = tempdir().unwrap();
    let path = write_report(temp.path(), r#"{"local_charleston": [{"url": "a"}]}"#);

    let output = job_import(&["--dry-run", "--endpoint", &closed_endpoint(), &path]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Dry run: 1 jobs would be sent"));
    assert!(out.contains("\"source\": \"local_charleston\""));
}
