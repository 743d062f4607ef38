use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn composer() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_composer"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn select_lists_models() {
    composer()
        .args(["select", "--cpu", "arm", "--memory", "524,288", "--gpu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Server Model Options"))
        .stdout(predicate::str::contains("  - High Density Server"));
}

#[test]
fn select_with_bad_memory_is_blocked() {
    composer()
        .args(["select", "--cpu", "x86", "--memory", "4097"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Please fix the error above before submitting"))
        .stdout(predicate::str::contains("Server Model Options").not());
}

#[test]
fn select_json_output() {
    let output = composer()
        .args(["--json", "select", "--cpu", "x86", "--memory", "131072"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["results"], serde_json::json!(["TOWER_SERVER", "RACK_SERVER"]));
}

#[test]
fn validate_reports_kind() {
    composer()
        .args(["validate", "8388609"])
        .assert()
        .code(1)
        .stdout("MAX: Memory size must be at most 8388608 MB\n");

    composer().args(["validate", "8,388,608"]).assert().success().stdout("8,388,608 MB\n");
}

#[test]
fn rules_are_listed() {
    composer()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rule-1"))
        .stdout(predicate::str::contains("rule-3b"));
}

#[test]
fn session_reads_stdin() {
    composer()
        .arg("session")
        .write_stdin("cpu x86\nmemory 4096\nsubmit\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("  - Tower Server"));
}

#[test]
fn config_file_sets_form_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("composer.toml");
    fs::write(&path, "[form]\ncpu = \"x86\"\n").unwrap();

    composer()
        .arg("--config")
        .arg(&path)
        .args(["select", "--memory", "4096"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CPU:    X86"));
}

#[test]
fn missing_config_file_fails() {
    composer()
        .args(["--config", "/nonexistent/composer.toml", "rules"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn logs_stay_off_stdout() {
    composer()
        .args(["-vvv", "validate", "4096"])
        .assert()
        .success()
        .stdout("4,096 MB\n");
}

#[test]
fn sample_config_keeps_logs_on_the_console() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("composer.toml"),
        "[form]\ncpu = \"power\"\ngpu = false\n\n[output]\njson = false\n\n\
         [log]\nlevel = \"warn\"\ndirectory = \"\"\njson = false\n",
    )
    .unwrap();

    composer().current_dir(dir.path()).arg("rules").assert().success().stderr("");

    let logs: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .flatten()
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "log"))
        .collect();
    assert!(logs.is_empty(), "unexpected log files: {logs:?}");
}
