use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use suitsort_cli::config::{OutputFormat, RunConfig};
use tempfile::tempdir;

#[test]
fn prints_exact_fractions_for_requested_range() {
    Command::cargo_bin("suitsort")
        .expect("binary built")
        .args(["--min", "5", "--max", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("213019/249900"))
        .stdout(predicate::str::contains("51083/83895"));
}

#[test]
fn rejects_hand_sizes_beyond_thirteen() {
    Command::cargo_bin("suitsort")
        .expect("binary built")
        .args(["--max", "14"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hand_sizes.max"));
}

#[test]
fn config_file_drives_json_output() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("run.yaml");
    fs::write(
        &path,
        "hand_sizes: { min: 5, max: 5 }\nmode: unpruned\noutput: { format: json }\n",
    )
    .expect("write config");

    let output = Command::cargo_bin("suitsort")
        .expect("binary built")
        .arg("--config")
        .arg(&path)
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["fraction"], "213019/249900");
}

#[test]
fn library_run_verifies_and_samples() {
    let mut config: RunConfig = serde_yaml::from_str(
        "hand_sizes: { min: 1, max: 6 }\nsimulation: { trials: 300, seed: 9 }\nverify: { enabled: true }\n",
    )
    .expect("parse");
    config.validate().expect("valid");
    assert_eq!(config.output.format, OutputFormat::Text);

    let report = suitsort_cli::run(&config).expect("run succeeds");
    assert_eq!(report.lines().count(), 6);
    assert!(report.contains("sampled"));
    assert!(report.contains("51083/83895"));
}
