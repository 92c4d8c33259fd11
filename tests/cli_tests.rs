//! CLI integration tests using the real assetkit binary

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    TestWorkspace::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("image optimizer"))
        .stdout(predicate::str::contains("optimize"))
        .stdout(predicate::str::contains("patch"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_optimize_help_lists_flags() {
    TestWorkspace::new()
        .cmd()
        .args(["optimize", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-dimension"))
        .stdout(predicate::str::contains("--quality"))
        .stdout(predicate::str::contains("--backup-dir"))
        .stdout(predicate::str::contains("EXAMPLES"));
}

#[test]
fn test_version_output() {
    TestWorkspace::new()
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("assetkit"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_version_flag() {
    TestWorkspace::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_bash() {
    TestWorkspace::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("assetkit"));
}

#[test]
fn test_completions_unknown_shell() {
    TestWorkspace::new()
        .cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}

#[test]
fn test_missing_subcommand_fails() {
    TestWorkspace::new().cmd().assert().failure();
}

#[test]
fn test_quality_out_of_range_rejected() {
    TestWorkspace::new()
        .cmd()
        .args(["optimize", ".", "--quality", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quality"));
}

#[test]
fn test_explicit_config_must_exist() {
    TestWorkspace::new()
        .cmd()
        .args(["--config", "missing.yaml", "optimize", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_config_from_env() {
    let workspace = TestWorkspace::new();
    workspace.write_file("conf/custom.yaml", "optimize:\n  quality: 0\n");
    workspace.write_png("images/a.png", 4, 4);

    workspace
        .cmd()
        .env("ASSETKIT_CONFIG", workspace.path.join("conf/custom.yaml"))
        .args(["optimize", "images"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_invalid_config_in_current_directory() {
    let workspace = TestWorkspace::new();
    workspace.write_file("assetkit.yaml", "optimize:\n  colour: red\n");

    workspace
        .cmd()
        .args(["optimize", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}
