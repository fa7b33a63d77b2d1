use assert_cmd::Command;
use predicates::prelude::*;

fn bunup() -> Command {
    let mut cmd = Command::cargo_bin("bunup").unwrap();
    cmd.env_remove("BUNUP_CONFIG");
    cmd
}

#[test]
fn test_help_lists_create() {
    bunup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("Scaffold a new project with Bunup"));
}

#[test]
fn test_version() {
    bunup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_create_help_mentions_config() {
    bunup()
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_unknown_subcommand_fails() {
    bunup()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_broken_settings_are_reported_without_a_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("create.yaml");
    std::fs::write(&settings, "install: [not, a, bool]").unwrap();

    bunup()
        .current_dir(dir.path())
        .args(["create", "--config"])
        .arg(&settings)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
