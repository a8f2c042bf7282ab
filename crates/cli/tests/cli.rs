use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("procurex-cli").unwrap();
    cmd.env_remove("PROCUREX_API_URL")
        .env_remove("RUST_LOG")
        .arg("--api-url")
        .arg("http://127.0.0.1:9");
    cmd
}

#[test]
fn test_entities_lists_catalog() {
    cli()
        .arg("entities")
        .assert()
        .success()
        .stdout(predicate::str::contains("vendor"))
        .stdout(predicate::str::contains("monthly_metric"));
}

#[test]
fn test_list_unknown_entity_fails() {
    cli()
        .args(["list", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown entity"));
}

#[test]
fn test_list_child_without_parent_fails() {
    cli()
        .args(["list", "vendor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a parent id"));
}

#[test]
fn test_finalized_list_needs_support() {
    cli()
        .args(["list", "receipt", "--parent", "1", "--finalized"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no finalized list"));
}
