//! CLI surface smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_packaging_contract() {
    Command::cargo_bin("lambda-packager")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lambda-deployment.zip"))
        .stdout(predicate::str::contains("requirements.txt"));
}

#[test]
fn version_is_reported() {
    Command::cargo_bin("lambda-packager")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lambda-packager"));
}

#[test]
fn unexpected_arguments_are_rejected() {
    Command::cargo_bin("lambda-packager")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure();
}
