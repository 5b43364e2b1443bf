#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn roster(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("roster"));
    cmd.env("ROSTER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_writes_default_config() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized roster store"));
    assert!(home.path().join("config.json").exists());

    roster(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("tasks-file = tasks.json"));
}

#[test]
fn first_run_creates_empty_file() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["contacts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your contact book is empty."));
    assert_eq!(
        fs::read_to_string(home.path().join("contacts.json")).unwrap(),
        "[]"
    );
}

#[test]
fn duplicate_phone_fails_and_keeps_one_contact() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["contacts", "add", "Ann", "5551234567"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Ann added successfully."));

    roster(&home)
        .args(["contacts", "add", "Other", "5551234567"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Phone number: 5551234567 already exists.",
        ));

    roster(&home)
        .args(["contacts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Other").not())
        .stdout(predicate::str::contains(
            "ID: 1 | Name: Ann | Phone Number: 5551234567 | Email: Not yet provided",
        ));
}

#[test]
fn invalid_phone_is_reported() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["contacts", "add", "Ann", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Phone number length must be 10 digits.",
        ));
}

#[test]
fn deleting_renumbers_what_is_left() {
    let home = TempDir::new().unwrap();
    for (name, phone) in [("Ann", "1111111111"), ("Bob", "2222222222"), ("Cy", "3333333333")] {
        roster(&home)
            .args(["contacts", "add", name, phone])
            .assert()
            .success();
    }

    roster(&home)
        .args(["contacts", "delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Bob has been removed."));

    roster(&home)
        .args(["contacts", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 2 | Name: Cy"));

    let saved = fs::read_to_string(home.path().join("contacts.json")).unwrap();
    assert!(saved.contains("\"contact_id\": 2"));
    assert!(!saved.contains("\"contact_id\": 3"));
}

#[test]
fn ambiguous_name_changes_nothing() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["contacts", "add", "Sam", "1111111111"])
        .assert()
        .success();
    roster(&home)
        .args(["contacts", "add", "sam", "2222222222"])
        .assert()
        .success();

    roster(&home)
        .args(["contacts", "delete", "SAM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("select by ID"))
        .stdout(predicate::str::contains("2 contacts with the same Name SAM:"));

    roster(&home)
        .args(["contacts", "search", "sam"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 contacts"));
}

#[test]
fn phone_search_requires_digits() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["contacts", "add", "Ann", "5551234567"])
        .assert()
        .success();

    roster(&home)
        .args(["contacts", "search", "--phone", "555"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Ann"));

    roster(&home)
        .args(["contacts", "search", "--phone", "5x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a series of numbers"));
}

#[test]
fn duplicate_policy_controls_self_collision() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["contacts", "add", "Ann", "5551234567"])
        .assert()
        .success();

    roster(&home)
        .args(["contacts", "update", "1", "--phone", "5551234567"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    roster(&home)
        .args(["config", "duplicate-policy", "exclude-self"])
        .assert()
        .success();

    roster(&home)
        .args(["contacts", "update", "Ann", "--phone", "5551234567", "--email", "ann@mail.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann has updated phone, email."));
}

#[test]
fn task_lifecycle() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["tasks", "add", "Buy", "milk", "--priority", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Task 'Buy milk' (Priority: High) added successfully.",
        ));
    roster(&home)
        .args(["tasks", "add", "Walk", "dog", "-p", "low"])
        .assert()
        .success();

    roster(&home)
        .args(["tasks", "complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been marked as complete."));
    roster(&home)
        .args(["tasks", "complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("was already completed."));

    roster(&home)
        .args(["tasks", "list", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. High - [X] Buy milk"))
        .stdout(predicate::str::contains("Walk dog").not());

    roster(&home)
        .args(["tasks", "delete", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All completed tasks deleted (1)."));

    roster(&home)
        .args(["tasks", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Low - [ ] Walk dog"));
}

#[test]
fn bad_ids_and_priorities_fail() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["tasks", "complete", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ID must be greater than zero."));
    roster(&home)
        .args(["tasks", "complete", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ID must be an integer."));
    roster(&home)
        .args(["tasks", "add", "Nap", "--priority", "urgent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Priority must be High, Medium, or Low"));
    roster(&home)
        .args(["tasks", "delete", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task with ID 4 not found."));
}

#[test]
fn corrupt_file_is_treated_as_empty() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("tasks.json"), "{{ not json").unwrap();

    roster(&home)
        .args(["tasks", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your task list is empty."));

    roster(&home)
        .args(["tasks", "add", "Fresh", "start", "-p", "medium"])
        .assert()
        .success();
    let saved = fs::read_to_string(home.path().join("tasks.json")).unwrap();
    assert!(saved.contains("\"description\": \"Fresh start\""));
}

#[test]
fn mistyped_row_refuses_to_overwrite_the_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("contacts.json");
    let stored = r#"[
     {"contact_id": 1, "name": "Ann", "phone": "1111111111", "email": null},
     {"contact_id": 2, "name": "Bob", "phone": 2222222222, "email": null}
]"#;
    fs::write(&path, stored).unwrap();

    roster(&home)
        .args(["contacts", "add", "Cy", "3333333333"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
    assert_eq!(fs::read_to_string(&path).unwrap(), stored);
}

#[test]
fn unknown_config_key_fails() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}
