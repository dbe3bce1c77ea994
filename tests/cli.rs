use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const USERS: &str = r#"[{"id": 1, "username": "alice", "email": "a@x.com", "is_active": true,
    "is_staff": false, "is_superuser": false, "last_login": null,
    "created_at": "2024-01-01", "updated_at": "2024-01-02"}]"#;

fn tally(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_EXPORT_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn export_to_stdout() {
    let home = TempDir::new().unwrap();

    tally(&home)
        .args(["export", "users", "--stdout"])
        .write_stdin(USERS)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ID,Username,Email,First_Name,Last_Name,Is_Active,Is_Staff,Is_Superuser,Last_Login,Created_At,Updated_At\r\n",
        ))
        .stdout(predicate::str::contains(
            "1,alice,a@x.com,,,Yes,No,No,-,2024-01-01,2024-01-02\r\n",
        ));
}

#[test]
fn export_to_output_dir() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("users.json");
    std::fs::write(&input, USERS).unwrap();
    let out = home.path().join("downloads");

    tally(&home)
        .arg("export")
        .arg("users")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported 1 users"));

    let written = std::fs::read_to_string(out.join("users-list.csv")).unwrap();
    assert!(written.contains("alice"));
}

#[test]
fn export_twice_keeps_both_files() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("downloads");

    for _ in 0..2 {
        tally(&home)
            .args(["export", "users", "--output-dir"])
            .arg(&out)
            .write_stdin(USERS)
            .assert()
            .success();
    }

    assert!(out.join("users-list.csv").exists());
    assert!(out.join("users-list (1).csv").exists());
}

#[test]
fn export_empty_records_shows_notice() {
    let home = TempDir::new().unwrap();

    tally(&home)
        .args(["export", "staff", "--stdout"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No data available to export"));
}

#[test]
fn export_unknown_entity_fails() {
    let home = TempDir::new().unwrap();

    tally(&home)
        .args(["export", "vendors", "--stdout"])
        .write_stdin(USERS)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("vendors"));
}

#[test]
fn export_yaml_paginated_input() {
    let home = TempDir::new().unwrap();

    tally(&home)
        .args(["export", "orders", "--stdout", "--format", "yaml"])
        .write_stdin("count: 1\nresults:\n  - id: 7\n    customer:\n      name: Acme, Inc.\n    total_amount: 12.5\n    is_paid: true\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("7,,\"Acme, Inc.\",,0,12.50,,Yes,\r\n"));
}

#[test]
fn custom_definitions_are_exportable() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("exports.yaml"),
        "entities:\n  vendors:\n    file_name: vendor-list.csv\n    columns:\n      - header: ID\n        path: id\n      - header: Active\n        path: is_active\n        transform: yes_no\n",
    )
    .unwrap();

    tally(&home)
        .args(["entities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vendor-list.csv"));

    tally(&home)
        .args(["export", "vendors", "--stdout"])
        .write_stdin(r#"[{"id": 3, "is_active": false}]"#)
        .assert()
        .success()
        .stdout("ID,Active\r\n3,No\r\n");
}

#[test]
fn entities_describes_columns() {
    let home = TempDir::new().unwrap();

    tally(&home)
        .args(["entities", "users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("users -> users-list.csv"))
        .stdout(predicate::str::contains("date_or_dash"));

    tally(&home).args(["entities", "nope"]).assert().failure();
}

#[test]
fn init_writes_settings() {
    let home = TempDir::new().unwrap();

    tally(&home).arg("init").assert().success();

    assert!(home.path().join("config.json").exists());
    assert!(home.path().join("exports").is_dir());

    tally(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwrite existing: false"));
}
