//! End-to-end checks of the `petclinic` binary against an on-disk store.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(db_path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_petclinic"))
        .env_remove("PETCLINIC_DB_PATH")
        .env_remove("PETCLINIC_LOG_LEVEL")
        .env_remove("PETCLINIC_LOG_DIR")
        .arg("--db")
        .arg(db_path)
        .args(args)
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn create_find_and_update_owner() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("clinic.db");

    let created = stdout_json(&run(
        &db_path,
        &[
            "create",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--address",
            "123 Main St",
            "--city",
            "Springfield",
            "--telephone",
            "555-1234",
        ],
    ));
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["firstName"], "John");

    let by_last_name = stdout_json(&run(&db_path, &["find-by-last-name", "Doe"]));
    assert_eq!(by_last_name.as_array().unwrap().len(), 1);

    let id_arg = id.to_string();
    stdout_json(&run(
        &db_path,
        &[
            "update",
            "--id",
            &id_arg,
            "--first-name",
            "Jane",
            "--last-name",
            "Smith",
            "--city",
            "Shelbyville",
        ],
    ));

    let found = stdout_json(&run(&db_path, &["find", "--id", &id_arg]));
    assert_eq!(found["firstName"], "Jane");
    assert_eq!(found["lastName"], "Smith");
    assert_eq!(found["city"], "Shelbyville");
    assert!(found["address"].is_null());
    assert!(found["telephone"].is_null());
}

#[test]
fn missing_owner_exits_with_not_found_code() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("clinic.db");

    let output = run(&db_path, &["update", "--id", "999999", "--first-name", "Ghost"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("999999"), "stderr: {stderr}");

    let output = run(&db_path, &["find", "--id", "999999"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn unknown_last_name_prints_empty_list() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("clinic.db");

    let owners = stdout_json(&run(&db_path, &["find-by-last-name", "Nobody"]));
    assert_eq!(owners, serde_json::json!([]));
}
