use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with plain output and a database inside `temp_dir`
fn todo_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todo").expect("Failed to find todo binary");
    cmd.env_remove("TODO_DATABASE_FILE")
        .arg("--no-color")
        .arg("--database-file")
        .arg(temp_dir.path().join("cli_test.db"));
    cmd
}

/// Creates an item and returns its ID as printed by `add`.
fn add_todo(temp_dir: &TempDir, title: &str) -> String {
    let output = todo_cmd(temp_dir)
        .args(["add", title])
        .output()
        .expect("Failed to run add");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Created todo with ID: "))
        .expect("add should print the new ID")
        .trim()
        .to_string()
}

#[test]
fn test_cli_add_todo() {
    let temp_dir = create_cli_test_environment();

    todo_cmd(&temp_dir)
        .args(["add", "Buy milk", "--description", "2 liters"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created todo with ID: "))
        .stdout(predicate::str::contains("## Buy milk (○ Todo)"))
        .stdout(predicate::str::contains("2 liters"));
}

#[test]
fn test_cli_add_with_due_date() {
    let temp_dir = create_cli_test_environment();

    todo_cmd(&temp_dir)
        .args(["add", "Pay rent", "--due", "2030-01-01T09:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Due: "));
}

#[test]
fn test_cli_add_blank_title_fails() {
    let temp_dir = create_cli_test_environment();

    todo_cmd(&temp_dir)
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title"));
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = create_cli_test_environment();

    todo_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos found."));
}

#[test]
fn test_cli_default_command_lists() {
    let temp_dir = create_cli_test_environment();
    add_todo(&temp_dir, "Listed by default");

    todo_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Listed by default"));
}

#[test]
fn test_cli_complete_and_filter() {
    let temp_dir = create_cli_test_environment();
    let done_id = add_todo(&temp_dir, "Finished task");
    add_todo(&temp_dir, "Open task");

    todo_cmd(&temp_dir)
        .args(["complete", &done_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Finished task (✓ Done)"))
        .stdout(predicate::str::contains("- Updated: "));

    todo_cmd(&temp_dir)
        .args(["list", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finished task"))
        .stdout(predicate::str::contains("Open task").not());

    todo_cmd(&temp_dir)
        .args(["list", "--incomplete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Open task"))
        .stdout(predicate::str::contains("Finished task").not());

    todo_cmd(&temp_dir)
        .args(["reopen", &done_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Finished task (○ Todo)"));
}

#[test]
fn test_cli_update_keeps_unspecified_fields() {
    let temp_dir = create_cli_test_environment();
    let output = todo_cmd(&temp_dir)
        .args(["add", "Original", "--description", "keep me"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .lines()
        .find_map(|line| line.strip_prefix("Created todo with ID: "))
        .unwrap()
        .trim()
        .to_string();

    todo_cmd(&temp_dir)
        .args(["update", &id, "--title", "Renamed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Renamed"))
        .stdout(predicate::str::contains("keep me"));

    todo_cmd(&temp_dir)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Renamed"))
        .stdout(predicate::str::contains(format!("- ID: {id}")));
}

#[test]
fn test_cli_delete() {
    let temp_dir = create_cli_test_environment();
    let id = add_todo(&temp_dir, "Short lived");

    todo_cmd(&temp_dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted todo with ID: {id}")));

    todo_cmd(&temp_dir)
        .args(["show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not found"));

    todo_cmd(&temp_dir)
        .args(["delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not found"));
}

#[test]
fn test_cli_show_missing_todo() {
    let temp_dir = create_cli_test_environment();

    todo_cmd(&temp_dir)
        .args(["show", "00000000-0000-0000-0000-000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "TodoItem with ID 00000000-0000-0000-0000-000000000000 was not found.",
        ));
}

#[test]
fn test_cli_rejects_malformed_id() {
    let temp_dir = create_cli_test_environment();

    todo_cmd(&temp_dir)
        .args(["complete", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("id"));
}

#[test]
fn test_cli_database_file_from_env() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("from_env.db");

    Command::cargo_bin("todo")
        .unwrap()
        .env("TODO_DATABASE_FILE", &db_path)
        .args(["--no-color", "add", "Env configured"])
        .assert()
        .success();

    assert!(db_path.exists());
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("todo")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("--database-file"));
}
