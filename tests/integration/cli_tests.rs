//! CLI integration tests.
//!
//! Each test drives the real binary against a throwaway data directory and
//! checks both the observable output and the persisted snapshot files.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use serde_json::Value;

fn bibliodesk(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bibliodesk").expect("binary builds");
    cmd.env("BIBLIODESK_DATA_DIR", data_dir);
    cmd
}

fn read_snapshot(data_dir: &Path, key: &str) -> Value {
    let bytes = fs::read(data_dir.join(format!("{}.json", key))).expect("snapshot exists");
    serde_json::from_slice(&bytes).expect("snapshot is valid JSON")
}

/// Run a command expected to succeed and return its stdout
fn run_ok(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is UTF-8")
}

/// "Added book <id>" / "Added member <id>" -> id
fn id_from(stdout: &str) -> String {
    stdout
        .trim()
        .rsplit(' ')
        .next()
        .expect("id in output")
        .to_string()
}

fn add_book(data_dir: &Path, title: &str) -> String {
    let stdout = run_ok(
        bibliodesk(data_dir)
            .arg("book")
            .arg("add")
            .arg("--title")
            .arg(title)
            .arg("--description")
            .arg("sci-fi"),
    );
    id_from(&stdout)
}

fn add_member(data_dir: &Path, name: &str) -> String {
    let stdout = run_ok(
        bibliodesk(data_dir)
            .arg("member")
            .arg("add")
            .arg("--name")
            .arg(name)
            .arg("--email")
            .arg("a@x.com")
            .arg("--phone")
            .arg("555"),
    );
    id_from(&stdout)
}

#[test]
fn test_add_book_writes_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let id = add_book(dir.path(), "Dune");

    let books = read_snapshot(dir.path(), "books");
    assert_eq!(books.as_array().unwrap().len(), 1);
    assert_eq!(books[0]["id"], id.as_str());
    assert_eq!(books[0]["title"], "Dune");
    assert_eq!(books[0]["isBorrowed"], false);
    assert!(books[0].get("image").is_none());
}

#[test]
fn test_borrow_and_return_flow() {
    let dir = tempfile::tempdir().unwrap();
    let book_id = add_book(dir.path(), "Dune");
    let member_id = add_member(dir.path(), "Alice");

    bibliodesk(dir.path())
        .args(["borrow", &member_id, &book_id])
        .assert()
        .success();

    let books = read_snapshot(dir.path(), "books");
    let members = read_snapshot(dir.path(), "members");
    assert_eq!(books[0]["isBorrowed"], true);
    assert_eq!(members[0]["borrowedBooks"][0], book_id.as_str());

    // borrowed book is gone from the available list
    let stdout = run_ok(bibliodesk(dir.path()).args(["book", "list", "--available"]));
    assert!(stdout.is_empty());

    // and shows up under the member's loans
    let stdout = run_ok(bibliodesk(dir.path()).args(["member", "loans", &member_id]));
    assert!(stdout.contains("Dune"));

    bibliodesk(dir.path())
        .args(["return", &member_id, &book_id])
        .assert()
        .success();

    let books = read_snapshot(dir.path(), "books");
    let members = read_snapshot(dir.path(), "members");
    assert_eq!(books[0]["isBorrowed"], false);
    assert_eq!(members[0]["borrowedBooks"].as_array().unwrap().len(), 0);
}

#[test]
fn test_double_borrow_conflicts() {
    let dir = tempfile::tempdir().unwrap();
    let book_id = add_book(dir.path(), "Dune");
    let member_id = add_member(dir.path(), "Alice");

    bibliodesk(dir.path())
        .args(["borrow", &member_id, &book_id])
        .assert()
        .success();

    bibliodesk(dir.path())
        .args(["borrow", &member_id, &book_id])
        .assert()
        .failure()
        .code(3);

    // state unchanged from after the first borrow
    let members = read_snapshot(dir.path(), "members");
    assert_eq!(members[0]["borrowedBooks"].as_array().unwrap().len(), 1);
}

#[test]
fn test_delete_guards() {
    let dir = tempfile::tempdir().unwrap();
    let book_id = add_book(dir.path(), "Dune");
    let member_id = add_member(dir.path(), "Alice");

    bibliodesk(dir.path())
        .args(["borrow", &member_id, &book_id])
        .assert()
        .success();

    bibliodesk(dir.path())
        .args(["book", "delete", &book_id])
        .assert()
        .failure()
        .code(3);
    bibliodesk(dir.path())
        .args(["member", "delete", &member_id])
        .assert()
        .failure()
        .code(3);

    bibliodesk(dir.path())
        .args(["return", &member_id, &book_id])
        .assert()
        .success();
    bibliodesk(dir.path())
        .args(["book", "delete", &book_id])
        .assert()
        .success();

    let books = read_snapshot(dir.path(), "books");
    assert_eq!(books.as_array().unwrap().len(), 0);
}

#[test]
fn test_edit_unknown_book_exits_not_found() {
    let dir = tempfile::tempdir().unwrap();

    bibliodesk(dir.path())
        .args([
            "book",
            "edit",
            "missing",
            "--title",
            "x",
            "--description",
            "y",
        ])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_empty_title_exits_bad_value() {
    let dir = tempfile::tempdir().unwrap();

    bibliodesk(dir.path())
        .args(["book", "add", "--title", "", "--description", "d"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_member_list_renders_loan_count() {
    let dir = tempfile::tempdir().unwrap();
    let book_id = add_book(dir.path(), "Dune");
    let member_id = add_member(dir.path(), "Alice");

    bibliodesk(dir.path())
        .args(["borrow", &member_id, &book_id])
        .assert()
        .success();

    let stdout = run_ok(bibliodesk(dir.path()).args(["member", "list"]));
    assert!(stdout.contains("Alice"));
    assert!(stdout.contains("1 loan(s)"));
}
