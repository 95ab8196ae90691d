use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stocklist(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stocklist").unwrap();
    cmd.env("STOCKLIST_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--no-color");
    cmd
}

#[test]
fn quit_seeds_default_stock_file() {
    let dir = TempDir::new().unwrap();

    stocklist(&dir)
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stock data saved successfully."));

    let contents = fs::read_to_string(dir.path().join("stock_data.txt")).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "Bananas, true, food, 10");
    assert_eq!(lines[6], "Coffee, true, food, 5");
}

#[test]
fn version_command_prints_banner() {
    let dir = TempDir::new().unwrap();

    stocklist(&dir)
        .write_stdin("-v\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version control: 1.01"));
}

#[test]
fn amounts_reset_after_restart() {
    let dir = TempDir::new().unwrap();

    stocklist(&dir)
        .write_stdin("1\nSoap\nnon-food\n6\nquit\n4\n")
        .assert()
        .success();

    let saved = fs::read_to_string(dir.path().join("stock_data.txt")).unwrap();
    assert!(saved.contains("Soap, true, non-food, 6"));

    stocklist(&dir)
        .write_stdin("3\nnon-food\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter: non-food, Count: 1"))
        .stdout(predicate::str::contains(
            "Soap - Type: non-food - Amount: 0 - Is Available",
        ));
}

#[test]
fn restore_amounts_setting_keeps_quantities() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"restore_amounts": true}"#).unwrap();
    fs::write(dir.path().join("stock_data.txt"), "Soap, true, non-food, 6\n").unwrap();

    stocklist(&dir)
        .write_stdin("3\nall\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Soap - Type: non-food - Amount: 6"));
}

#[test]
fn bad_stock_file_starts_with_empty_list() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("stock_data.txt"),
        "Bananas, true, food\nSoap, maybe, non-food\n",
    )
    .unwrap();

    stocklist(&dir)
        .write_stdin("3\nall\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter: all, Count: 0"))
        .stderr(predicate::str::contains("error loading stock data"))
        .stderr(predicate::str::contains("overwriting stock file that failed to load"));
}

#[test]
fn names_with_commas_survive_restart() {
    let dir = TempDir::new().unwrap();

    stocklist(&dir)
        .write_stdin("1\nIce cream, vanilla\nfood, frozen\n2\nquit\n4\n")
        .assert()
        .success();

    stocklist(&dir)
        .write_stdin("3\nall\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter: all, Count: 8"))
        .stdout(predicate::str::contains(
            "Ice cream, vanilla - Type: food, frozen - Amount: 0 - Is Available",
        ));
}

#[test]
fn invalid_utf8_input_does_not_abort_session() {
    let dir = TempDir::new().unwrap();

    stocklist(&dir)
        .write_stdin(&b"1\nBread\nfood\n3\n\xff\xfe\nfood\nx\nquit\n4\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stock data saved successfully."));

    let saved = fs::read_to_string(dir.path().join("stock_data.txt")).unwrap();
    assert!(saved.contains("Bread, true, food, 3"));
}

#[test]
fn changes_are_written_to_audit_log() {
    let dir = TempDir::new().unwrap();

    stocklist(&dir)
        .write_stdin("2\n2\nbananas\nquit\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 item(s) named bananas"));

    let journal = fs::read_to_string(dir.path().join("audit.log")).unwrap();
    assert_eq!(journal.lines().count(), 1);
    assert!(journal.contains("\"operation\":\"delete\""));
    assert!(journal.contains("Bananas"));
}

#[test]
fn init_writes_default_settings_once() {
    let dir = TempDir::new().unwrap();

    stocklist(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));
    assert!(dir.path().join("config.json").exists());

    stocklist(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings already exist"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    stocklist(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("stock_data.txt"))
        .stdout(predicate::str::contains("Restore amounts: false"));
}

#[test]
fn history_lists_recent_changes() {
    let dir = TempDir::new().unwrap();

    stocklist(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes recorded."));

    stocklist(&dir)
        .write_stdin("2\n1\nPears\nfood\n2\nquit\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated Pears"));

    stocklist(&dir)
        .args(["history", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE Pears"))
        .stdout(predicate::str::contains("Changes: amount: 15 -> 2"));
}
