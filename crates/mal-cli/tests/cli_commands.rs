//! CLI integration tests for the `malones` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn malones() -> Command {
    Command::cargo_bin("malones").unwrap()
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_single_ticket() {
    malones()
        .arg("draw")
        .assert()
        .success()
        .stdout(predicate::str::contains("|"));
}

#[test]
fn draw_json_tickets_follow_the_rules() {
    let output = malones()
        .args(["draw", "--count", "20", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let tickets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tickets = tickets.as_array().unwrap();
    assert_eq!(tickets.len(), 20);
    for ticket in tickets {
        let main: Vec<u64> = ticket["main"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap())
            .collect();
        let stars: Vec<u64> = ticket["stars"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap())
            .collect();
        assert_eq!(main.len() + stars.len(), 7);
        assert!(main.windows(2).all(|w| w[0] < w[1]));
        assert!(stars.windows(2).all(|w| w[0] < w[1]));
        assert!(main.iter().all(|v| (1..=50).contains(v)));
        assert!(stars.iter().all(|v| (1..=12).contains(v)));
    }
}

#[test]
fn draw_with_seed_is_reproducible() {
    let run = || {
        malones()
            .args(["draw", "--count", "5", "--seed", "7", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn draw_many_prints_table() {
    malones()
        .args(["draw", "--count", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Numbers"))
        .stdout(predicate::str::contains("Stars"));
}

#[test]
fn draw_zero_fails() {
    malones()
        .args(["draw", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1..=1000"));
}

#[test]
fn draw_count_is_capped() {
    malones()
        .args(["draw", "--count", "1001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1..=1000"));
    malones()
        .args(["draw", "--count", "18446744073709551615"])
        .assert()
        .failure();
}

#[test]
fn draw_table_header_shows_rules() {
    malones()
        .args(["draw", "--count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Numbers (5 of 1-50)"))
        .stdout(predicate::str::contains("Stars (2 of 1-12)"));
}

// ---------------------------------------------------------------------------
// chat
// ---------------------------------------------------------------------------

#[test]
fn chat_yes() {
    malones()
        .arg("chat")
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Should you come into Malones?"))
        .stdout(predicate::str::contains("Well then come in so!"));
}

#[test]
fn chat_all_no() {
    malones()
        .arg("chat")
        .write_stdin("no\n".repeat(7))
        .assert()
        .success()
        .stdout(predicate::str::contains("Ice cream?"))
        .stdout(predicate::str::contains("Awesome service?"))
        .stdout(predicate::str::contains(
            "Maybe a pint will cheer you up ya miserable git! Come in!",
        ));
}

#[test]
fn chat_custom_script() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("script.json");
    fs::write(
        &path,
        r#"{
    "questions": ["Thirsty?", "Hungry?"],
    "yes_reply": "In you come.",
    "no_reply": "Come in anyway."
}"#,
    )
    .unwrap();

    malones()
        .args(["chat", "--script"])
        .arg(&path)
        .write_stdin("n\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thirsty?"))
        .stdout(predicate::str::contains("Hungry?"))
        .stdout(predicate::str::contains("Come in anyway."));
}

#[test]
fn chat_empty_script_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(
        &path,
        r#"{"questions": [], "yes_reply": "a", "no_reply": "b"}"#,
    )
    .unwrap();

    malones()
        .args(["chat", "--script"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("script has no questions"));
}

#[test]
fn chat_missing_script_fails() {
    malones()
        .args(["chat", "--script", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
