//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `flashdeck` command isolated from any user config.
fn flashdeck(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("flashdeck").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env_remove("FLASHDECK_IMPORT_FROM")
        .env_remove("FLASHDECK_EXPORT_TO")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_remove_scenario() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .write_stdin("add\ncat\nanimal\nadd\ncat\ndog\npet\nremove\ncat\nremove\ncat\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The pair (\"cat\":\"animal\") has been added.",
        ))
        .stdout(predicate::str::contains(
            "The card \"cat\" already exists. Try again:",
        ))
        .stdout(predicate::str::contains("The pair (\"dog\":\"pet\") has been added."))
        .stdout(predicate::str::contains("The card has been removed."))
        .stdout(predicate::str::contains(
            "Can't remove \"cat\": there is no such card.",
        ))
        .stdout(predicate::str::ends_with("Bye bye!\n"));
}

#[test]
fn unknown_action_is_not_fatal() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .write_stdin("Add\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No valid input"));
}

#[test]
fn import_and_export_flags() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(
        &input,
        "(\"Japan\":\"Tokyo\"):(1)\n(\"France\":\"Paris\"):(4)\n",
    )
    .unwrap();

    flashdeck(dir.path())
        .arg("--import_from")
        .arg(&input)
        .arg("--export_to")
        .arg(&output)
        .write_stdin("hardest card\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2 cards have been loaded."))
        .stdout(predicate::str::contains(
            "The hardest card is \"France\". You have 4 errors answering it.",
        ))
        .stdout(predicate::str::ends_with("Bye bye!\n2 cards have been saved.\n"));

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "(\"France\":\"Paris\"):(4)\n(\"Japan\":\"Tokyo\"):(1)\n"
    );
}

#[test]
fn import_missing_file_continues() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .write_stdin("import\nno_such_deck.txt\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found."));
}

#[test]
fn import_overwrites_existing_card() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("deck.txt"), "(\"cat\":\"feline\"):(2)\n").unwrap();

    flashdeck(dir.path())
        .write_stdin("add\ncat\nanimal\nimport\ndeck.txt\nexport\nout.txt\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cards have been loaded."))
        .stdout(predicate::str::contains("1 cards have been saved."));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "(\"cat\":\"feline\"):(2)\n"
    );
}

#[test]
fn malformed_import_is_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.txt"), "cat = animal\n").unwrap();

    flashdeck(dir.path())
        .write_stdin("import\nbad.txt\nexit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("malformed card on line 1"));
}

#[test]
fn quiz_counts_mistakes() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .write_stdin("add\ncat\nanimal\nask\n1\nwrong\nask\n1\nwrong\nhardest card\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrong. The right answer is"))
        .stdout(predicate::str::contains(
            "The hardest card is \"cat\". You have 2 errors answering it.",
        ));
}

#[test]
fn quiz_reports_cross_match() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("deck.txt"),
        "(\"cat\":\"animal\"):(0)\n(\"dog\":\"pet\"):(0)\n",
    )
    .unwrap();

    // "cat" is drawn at least once in 20 questions with overwhelming odds.
    let answers = "pet\n".repeat(20);
    flashdeck(dir.path())
        .arg("--import_from")
        .arg("deck.txt")
        .write_stdin(format!("ask\n20\n{answers}exit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrong. The right answer is \"animal\", but your definition is correct for \"dog\".",
        ));
}

#[test]
fn non_numeric_quiz_length_is_fatal() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .write_stdin("add\ncat\nanimal\nask\nseveral\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number of questions"));
}

#[test]
fn log_saves_transcript() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .write_stdin("add\ncat\nanimal\nlog\nsession.log\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The log has been saved."));

    let log = std::fs::read_to_string(dir.path().join("session.log")).unwrap();
    assert!(log.starts_with("Input the action"));
    assert!(log.contains("\ncat\nThe definition of the card:\nanimal\n"));
    assert!(log.ends_with("File name:\nsession.log\n"));
}

#[test]
fn config_file_sets_export_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("flashdeck.toml"),
        "export_to = \"from-config.txt\"\n",
    )
    .unwrap();

    flashdeck(dir.path())
        .write_stdin("add\ncat\nanimal\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("1 cards have been saved.\n"));

    assert!(dir.path().join("from-config.txt").exists());
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .arg("--config")
        .arg("nope.toml")
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn end_of_input_fails() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .write_stdin("add\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected end of input"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive flashcard trainer"))
        .stdout(predicate::str::contains("--import_from"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();

    flashdeck(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flashdeck"));
}
