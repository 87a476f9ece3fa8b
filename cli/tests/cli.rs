//! Integration tests for the pwcrack binary

use assert_cmd::Command;
use predicates::prelude::*;
use pwcrack_core::encode;

fn pwcrack() -> Command {
    Command::cargo_bin("pwcrack").unwrap()
}

#[test]
fn test_encode_argument() {
    pwcrack()
        .args(["encode", "abc"])
        .assert()
        .success()
        .stdout("Encoded password: 900150983cd24fb0d6963f7d28e17f72\n");
}

#[test]
fn test_encode_stdin() {
    pwcrack()
        .arg("encode")
        .write_stdin("password\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("5f4dcc3b5aa765d61d8327deb882cf99"));
}

#[test]
fn test_guess_found() {
    let digest = encode("42").to_string();

    pwcrack()
        .args(["guess", "numbers", "--max-length", "2", "--digest", &digest])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attempting to guess password of length 2"))
        .stdout(predicate::str::contains("Guessed password: 42"));
}

#[test]
fn test_guess_digest_from_stdin() {
    let digest = encode("ab").to_string().to_uppercase();

    pwcrack()
        .args(["guess", "letters", "--max_length", "2", "--quiet"])
        .write_stdin(format!("{digest}\n"))
        .assert()
        .success()
        .stdout("Guessed password: ab\n");
}

#[test]
fn test_guess_not_found_is_not_an_error() {
    let digest = encode("abc").to_string();

    pwcrack()
        .args(["guess", "numbers", "-l", "2", "-q", "-d", &digest])
        .assert()
        .success()
        .stdout("Could not guess password\n");
}

#[test]
fn test_guess_custom_charset() {
    let digest = encode("-_-").to_string();

    pwcrack()
        .args(["guess", "--charset", "_-", "-l", "3", "-q", "-d", &digest])
        .assert()
        .success()
        .stdout("Guessed password: -_-\n");
}

#[test]
fn test_guess_invalid_digest() {
    pwcrack()
        .args(["guess", "numbers", "--digest", "not-hex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hexadecimal"));
}

#[test]
fn test_guess_invalid_complexity() {
    pwcrack()
        .args(["guess", "symbols", "--digest", &encode("1").to_string()])
        .assert()
        .failure();
}

#[test]
fn test_time_to_guess() {
    pwcrack()
        .args(["time-to-guess", "letters_numbers", "4"])
        .assert()
        .success()
        .stdout(
            "Number of potential passwords: 1727604\n\
             Expected passwords/s: 700000\n\
             Approximate time to guess: 2 seconds\n",
        );
}

#[test]
fn test_time_to_guess_alias_and_performance() {
    pwcrack()
        .args(["time_to_guess", "letters", "3", "--performance", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of potential passwords: 18278"))
        .stdout(predicate::str::contains("Approximate time to guess: 18 seconds"));
}

#[test]
fn test_time_to_guess_invalid_config() {
    pwcrack()
        .args(["time-to-guess", "numbers", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));

    pwcrack()
        .args(["time-to-guess", "numbers", "3", "--performance", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn test_guess_charset_conflicts_with_complexity() {
    let digest = encode("1").to_string();

    pwcrack()
        .args(["guess", "numbers", "--charset", "ab", "-q", "-d", &digest])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
