use assert_cmd::Command;
use predicates::prelude::*;

fn decfield() -> Command {
    Command::cargo_bin("decfield").unwrap()
}

#[test]
fn check_accepts_a_plain_decimal() {
    decfield()
        .args(["check", "12.34"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn check_accepts_grouped_values() {
    decfield().args(["check", "10 000.90"]).assert().success();
}

#[test]
fn check_normalizes_a_comma_before_validating() {
    decfield()
        .args(["check", "12,5", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"candidate\":\"12.5\""));
}

#[test]
fn check_rejects_three_fraction_digits() {
    decfield()
        .args(["check", "12.345"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("does not match the decimal grammar"));
}

#[test]
fn check_rejects_seven_integer_digits() {
    decfield().args(["check", "1234567"]).assert().failure();
}

#[test]
fn check_amount_cap_is_shorter() {
    // 12 characters: fine generically, over the amount cap.
    decfield().args(["check", "-234 678.012"]).assert().failure();
    decfield()
        .args(["check", "-2 345 678.01", "--amount"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("exceeds 11 characters"));
}

#[test]
fn format_settles_to_the_grouped_form() {
    decfield()
        .args(["format", "10000.9"])
        .assert()
        .success()
        .stdout("10 000.90\n");
}

#[test]
fn format_raw_prints_the_plain_number() {
    decfield()
        .args(["format", "7", "--raw"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn format_empty_input_settles_to_zero_generically() {
    decfield()
        .args(["format", ""])
        .assert()
        .success()
        .stdout("0.00\n");
}

#[test]
fn format_rejects_zero_in_amount_mode() {
    decfield()
        .args(["format", "0", "--amount"])
        .assert()
        .failure()
        .code(1)
        .stdout("\n");
}

#[test]
fn format_unparseable_value_settles_empty() {
    decfield()
        .args(["format", "garbage"])
        .assert()
        .failure()
        .stdout("\n");
}

#[test]
fn format_json_reports_validity() {
    decfield()
        .args(["format", "0", "--amount", "--output", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\":false"));

    decfield()
        .args(["format", "1234.5", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"settled\":\"1 234.50\""));
}
