mod test_env;
// Integration tests for the finance calculators

use predicates::prelude::*;
use test_env::{poe_cmd, setup_test_env};

#[test]
fn test_simple_investment() {
    let (temp_dir, _guard) = setup_test_env();

    poe_cmd(temp_dir.path())
        .args(["finance", "investment", "--amount", "1000", "--rate", "10", "--years", "5", "--interest", "simple"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your total investment rand value after 5 years with simple interest will be: 1500.00",
        ));
}

#[test]
fn test_compound_investment() {
    let (temp_dir, _guard) = setup_test_env();

    poe_cmd(temp_dir.path())
        .args(["finance", "investment", "--amount", "1000", "--rate", "10", "--years", "2", "--interest", "compound"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with compound interest will be: 1210.00"));
}

#[test]
fn test_investment_json() {
    let (temp_dir, _guard) = setup_test_env();

    let output = poe_cmd(temp_dir.path())
        .args(["finance", "investment", "--amount", "2000", "--rate", "5", "--years", "3", "--interest", "simple", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["interest"], "simple");
    assert_eq!(value["total"], 2300.0);
}

#[test]
fn test_bond_repayment() {
    let (temp_dir, _guard) = setup_test_env();

    poe_cmd(temp_dir.path())
        .args(["finance", "bond", "--value", "100000", "--rate", "7", "--months", "120"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your monthly bond repayment is: 1,161.08"));
}

#[test]
fn test_bond_zero_rate() {
    let (temp_dir, _guard) = setup_test_env();

    poe_cmd(temp_dir.path())
        .args(["finance", "bond", "--value", "1200000", "--rate", "0", "--months", "240"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your monthly bond repayment is: 5,000.00"));
}

#[test]
fn test_bond_zero_months() {
    let (temp_dir, _guard) = setup_test_env();

    poe_cmd(temp_dir.path())
        .args(["finance", "bond", "--value", "1000", "--rate", "5", "--months", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Number of months must be at least 1."));
}

#[test]
fn test_negative_amount_rejected() {
    let (temp_dir, _guard) = setup_test_env();

    poe_cmd(temp_dir.path())
        .args(["finance", "investment", "--amount", "-500", "--rate", "5", "--years", "1", "--interest", "simple"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid amount: -500"));
}

#[test]
fn test_invalid_interest_type() {
    let (temp_dir, _guard) = setup_test_env();

    poe_cmd(temp_dir.path())
        .args(["finance", "investment", "--amount", "500", "--rate", "5", "--years", "1", "--interest", "monthly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'monthly'"));
}

#[test]
fn test_bond_term_beyond_i32_range() {
    let (temp_dir, _guard) = setup_test_env();

    poe_cmd(temp_dir.path())
        .args(["finance", "bond", "--value", "120000", "--rate", "12", "--months", "2147483648"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your monthly bond repayment is: 1,200.00"));
}

#[test]
fn test_investment_total_overflow() {
    let (temp_dir, _guard) = setup_test_env();

    poe_cmd(temp_dir.path())
        .args(["finance", "investment", "--amount", "1000", "--rate", "5", "--years", "4294967295", "--interest", "compound"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Investment total is too large to calculate."));
}
