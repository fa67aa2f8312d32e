use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TODAY: &str = "2025-01-20";

fn fintrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").expect("bin");
    cmd.env("FINTRACK_DATA_DIR", data_dir.path())
        .env_remove("FINTRACK_USER")
        .env("RUST_LOG", "off")
        .args(["--today", TODAY]);
    cmd
}

fn as_user(data_dir: &TempDir, user: &str) -> Command {
    let mut cmd = fintrack(data_dir);
    cmd.args(["--user", user]);
    cmd
}

/// Pull the short id printed on an "  ID:  xxx" line
fn printed_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.lines()
        .find_map(|line| line.trim().strip_prefix("ID:"))
        .map(|id| id.trim().to_string())
        .expect("id line")
}

#[test]
fn loan_calculator_prints_monthly_payment() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["calc", "loan", "--principal", "10000", "--rate", "0", "--years", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kz 833.33"));
}

#[test]
fn loan_schedule_has_one_row_per_payment() {
    let dir = TempDir::new().unwrap();
    let output = fintrack(&dir)
        .args(["calc", "loan", "-p", "1200", "-r", "0", "-y", "1", "--schedule"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("   12"));
    assert!(!text.contains("   13 "));
}

#[test]
fn calculator_reports_missing_input() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["calc", "loan", "--rate", "5", "--years", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Principal is required"));
}

#[test]
fn savings_goal_already_met() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["calc", "savings", "--target", "100", "--current", "200", "--monthly", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already reached"));
}

#[test]
fn record_commands_require_a_user() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["transaction", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user id available"));
}

#[test]
fn user_from_environment() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .env("FINTRACK_USER", "env-user")
        .args(["transaction", "add", "income", "500", "Salary"])
        .assert()
        .success();

    as_user(&dir, "env-user")
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));
}

#[test]
fn transactions_are_scoped_per_user() {
    let dir = TempDir::new().unwrap();
    as_user(&dir, "alice")
        .args(["transaction", "add", "expense", "42", "Food", "--description", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense"));

    as_user(&dir, "alice")
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries").and(predicate::str::contains("-42.00")));

    as_user(&dir, "bob")
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();
    as_user(&dir, "alice")
        .args(["transaction", "add", "expense", "0", "Food"])
        .assert()
        .failure();

    as_user(&dir, "alice")
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn expense_over_budget_warns_and_raises_alert() {
    let dir = TempDir::new().unwrap();
    as_user(&dir, "alice")
        .args(["budget", "add", "Food", "100", "--period", "2025-01"])
        .assert()
        .success();

    as_user(&dir, "alice")
        .args(["transaction", "add", "expense", "127", "Food", "--date", "2025-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: [danger] Budget exceeded: Food"));

    as_user(&dir, "alice")
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OVER").and(predicate::str::contains("127%")));

    as_user(&dir, "alice")
        .arg("alerts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget exceeded: Food"));
}

#[test]
fn duplicate_budget_is_rejected() {
    let dir = TempDir::new().unwrap();
    as_user(&dir, "alice")
        .args(["budget", "add", "Food", "100", "--period", "2025-01"])
        .assert()
        .success();

    as_user(&dir, "alice")
        .args(["budget", "add", "Food", "300", "--period", "2025-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn goal_contribution_is_clamped_at_target() {
    let dir = TempDir::new().unwrap();
    let output = as_user(&dir, "alice")
        .args(["goal", "add", "Laptop", "1000", "2025-06-30", "--current", "900"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = printed_id(&output.stdout);

    as_user(&dir, "alice")
        .args(["goal", "contribute", &id, "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal reached!"));

    as_user(&dir, "bob")
        .args(["goal", "contribute", &id, "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal not found"));
}

#[test]
fn summary_report_totals() {
    let dir = TempDir::new().unwrap();
    for args in [
        ["transaction", "add", "income", "1000", "Salary"],
        ["transaction", "add", "expense", "300", "Rent"],
        ["transaction", "add", "expense", "100", "Food"],
    ] {
        as_user(&dir, "alice").args(args).assert().success();
    }

    as_user(&dir, "alice")
        .args(["report", "summary", "--range", "this-month"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Kz 1000.00")
                .and(predicate::str::contains("Kz 400.00"))
                .and(predicate::str::contains("Kz 600.00")),
        );
}

#[test]
fn unknown_report_range_is_rejected() {
    let dir = TempDir::new().unwrap();
    as_user(&dir, "alice")
        .args(["report", "summary", "--range", "fortnight"])
        .assert()
        .failure();
}

#[test]
fn investment_list_shows_estimated_value() {
    let dir = TempDir::new().unwrap();
    as_user(&dir, "alice")
        .args(["investment", "add", "Bonds", "1000", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kz 1100.00"));

    as_user(&dir, "alice")
        .args(["investment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bonds"));
}
