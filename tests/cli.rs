use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn runway(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("runway").expect("runway binary");
    cmd.env("RUNWAY_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_account_add_then_list_shows_total() {
    let dir = TempDir::new().unwrap();

    runway(&dir)
        .args(["account", "add", "Checking", "--balance", "600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added account: Checking"));
    runway(&dir)
        .args(["account", "add", "Wallet", "-t", "cash", "-b", "400.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total budget: $1000.00"));

    runway(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking"))
        .stdout(predicate::str::contains("Cash"))
        .stdout(predicate::str::contains("$1000.00"));

    let raw = std::fs::read_to_string(dir.path().join("data").join("budget.json")).unwrap();
    assert!(raw.contains("totalBudget"));
}

#[test]
fn test_summary_reports_runway() {
    let dir = TempDir::new().unwrap();

    runway(&dir)
        .args(["account", "add", "Checking", "--balance", "1000"])
        .assert()
        .success();
    runway(&dir)
        .args(["expense", "add", "fixed", "Rent", "300", "-c", "housing"])
        .assert()
        .success();
    runway(&dir)
        .args(["expense", "add", "variable", "Groceries", "200", "-c", "food"])
        .assert()
        .success();

    runway(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Budget:      $1000.00"))
        .stdout(predicate::str::contains("Remaining Budget:  $500.00"))
        .stdout(predicate::str::contains("Financial Runway:  2 months"))
        .stdout(predicate::str::contains("50.0% of total budget"));

    runway(&dir)
        .args(["report", "burndown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month 3"))
        .stdout(predicate::str::contains("Month 4").not());
}

#[test]
fn test_burndown_without_expenses_runs_a_full_year() {
    let dir = TempDir::new().unwrap();

    runway(&dir)
        .args(["account", "add", "Savings", "-t", "savings", "-b", "5000"])
        .assert()
        .success();

    runway(&dir)
        .args(["report", "burndown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Start"))
        .stdout(predicate::str::contains("Month 12"))
        .stdout(predicate::str::contains("Month 13").not());
}

#[test]
fn test_invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    runway(&dir)
        .args(["expense", "add", "fixed", "Rent", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid amount"));

    runway(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn test_editing_unknown_account_fails() {
    let dir = TempDir::new().unwrap();

    runway(&dir)
        .args(["account", "edit", "Nowhere", "--balance", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found"));
}

#[test]
fn test_edit_and_delete_by_name() {
    let dir = TempDir::new().unwrap();

    runway(&dir)
        .args(["account", "add", "Checking", "-b", "100"])
        .assert()
        .success();
    runway(&dir)
        .args(["account", "edit", "checking", "--balance", "250.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total budget: $250.50"));
    runway(&dir)
        .args(["account", "delete", "CHECKING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total budget: $0.00"));
    runway(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts found."));
}

#[test]
fn test_income_projection() {
    let dir = TempDir::new().unwrap();

    runway(&dir)
        .args(["income", "set", "4000"])
        .assert()
        .success();
    runway(&dir)
        .args(["expense", "add", "fixed", "Rent", "1000"])
        .assert()
        .success();

    runway(&dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly income: $4000.00"));
    runway(&dir)
        .args(["report", "projections"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$3000.00"))
        .stdout(predicate::str::contains("Emergency Fund: 9 months"));
}

#[test]
fn test_write_failure_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    // A directory where the record file should be makes every write fail
    std::fs::create_dir_all(dir.path().join("data").join("budget.json")).unwrap();

    runway(&dir)
        .args(["account", "add", "Checking", "-b", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added account: Checking"))
        .stderr(predicate::str::contains("could not be saved"));
}
