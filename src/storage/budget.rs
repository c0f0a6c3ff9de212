//! Persistence of the `budget` record

use std::collections::HashSet;

use tracing::warn;

use crate::error::{RunwayError, RunwayResult};
use crate::models::{Account, BudgetSnapshot};

use super::{KeyValueStore, BUDGET_KEY};

/// Load the budget snapshot, falling back to the empty default
///
/// Absent, unreadable or malformed records are logged and replaced by
/// `BudgetSnapshot::default()`. Accounts that fail validation or repeat an
/// earlier id are dropped with a warning, then a stored total that
/// disagrees with the remaining accounts is recomputed.
pub fn load_budget<S: KeyValueStore + ?Sized>(store: &S) -> BudgetSnapshot {
    let raw = match store.get(BUDGET_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return BudgetSnapshot::default(),
        Err(e) => {
            warn!(key = BUDGET_KEY, error = %e, "Error loading budget, using empty budget");
            return BudgetSnapshot::default();
        }
    };

    let mut snapshot: BudgetSnapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(key = BUDGET_KEY, error = %e, "Malformed budget record, using empty budget");
            return BudgetSnapshot::default();
        }
    };

    retain_valid_accounts(&mut snapshot.accounts);

    let sum = snapshot.balance_sum();
    if snapshot.total_budget != sum {
        warn!(
            stored = %snapshot.total_budget,
            computed = %sum,
            "Stored total budget disagrees with account balances, recomputing"
        );
        snapshot.total_budget = sum;
    }

    snapshot
}

/// Keep the first valid account per id
fn retain_valid_accounts(accounts: &mut Vec<Account>) {
    let mut seen = HashSet::new();
    accounts.retain(|account| {
        if let Err(e) = account.validate() {
            warn!(id = %account.id, error = %e, "Skipping invalid stored account");
            return false;
        }
        if !seen.insert(account.id.clone()) {
            warn!(id = %account.id, "Skipping stored account with duplicate id");
            return false;
        }
        true
    });
}

/// Write the budget snapshot under its key
pub fn save_budget<S: KeyValueStore + ?Sized>(
    store: &mut S,
    snapshot: &BudgetSnapshot,
) -> RunwayResult<()> {
    let json = serde_json::to_string(snapshot)
        .map_err(|e| RunwayError::Persistence(format!("Failed to serialize budget: {}", e)))?;
    store.set(BUDGET_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountType, Money};
    use crate::storage::MemoryStore;

    #[test]
    fn test_absent_is_default() {
        let store = MemoryStore::new();
        let snapshot = load_budget(&store);
        assert!(snapshot.accounts.is_empty());
        assert_eq!(snapshot.total_budget, Money::zero());
    }

    #[test]
    fn test_malformed_is_default() {
        let store = MemoryStore::with_entries([(BUDGET_KEY, "{not json")]);
        assert!(load_budget(&store).accounts.is_empty());

        let store = MemoryStore::with_entries([(BUDGET_KEY, r#"{"accounts": 5}"#)]);
        assert!(load_budget(&store).accounts.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let mut store = MemoryStore::new();
        let mut snapshot = BudgetSnapshot::default();
        snapshot
            .accounts
            .push(Account::new("Bank", AccountType::Bank, Money::from_cents(123456)));
        snapshot.monthly_income = Money::from_cents(300000);
        snapshot.recompute();

        save_budget(&mut store, &snapshot).unwrap();
        assert_eq!(load_budget(&store), snapshot);
    }

    #[test]
    fn test_stale_total_is_recomputed() {
        let raw = r#"{
            "totalBudget": 999,
            "accounts": [{"id": "1", "name": "Wallet", "type": "cash", "balance": 40}],
            "lastUpdated": "2024-01-01T00:00:00Z"
        }"#;
        let store = MemoryStore::with_entries([(BUDGET_KEY, raw)]);
        let snapshot = load_budget(&store);
        assert_eq!(snapshot.total_budget.cents(), 4000);
    }

    #[test]
    fn test_invalid_and_duplicate_accounts_are_skipped() {
        let raw = r#"{
            "totalBudget": 0,
            "accounts": [
                {"id": "a", "name": "Checking", "type": "bank", "balance": 100},
                {"id": "b", "name": "Overdrawn", "type": "bank", "balance": -50},
                {"id": "c", "name": "  ", "type": "cash", "balance": 5},
                {"id": "a", "name": "Copy", "type": "savings", "balance": 70}
            ],
            "lastUpdated": "2024-01-01T00:00:00Z"
        }"#;
        let store = MemoryStore::with_entries([(BUDGET_KEY, raw)]);
        let snapshot = load_budget(&store);

        let names: Vec<&str> = snapshot.accounts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Checking"]);
        assert_eq!(snapshot.total_budget.cents(), 10000);
    }
}
