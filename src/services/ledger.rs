//! Ledger store
//!
//! Single owner of accounts, expenses and monthly income. Every mutation
//! recomputes the budget total from the account balances and flushes the
//! affected record to the key-value store. Flush failures are logged and
//! remembered, never rolled back: the in-memory state stays authoritative
//! and a later mutation (or [`LedgerStore::flush`]) retries the write.

use std::collections::BTreeSet;

use tracing::{debug, error};

use crate::error::{RunwayError, RunwayResult};
use crate::models::{
    Account, AccountId, AccountPatch, AccountType, BudgetSnapshot, Expense, ExpenseBook,
    ExpenseCategory, ExpenseId, ExpenseKind, ExpensePatch, Money,
};
use crate::storage::{
    load_budget, load_expenses, save_budget, save_expenses, KeyValueStore, BUDGET_KEY,
    EXPENSES_KEY,
};

/// Read-only view of the ledger state
#[derive(Debug, Clone, Copy)]
pub struct LedgerSnapshot<'a> {
    pub budget: &'a BudgetSnapshot,
    pub expenses: &'a ExpenseBook,
}

impl<'a> LedgerSnapshot<'a> {
    pub fn total_budget(&self) -> Money {
        self.budget.total_budget
    }

    pub fn monthly_income(&self) -> Money {
        self.budget.monthly_income
    }

    pub fn accounts(&self) -> &'a [Account] {
        &self.budget.accounts
    }

    pub fn fixed(&self) -> &'a [Expense] {
        &self.expenses.fixed
    }

    pub fn variable(&self) -> &'a [Expense] {
        &self.expenses.variable
    }
}

/// Owner of the budget state, persisting through `S`
pub struct LedgerStore<S: KeyValueStore> {
    store: S,
    budget: BudgetSnapshot,
    expenses: ExpenseBook,
    unsaved: BTreeSet<&'static str>,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Create a store over `store` and hydrate it
    pub fn open(store: S) -> Self {
        let mut ledger = Self {
            store,
            budget: BudgetSnapshot::default(),
            expenses: ExpenseBook::default(),
            unsaved: BTreeSet::new(),
        };
        ledger.load();
        ledger
    }

    /// Replace in-memory state with the persisted records
    ///
    /// Each record falls back to its empty default independently.
    pub fn load(&mut self) {
        self.budget = load_budget(&self.store);
        self.expenses = load_expenses(&self.store);
        self.unsaved.clear();
        debug!(
            accounts = self.budget.accounts.len(),
            fixed = self.expenses.fixed.len(),
            variable = self.expenses.variable.len(),
            "Ledger loaded"
        );
    }

    pub fn snapshot(&self) -> LedgerSnapshot<'_> {
        LedgerSnapshot {
            budget: &self.budget,
            expenses: &self.expenses,
        }
    }

    /// The backing key-value store
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Keys whose most recent write failed
    pub fn unsaved_keys(&self) -> Vec<&'static str> {
        self.unsaved.iter().copied().collect()
    }

    /// True when every record has been written since its last change
    pub fn is_persisted(&self) -> bool {
        self.unsaved.is_empty()
    }

    /// Write both records, reporting the first failure
    pub fn flush(&mut self) -> RunwayResult<()> {
        let budget = self.write_budget();
        let expenses = self.write_expenses();
        budget.and(expenses)
    }

    // ------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------

    /// Add an account with a fresh id
    pub fn add_account(
        &mut self,
        name: &str,
        account_type: AccountType,
        balance: Money,
    ) -> RunwayResult<Account> {
        let account = Account::new(name.trim(), account_type, balance);
        account
            .validate()
            .map_err(|e| RunwayError::Validation(e.to_string()))?;

        self.budget.accounts.push(account.clone());
        self.budget.recompute();
        debug!(id = %account.id, name = %account.name, "Account added");
        self.persist_budget();

        Ok(account)
    }

    /// Replace the mutable fields of an account
    ///
    /// Returns `Ok(false)` without touching any state when `id` is unknown.
    pub fn update_account(&mut self, id: &AccountId, patch: &AccountPatch) -> RunwayResult<bool> {
        let Some(existing) = self.budget.get(id) else {
            debug!(id = %id, "Update of unknown account ignored");
            return Ok(false);
        };

        let mut updated = existing.clone();
        updated.apply(patch);
        updated
            .validate()
            .map_err(|e| RunwayError::Validation(e.to_string()))?;

        if let Some(slot) = self.budget.get_mut(id) {
            *slot = updated;
        }
        self.budget.recompute();
        debug!(id = %id, "Account updated");
        self.persist_budget();

        Ok(true)
    }

    /// Remove an account; returns whether one was removed
    pub fn delete_account(&mut self, id: &AccountId) -> bool {
        let before = self.budget.accounts.len();
        self.budget.accounts.retain(|a| &a.id != id);
        if self.budget.accounts.len() == before {
            debug!(id = %id, "Delete of unknown account ignored");
            return false;
        }

        self.budget.recompute();
        debug!(id = %id, "Account deleted");
        self.persist_budget();
        true
    }

    /// Store the monthly income figure
    pub fn set_monthly_income(&mut self, income: Money) -> RunwayResult<()> {
        if income.is_negative() {
            return Err(RunwayError::Validation(
                "Monthly income cannot be negative".into(),
            ));
        }

        self.budget.monthly_income = income;
        self.budget.recompute();
        debug!(income = %income, "Monthly income set");
        self.persist_budget();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Expenses
    // ------------------------------------------------------------------

    /// Append an expense to the `kind` partition
    pub fn add_expense(
        &mut self,
        kind: ExpenseKind,
        name: &str,
        amount: Money,
        category: ExpenseCategory,
    ) -> RunwayResult<Expense> {
        let expense = Expense::new(name.trim(), amount, category);
        expense
            .validate()
            .map_err(|e| RunwayError::Validation(e.to_string()))?;

        self.expenses.partition_mut(kind).push(expense.clone());
        debug!(id = %expense.id, kind = %kind, "Expense added");
        self.persist_expenses();

        Ok(expense)
    }

    /// Replace the mutable fields of an expense within one partition
    ///
    /// Returns `Ok(false)` without touching any state when `id` is not in
    /// that partition.
    pub fn update_expense(
        &mut self,
        kind: ExpenseKind,
        id: &ExpenseId,
        patch: &ExpensePatch,
    ) -> RunwayResult<bool> {
        let partition = self.expenses.partition_mut(kind);
        let Some(slot) = partition.iter_mut().find(|e| &e.id == id) else {
            debug!(id = %id, kind = %kind, "Update of unknown expense ignored");
            return Ok(false);
        };

        let mut updated = slot.clone();
        updated.apply(patch);
        updated
            .validate()
            .map_err(|e| RunwayError::Validation(e.to_string()))?;
        *slot = updated;

        debug!(id = %id, kind = %kind, "Expense updated");
        self.persist_expenses();
        Ok(true)
    }

    /// Remove an expense from one partition; returns whether one was removed
    pub fn remove_expense(&mut self, kind: ExpenseKind, id: &ExpenseId) -> bool {
        let partition = self.expenses.partition_mut(kind);
        let before = partition.len();
        partition.retain(|e| &e.id != id);
        if partition.len() == before {
            debug!(id = %id, kind = %kind, "Removal of unknown expense ignored");
            return false;
        }

        debug!(id = %id, kind = %kind, "Expense removed");
        self.persist_expenses();
        true
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    fn write_budget(&mut self) -> RunwayResult<()> {
        let result = save_budget(&mut self.store, &self.budget);
        self.track(BUDGET_KEY, &result);
        result
    }

    fn write_expenses(&mut self) -> RunwayResult<()> {
        let result = save_expenses(&mut self.store, &self.expenses);
        self.track(EXPENSES_KEY, &result);
        result
    }

    fn persist_budget(&mut self) {
        if let Err(e) = self.write_budget() {
            error!(key = BUDGET_KEY, error = %e, "Error saving budget");
        }
    }

    fn persist_expenses(&mut self) {
        if let Err(e) = self.write_expenses() {
            error!(key = EXPENSES_KEY, error = %e, "Error saving expenses");
        }
    }

    fn track(&mut self, key: &'static str, result: &RunwayResult<()>) {
        if result.is_ok() {
            self.unsaved.remove(key);
        } else {
            self.unsaved.insert(key);
        }
    }
}
