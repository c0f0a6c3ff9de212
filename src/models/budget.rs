//! Budget snapshot and expense book
//!
//! These are the two independently persisted units: accounts travel with
//! their derived total, expenses travel as a fixed/variable pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::expense::{Expense, ExpenseKind};
use super::ids::{AccountId, ExpenseId};
use super::money::Money;

/// Accounts plus their derived total, as stored under the `budget` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    /// Sum of all account balances; never edited directly
    #[serde(default)]
    pub total_budget: Money,

    #[serde(default)]
    pub accounts: Vec<Account>,

    /// Timestamp of the last account mutation
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,

    /// Scalar income figure used by the projections view
    #[serde(default)]
    pub monthly_income: Money,
}

impl Default for BudgetSnapshot {
    fn default() -> Self {
        Self {
            total_budget: Money::zero(),
            accounts: Vec::new(),
            last_updated: Utc::now(),
            monthly_income: Money::zero(),
        }
    }
}

impl BudgetSnapshot {
    /// Sum of the account balances
    pub fn balance_sum(&self) -> Money {
        self.accounts.iter().map(|a| a.balance).sum()
    }

    /// Recompute `total_budget` from the accounts and stamp `last_updated`
    pub fn recompute(&mut self) {
        self.total_budget = self.balance_sum();
        self.last_updated = Utc::now();
    }

    pub fn get(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| &a.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| &a.id == id)
    }

    /// Case-insensitive name lookup
    pub fn find_by_name(&self, name: &str) -> Option<&Account> {
        let name = name.trim().to_lowercase();
        self.accounts.iter().find(|a| a.name.to_lowercase() == name)
    }
}

/// Fixed and variable expenses, as stored under the `expenses` key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBook {
    #[serde(default)]
    pub fixed: Vec<Expense>,
    #[serde(default)]
    pub variable: Vec<Expense>,
}

impl ExpenseBook {
    /// The partition selected by `kind`
    pub fn partition(&self, kind: ExpenseKind) -> &[Expense] {
        match kind {
            ExpenseKind::Fixed => &self.fixed,
            ExpenseKind::Variable => &self.variable,
        }
    }

    pub(crate) fn partition_mut(&mut self, kind: ExpenseKind) -> &mut Vec<Expense> {
        match kind {
            ExpenseKind::Fixed => &mut self.fixed,
            ExpenseKind::Variable => &mut self.variable,
        }
    }

    pub fn get(&self, kind: ExpenseKind, id: &ExpenseId) -> Option<&Expense> {
        self.partition(kind).iter().find(|e| &e.id == id)
    }

    /// Case-insensitive name lookup within one partition
    pub fn find_by_name(&self, kind: ExpenseKind, name: &str) -> Option<&Expense> {
        let name = name.trim().to_lowercase();
        self.partition(kind)
            .iter()
            .find(|e| e.name.to_lowercase() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.variable.is_empty()
    }
}
