//! Core data models for Runway
//!
//! This module contains the data structures of the budgeting domain:
//! accounts, expenses, and the persisted budget snapshot.

pub mod account;
pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;

pub use account::{Account, AccountPatch, AccountType};
pub use budget::{BudgetSnapshot, ExpenseBook};
pub use expense::{Expense, ExpenseCategory, ExpenseKind, ExpensePatch};
pub use ids::{AccountId, ExpenseId};
pub use money::Money;
