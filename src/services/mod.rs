//! Service layer for Runway
//!
//! The ledger store owns and persists the budget state; the forms module is
//! the input boundary that turns raw strings into validated values.

pub mod forms;
pub mod ledger;

pub use forms::{AccountEditForm, AccountForm, ExpenseEditForm, ExpenseForm};
pub use ledger::{LedgerSnapshot, LedgerStore};
