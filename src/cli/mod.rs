//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger store.

pub mod account;
pub mod expense;
pub mod income;
pub mod report;

pub use account::{handle_account_command, AccountCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_report_command, ReportCommands};
