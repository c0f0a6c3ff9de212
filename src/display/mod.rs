//! Display formatting for terminal output
//!
//! Plain-text tables and summaries for accounts, expenses and reports.

pub mod account;
pub mod expense;
pub mod report;

pub use account::format_account_list;
pub use expense::{format_expense_book, format_expense_partition};
pub use report::{format_burndown, format_projections, format_summary};
