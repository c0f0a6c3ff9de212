//! Runway - budget survival tracking
//!
//! This library provides the core functionality for the Runway budgeting
//! tool. It keeps a set of accounts whose balances form a total budget, a
//! list of fixed and variable monthly expenses, and derives from them how
//! long the budget lasts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (money, accounts, expenses, budget record)
//! - `storage`: Key-value persistence of the budget and expense records
//! - `services`: The ledger store and input validation
//! - `reports`: Pure budget analysis, burndown and income projections
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use runway::services::LedgerStore;
//! use runway::storage::MemoryStore;
//! use runway::models::{AccountType, Money};
//!
//! let mut ledger = LedgerStore::open(MemoryStore::new());
//! ledger.add_account("Checking", AccountType::Bank, Money::from_cents(100_000))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{RunwayError, RunwayResult};
