//! Storage layer for Runway
//!
//! State is kept as two independent JSON records in a key-value store:
//! `budget` (accounts, total, income) and `expenses` (fixed/variable).
//! Each record loads on its own, so a corrupt one never blanks the other.

pub mod budget;
pub mod expenses;
pub mod file;
pub mod file_io;
pub mod memory;

pub use budget::{load_budget, save_budget};
pub use expenses::{load_expenses, save_expenses};
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::RunwayResult;

/// Key of the accounts/budget record
pub const BUDGET_KEY: &str = "budget";

/// Key of the expenses record
pub const EXPENSES_KEY: &str = "expenses";

/// A synchronous string key-value backend
pub trait KeyValueStore {
    /// Raw value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> RunwayResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> RunwayResult<()>;

    /// Delete `key`; absent keys are not an error
    fn remove(&mut self, key: &str) -> RunwayResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> RunwayResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> RunwayResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> RunwayResult<()> {
        (**self).remove(key)
    }
}
