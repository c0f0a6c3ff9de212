//! Persistence of the `expenses` record

use std::collections::HashSet;

use tracing::warn;

use crate::error::{RunwayError, RunwayResult};
use crate::models::{Expense, ExpenseBook, ExpenseKind};

use super::{KeyValueStore, EXPENSES_KEY};

/// Load the expense book, falling back to empty partitions
///
/// Within each partition, unnamed or negative entries and repeated ids are
/// dropped with a warning. A zero amount is kept: it is what a loosely typed
/// stored amount coerces to.
pub fn load_expenses<S: KeyValueStore + ?Sized>(store: &S) -> ExpenseBook {
    let raw = match store.get(EXPENSES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return ExpenseBook::default(),
        Err(e) => {
            warn!(key = EXPENSES_KEY, error = %e, "Error loading expenses, using empty lists");
            return ExpenseBook::default();
        }
    };

    let mut book: ExpenseBook = match serde_json::from_str(&raw) {
        Ok(book) => book,
        Err(e) => {
            warn!(key = EXPENSES_KEY, error = %e, "Malformed expenses record, using empty lists");
            return ExpenseBook::default();
        }
    };

    retain_valid_expenses(ExpenseKind::Fixed, &mut book.fixed);
    retain_valid_expenses(ExpenseKind::Variable, &mut book.variable);
    book
}

fn retain_valid_expenses(kind: ExpenseKind, expenses: &mut Vec<Expense>) {
    let mut seen = HashSet::new();
    expenses.retain(|expense| {
        if expense.name.trim().is_empty() || expense.amount.is_negative() {
            warn!(id = %expense.id, kind = %kind, "Skipping invalid stored expense");
            return false;
        }
        if !seen.insert(expense.id.clone()) {
            warn!(id = %expense.id, kind = %kind, "Skipping stored expense with duplicate id");
            return false;
        }
        true
    });
}

/// Write the expense book under its key
pub fn save_expenses<S: KeyValueStore + ?Sized>(
    store: &mut S,
    book: &ExpenseBook,
) -> RunwayResult<()> {
    let json = serde_json::to_string(book)
        .map_err(|e| RunwayError::Persistence(format!("Failed to serialize expenses: {}", e)))?;
    store.set(EXPENSES_KEY, &json)
}
