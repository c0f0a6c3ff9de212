//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_expense_book;
use crate::error::{RunwayError, RunwayResult};
use crate::models::{ExpenseBook, ExpenseId, ExpenseKind};
use crate::services::forms::parse_kind;
use crate::services::{ExpenseEditForm, ExpenseForm, LedgerStore};
use crate::storage::KeyValueStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a monthly expense
    Add {
        /// Expense type (fixed or variable)
        kind: String,
        /// Expense name
        name: String,
        /// Monthly amount (e.g., "1200.00")
        amount: String,
        /// Category (housing, utilities, food, transportation, healthcare, entertainment, other)
        #[arg(short, long, default_value = "other")]
        category: String,
    },
    /// List fixed and variable expenses
    List,
    /// Edit an expense
    Edit {
        /// Expense type (fixed or variable)
        kind: String,
        /// Expense name or ID
        expense: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New monthly amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Remove an expense
    Remove {
        /// Expense type (fixed or variable)
        kind: String,
        /// Expense name or ID
        expense: String,
    },
}

/// Resolve an expense within one partition by name, full id or unique id prefix
pub fn resolve_expense(
    book: &ExpenseBook,
    kind: ExpenseKind,
    identifier: &str,
) -> RunwayResult<ExpenseId> {
    if let Some(expense) = book.find_by_name(kind, identifier) {
        return Ok(expense.id.clone());
    }

    let identifier = identifier.trim();
    let partition = book.partition(kind);
    if let Some(expense) = partition.iter().find(|e| e.id.as_str() == identifier) {
        return Ok(expense.id.clone());
    }

    let mut matches = partition
        .iter()
        .filter(|e| !identifier.is_empty() && e.id.as_str().starts_with(identifier));
    match (matches.next(), matches.next()) {
        (Some(expense), None) => Ok(expense.id.clone()),
        (Some(_), Some(_)) => Err(RunwayError::Validation(format!(
            "Expense id prefix '{}' is ambiguous",
            identifier
        ))),
        _ => Err(RunwayError::expense_not_found(format!(
            "{} ({})",
            identifier,
            kind.to_string().to_lowercase()
        ))),
    }
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    ledger: &mut LedgerStore<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> RunwayResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            kind,
            name,
            amount,
            category,
        } => {
            let kind = parse_kind(&kind)?;
            let input = ExpenseForm {
                name: &name,
                amount: &amount,
                category: &category,
            }
            .parse()?;

            let expense = ledger.add_expense(kind, &input.name, input.amount, input.category)?;
            println!("Added {} expense: {}", kind.to_string().to_lowercase(), expense.name);
            println!("  Amount:   {} / month", expense.amount.format_with_symbol(symbol));
            println!("  Category: {}", expense.category);
            println!("  ID:       {}", expense.id);
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_book(ledger.snapshot().expenses, symbol));
        }

        ExpenseCommands::Edit {
            kind,
            expense,
            name,
            amount,
            category,
        } => {
            let kind = parse_kind(&kind)?;
            let id = resolve_expense(ledger.snapshot().expenses, kind, &expense)?;
            let patch = ExpenseEditForm {
                name: name.as_deref(),
                amount: amount.as_deref(),
                category: category.as_deref(),
            }
            .parse()?;

            if patch.is_empty() {
                println!("No changes specified. Use --name, --amount or --category.");
                return Ok(());
            }

            ledger.update_expense(kind, &id, &patch)?;
            if let Some(updated) = ledger.snapshot().expenses.get(kind, &id) {
                println!(
                    "Updated expense: {} ({} / month)",
                    updated.name,
                    updated.amount.format_with_symbol(symbol)
                );
            }
        }

        ExpenseCommands::Remove { kind, expense } => {
            let kind = parse_kind(&kind)?;
            let id = resolve_expense(ledger.snapshot().expenses, kind, &expense)?;
            let name = ledger
                .snapshot()
                .expenses
                .get(kind, &id)
                .map(|e| e.name.clone())
                .unwrap_or_default();

            ledger.remove_expense(kind, &id);
            println!("Removed expense: {}", name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory, Money};

    #[test]
    fn test_resolve_is_scoped_to_partition() {
        let mut book = ExpenseBook::default();
        book.fixed.push(Expense {
            id: ExpenseId::from_string("e-1"),
            name: "Rent".into(),
            amount: Money::from_cents(100),
            category: ExpenseCategory::Housing,
        });

        assert_eq!(
            resolve_expense(&book, ExpenseKind::Fixed, "rent").unwrap().as_str(),
            "e-1"
        );
        assert!(resolve_expense(&book, ExpenseKind::Variable, "rent")
            .unwrap_err()
            .is_not_found());
    }
}
