//! Expense display formatting

use crate::models::{Expense, ExpenseBook, ExpenseKind};
use crate::reports::analysis::total_expenses;

/// Format one partition as a table with a subtotal
pub fn format_expense_partition(kind: ExpenseKind, expenses: &[Expense], symbol: &str) -> String {
    let mut output = format!("{} Expenses\n", kind);

    if expenses.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    let name_width = expenses
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    for expense in expenses {
        output.push_str(&format!(
            "  {:<8}  {:<name_width$}  {:<16}  {:>12} / month\n",
            expense.id.short(),
            expense.name,
            expense.category.to_string(),
            expense.amount.format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "  Subtotal: {}\n",
        total_expenses(expenses).format_with_symbol(symbol)
    ));
    output
}

/// Format both partitions
pub fn format_expense_book(book: &ExpenseBook, symbol: &str) -> String {
    let mut output = format_expense_partition(ExpenseKind::Fixed, &book.fixed, symbol);
    output.push('\n');
    output.push_str(&format_expense_partition(
        ExpenseKind::Variable,
        &book.variable,
        symbol,
    ));
    output
}
