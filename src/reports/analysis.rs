//! Budget analysis
//!
//! Pure aggregation over a ledger snapshot: expense totals, distribution
//! percentages, budget usage and the survival (runway) figure. Every ratio
//! with a zero denominator has a fixed fallback so no NaN or infinity leaks
//! into percentages.

use std::fmt;

use crate::models::{Expense, ExpenseBook, Money};
use crate::services::LedgerSnapshot;

/// Days per month used when splitting a fractional runway
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Sum of `amount` over a list of expenses
pub fn total_expenses(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

pub fn total_fixed_expenses(book: &ExpenseBook) -> Money {
    total_expenses(&book.fixed)
}

pub fn total_variable_expenses(book: &ExpenseBook) -> Money {
    total_expenses(&book.variable)
}

/// Fixed plus variable: the monthly burn
pub fn total_monthly_expenses(book: &ExpenseBook) -> Money {
    total_fixed_expenses(book) + total_variable_expenses(book)
}

/// `part / total * 100`, or 0 when `total` is zero
pub fn expense_percentage(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    part.cents() as f64 / total.cents() as f64 * 100.0
}

/// Share of the budget consumed by one month of expenses, 0 without a budget
///
/// Values above 100 mean over budget.
pub fn budget_usage_percentage(total_expenses: Money, total_budget: Money) -> f64 {
    if !total_budget.is_positive() {
        return 0.0;
    }
    total_expenses.cents() as f64 / total_budget.cents() as f64 * 100.0
}

/// Months the budget lasts at the current burn
///
/// `f64::INFINITY` when there are no expenses.
pub fn survival_months(total_budget: Money, total_monthly_expenses: Money) -> f64 {
    if total_monthly_expenses.is_zero() {
        return f64::INFINITY;
    }
    (total_budget.cents() as f64 / total_monthly_expenses.cents() as f64).max(0.0)
}

/// A runway split into whole months and leftover days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurvivalTime {
    /// No expenses: the budget lasts indefinitely
    Indefinite,
    /// Nothing left
    Zero,
    Span { months: u64, days: u32 },
}

impl SurvivalTime {
    /// Split `months` using a 30-day month
    pub fn from_months(months: f64) -> Self {
        if months.is_infinite() && months > 0.0 {
            return Self::Indefinite;
        }
        if months.is_nan() || months <= 0.0 {
            return Self::Zero;
        }

        let full = months.floor();
        let days = ((months - full) * DAYS_PER_MONTH).round() as u32;
        Self::Span {
            months: full as u64,
            days,
        }
    }
}

impl fmt::Display for SurvivalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = |n: u64| if n == 1 { "" } else { "s" };
        match *self {
            Self::Indefinite => write!(f, "N/A (no expenses)"),
            Self::Zero => write!(f, "0 months"),
            Self::Span { months: 0, days } => write!(f, "{} days", days),
            Self::Span { months, days: 0 } => write!(f, "{} month{}", months, plural(months)),
            Self::Span { months, days } => {
                write!(f, "{} month{} and {} days", months, plural(months), days)
            }
        }
    }
}

/// Human-readable runway, e.g. "3 months and 10 days"
pub fn format_survival(months: f64) -> String {
    SurvivalTime::from_months(months).to_string()
}

/// Derived figures for the overview and analysis views
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAnalysis {
    pub total_budget: Money,
    pub fixed_expenses: Money,
    pub variable_expenses: Money,
    /// Monthly burn
    pub total_expenses: Money,
    /// Budget left after one month of expenses; negative when over budget
    pub remaining_budget: Money,
    pub fixed_percentage: f64,
    pub variable_percentage: f64,
    /// Unclamped usage of the total budget
    pub budget_usage: f64,
    pub survival_months: f64,
}

impl BudgetAnalysis {
    pub fn from_snapshot(snapshot: &LedgerSnapshot<'_>) -> Self {
        Self::compute(snapshot.total_budget(), snapshot.expenses)
    }

    pub fn compute(total_budget: Money, expenses: &ExpenseBook) -> Self {
        let fixed_expenses = total_fixed_expenses(expenses);
        let variable_expenses = total_variable_expenses(expenses);
        let total_expenses = fixed_expenses + variable_expenses;

        Self {
            total_budget,
            fixed_expenses,
            variable_expenses,
            total_expenses,
            remaining_budget: total_budget - total_expenses,
            fixed_percentage: expense_percentage(fixed_expenses, total_expenses),
            variable_percentage: expense_percentage(variable_expenses, total_expenses),
            budget_usage: budget_usage_percentage(total_expenses, total_budget),
            survival_months: survival_months(total_budget, total_expenses),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.budget_usage > 100.0
    }

    /// Usage clamped to 100 for progress display
    pub fn usage_display(&self) -> f64 {
        self.budget_usage.min(100.0)
    }

    pub fn survival(&self) -> SurvivalTime {
        SurvivalTime::from_months(self.survival_months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;

    fn book(fixed: &[i64], variable: &[i64]) -> ExpenseBook {
        let mk = |cents: &i64| Expense::new("e", Money::from_cents(*cents), ExpenseCategory::Other);
        ExpenseBook {
            fixed: fixed.iter().map(mk).collect(),
            variable: variable.iter().map(mk).collect(),
        }
    }

    #[test]
    fn test_empty_partitions_sum_to_zero() {
        let empty = ExpenseBook::default();
        assert_eq!(total_fixed_expenses(&empty), Money::zero());
        assert_eq!(total_variable_expenses(&empty), Money::zero());
        assert_eq!(total_monthly_expenses(&empty), Money::zero());
    }

    #[test]
    fn test_percentage_of_zero_total_is_zero() {
        assert_eq!(expense_percentage(Money::from_cents(500), Money::zero()), 0.0);
        assert_eq!(expense_percentage(Money::zero(), Money::zero()), 0.0);
        assert_eq!(
            expense_percentage(Money::from_cents(25), Money::from_cents(100)),
            25.0
        );
    }

    #[test]
    fn test_budget_usage() {
        assert_eq!(budget_usage_percentage(Money::from_cents(100), Money::zero()), 0.0);
        assert_eq!(
            budget_usage_percentage(Money::from_cents(300), Money::from_cents(200)),
            150.0
        );
    }

    #[test]
    fn test_survival_months_edges() {
        assert_eq!(survival_months(Money::from_cents(1000), Money::zero()), f64::INFINITY);
        assert_eq!(survival_months(Money::zero(), Money::zero()), f64::INFINITY);
        assert_eq!(survival_months(Money::zero(), Money::from_cents(500)), 0.0);
    }

    #[test]
    fn test_reference_scenario() {
        let analysis = BudgetAnalysis::compute(Money::from_cents(100000), &book(&[20000], &[10000]));

        assert_eq!(analysis.fixed_expenses.cents(), 20000);
        assert_eq!(analysis.variable_expenses.cents(), 10000);
        assert_eq!(analysis.total_expenses.cents(), 30000);
        assert!((analysis.survival_months - 10.0 / 3.0).abs() < 1e-12);
        assert!((analysis.budget_usage - 30.0).abs() < 1e-12);
        assert_eq!(analysis.remaining_budget.cents(), 70000);
        assert!(!analysis.is_over_budget());
        assert_eq!(analysis.survival().to_string(), "3 months and 10 days");
    }

    #[test]
    fn test_over_budget_clamps_display_only() {
        let analysis = BudgetAnalysis::compute(Money::from_cents(10000), &book(&[15000], &[]));
        assert!(analysis.is_over_budget());
        assert_eq!(analysis.budget_usage, 150.0);
        assert_eq!(analysis.usage_display(), 100.0);
        assert_eq!(analysis.remaining_budget.cents(), -5000);
    }

    #[test]
    fn test_no_expenses() {
        let analysis = BudgetAnalysis::compute(Money::zero(), &ExpenseBook::default());
        assert_eq!(analysis.budget_usage, 0.0);
        assert_eq!(analysis.fixed_percentage, 0.0);
        assert!(analysis.survival_months.is_infinite());
    }

    #[test]
    fn test_format_survival() {
        assert_eq!(format_survival(f64::INFINITY), "N/A (no expenses)");
        assert_eq!(format_survival(0.0), "0 months");
        assert_eq!(format_survival(0.5), "15 days");
        assert_eq!(format_survival(1.0), "1 month");
        assert_eq!(format_survival(2.0), "2 months");
        assert_eq!(format_survival(1.1), "1 month and 3 days");
        assert_eq!(format_survival(0.99), "30 days");
        assert_eq!(format_survival(1.99), "1 month and 30 days");
    }
}
