//! Income projection and financial breakdown
//!
//! Secondary views over the ledger: how monthly income splits into fixed
//! spending, variable spending and savings, and the savings recommendations
//! derived from the total budget.

use std::fmt;

use crate::models::{ExpenseBook, Money};
use crate::services::LedgerSnapshot;

use super::analysis::{expense_percentage, total_fixed_expenses, total_variable_expenses};

/// Widest bar, in percent of the available width
pub const MAX_BAR_WIDTH: f64 = 85.0;

/// Months of savings assumed for the emergency-fund estimate
pub const EMERGENCY_FUND_MONTHS: i64 = 3;

/// Default share of the budget recommended as savings
pub const DEFAULT_SAVINGS_RATE: f64 = 0.20;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Emergency-fund health band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTier {
    Excellent,
    Good,
    Warning,
    Critical,
}

impl HealthTier {
    pub fn from_months(months: i64) -> Self {
        if months > 6 {
            Self::Excellent
        } else if months > 3 {
            Self::Good
        } else if months > 0 {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! You have a healthy emergency fund.",
            Self::Good => "Good. Consider building your emergency fund further.",
            Self::Warning => "Warning: Your emergency fund is low.",
            Self::Critical => "Critical: Start building an emergency fund.",
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Monthly income against monthly spending
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeProjection {
    pub monthly_income: Money,
    pub fixed_expenses: Money,
    pub variable_expenses: Money,
    /// Income minus expenses; negative when spending exceeds income
    pub monthly_savings: Money,
    pub income_width: f64,
    pub fixed_width: f64,
    pub variable_width: f64,
    pub savings_width: f64,
    /// Months of expenses covered by three months of savings
    pub emergency_fund_months: i64,
    pub health: HealthTier,
}

impl IncomeProjection {
    pub fn from_snapshot(snapshot: &LedgerSnapshot<'_>) -> Self {
        Self::compute(snapshot.monthly_income(), snapshot.expenses)
    }

    pub fn compute(monthly_income: Money, expenses: &ExpenseBook) -> Self {
        let fixed = total_fixed_expenses(expenses);
        let variable = total_variable_expenses(expenses);
        let total = fixed + variable;
        let monthly_savings = monthly_income - total;

        let width = |part: Money| {
            if monthly_income.is_positive() {
                part.cents() as f64 / monthly_income.cents() as f64 * MAX_BAR_WIDTH
            } else {
                0.0
            }
        };

        let emergency_fund_months = if total.is_positive() {
            (monthly_savings * EMERGENCY_FUND_MONTHS)
                .cents()
                .div_euclid(total.cents())
        } else {
            0
        };

        Self {
            monthly_income,
            fixed_expenses: fixed,
            variable_expenses: variable,
            monthly_savings,
            income_width: if monthly_income.is_positive() {
                MAX_BAR_WIDTH
            } else {
                0.0
            },
            fixed_width: width(fixed),
            variable_width: width(variable),
            savings_width: if monthly_savings.is_positive() {
                width(monthly_savings)
            } else {
                0.0
            },
            emergency_fund_months,
            health: HealthTier::from_months(emergency_fund_months),
        }
    }
}

/// Survival figures of the breakdown view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurvivalSummary {
    /// Months of runway, one decimal; 0 without expenses
    pub months: f64,
    pub full_months: i64,
    /// Budget left after the whole months are paid
    pub remaining_budget: Money,
}

/// Savings recommendations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendations {
    pub is_overspending: bool,
    pub is_saving_enough: bool,
    pub recommended_savings: Money,
    pub suggested_cuts: Money,
    pub additional_savings_possible: Money,
}

/// Budget against one month of expenses, with recommendations
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialBreakdown {
    pub total_budget: Money,
    pub total_expenses: Money,
    pub fixed_expenses: Money,
    pub variable_expenses: Money,
    pub monthly_savings: Money,
    pub survival: SurvivalSummary,
    /// Share of expenses, one decimal
    pub fixed_percentage: f64,
    pub variable_percentage: f64,
    pub recommendations: Recommendations,
}

impl FinancialBreakdown {
    pub fn from_snapshot(snapshot: &LedgerSnapshot<'_>, savings_rate: f64) -> Self {
        Self::compute(snapshot.total_budget(), snapshot.expenses, savings_rate)
    }

    pub fn compute(total_budget: Money, expenses: &ExpenseBook, savings_rate: f64) -> Self {
        let fixed = total_fixed_expenses(expenses);
        let variable = total_variable_expenses(expenses);
        let total = fixed + variable;
        let monthly_savings = total_budget - total;

        let (months, full_months) = if total.is_positive() {
            let raw = total_budget.cents() as f64 / total.cents() as f64;
            (raw, total_budget.cents().div_euclid(total.cents()))
        } else {
            (0.0, 0)
        };

        let recommended_savings = Money::from_units(total_budget.as_f64() * savings_rate);
        let is_overspending = total > total_budget;
        let is_saving_enough = monthly_savings >= recommended_savings;

        Self {
            total_budget,
            total_expenses: total,
            fixed_expenses: fixed,
            variable_expenses: variable,
            monthly_savings,
            survival: SurvivalSummary {
                months: round1(months),
                full_months,
                remaining_budget: total_budget - total * full_months,
            },
            fixed_percentage: round1(expense_percentage(fixed, total)),
            variable_percentage: round1(expense_percentage(variable, total)),
            recommendations: Recommendations {
                is_overspending,
                is_saving_enough,
                recommended_savings,
                suggested_cuts: if is_overspending {
                    total - total_budget
                } else {
                    Money::zero()
                },
                additional_savings_possible: if is_saving_enough {
                    Money::zero()
                } else {
                    recommended_savings - monthly_savings
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory};

    fn book(fixed: i64, variable: i64) -> ExpenseBook {
        let mut book = ExpenseBook::default();
        if fixed > 0 {
            book.fixed
                .push(Expense::new("f", Money::from_cents(fixed), ExpenseCategory::Housing));
        }
        if variable > 0 {
            book.variable
                .push(Expense::new("v", Money::from_cents(variable), ExpenseCategory::Food));
        }
        book
    }

    #[test]
    fn test_income_projection() {
        let projection = IncomeProjection::compute(Money::from_cents(400000), &book(200000, 100000));

        assert_eq!(projection.monthly_savings.cents(), 100000);
        assert_eq!(projection.income_width, 85.0);
        assert!((projection.fixed_width - 42.5).abs() < 1e-9);
        assert!((projection.variable_width - 21.25).abs() < 1e-9);
        assert!((projection.savings_width - 21.25).abs() < 1e-9);
        // 3 * 1000 / 3000 = 1
        assert_eq!(projection.emergency_fund_months, 1);
        assert_eq!(projection.health, HealthTier::Warning);
    }

    #[test]
    fn test_income_projection_without_income() {
        let projection = IncomeProjection::compute(Money::zero(), &book(50000, 0));
        assert_eq!(projection.income_width, 0.0);
        assert_eq!(projection.fixed_width, 0.0);
        assert_eq!(projection.savings_width, 0.0);
        assert_eq!(projection.monthly_savings.cents(), -50000);
        assert_eq!(projection.emergency_fund_months, -3);
        assert_eq!(projection.health, HealthTier::Critical);
    }

    #[test]
    fn test_income_projection_without_expenses() {
        let projection = IncomeProjection::compute(Money::from_cents(100000), &ExpenseBook::default());
        assert_eq!(projection.emergency_fund_months, 0);
        assert_eq!(projection.health, HealthTier::Critical);
    }

    #[test]
    fn test_health_tiers() {
        assert_eq!(HealthTier::from_months(7), HealthTier::Excellent);
        assert_eq!(HealthTier::from_months(6), HealthTier::Good);
        assert_eq!(HealthTier::from_months(3), HealthTier::Warning);
        assert_eq!(HealthTier::from_months(0), HealthTier::Critical);
    }

    #[test]
    fn test_breakdown() {
        let breakdown = FinancialBreakdown::compute(
            Money::from_cents(100000),
            &book(20000, 10000),
            DEFAULT_SAVINGS_RATE,
        );

        assert_eq!(breakdown.monthly_savings.cents(), 70000);
        assert_eq!(breakdown.survival.months, 3.3);
        assert_eq!(breakdown.survival.full_months, 3);
        assert_eq!(breakdown.survival.remaining_budget.cents(), 10000);
        assert_eq!(breakdown.fixed_percentage, 66.7);
        assert_eq!(breakdown.variable_percentage, 33.3);

        let rec = breakdown.recommendations;
        assert!(!rec.is_overspending);
        assert!(rec.is_saving_enough);
        assert_eq!(rec.recommended_savings.cents(), 20000);
        assert_eq!(rec.suggested_cuts, Money::zero());
        assert_eq!(rec.additional_savings_possible, Money::zero());
    }

    #[test]
    fn test_breakdown_overspending() {
        let breakdown =
            FinancialBreakdown::compute(Money::from_cents(50000), &book(60000, 0), DEFAULT_SAVINGS_RATE);

        let rec = breakdown.recommendations;
        assert!(rec.is_overspending);
        assert!(!rec.is_saving_enough);
        assert_eq!(rec.suggested_cuts.cents(), 10000);
        // recommended 100.00 - savings (-100.00)
        assert_eq!(rec.additional_savings_possible.cents(), 20000);
        assert_eq!(breakdown.survival.full_months, 0);
    }

    #[test]
    fn test_breakdown_without_expenses() {
        let breakdown =
            FinancialBreakdown::compute(Money::from_cents(50000), &ExpenseBook::default(), 0.2);
        assert_eq!(breakdown.survival.months, 0.0);
        assert_eq!(breakdown.fixed_percentage, 0.0);
        assert_eq!(breakdown.survival.remaining_budget.cents(), 50000);
    }
}
