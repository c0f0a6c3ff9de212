//! Reports module
//!
//! Read-only views derived from a ledger snapshot. Nothing here mutates or
//! persists state.

pub mod analysis;
pub mod burndown;
pub mod projections;

pub use analysis::{
    budget_usage_percentage, expense_percentage, format_survival, survival_months,
    total_fixed_expenses, total_monthly_expenses, total_variable_expenses, BudgetAnalysis,
    SurvivalTime,
};
pub use burndown::{Burndown, BurndownPoint};
pub use projections::{FinancialBreakdown, HealthTier, IncomeProjection};
