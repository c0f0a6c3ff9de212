//! Budget burndown projection
//!
//! Month-by-month depletion of the total budget at the current burn, with
//! cumulative fixed and variable bands capped so they never overshoot the
//! budget that remains. The projection is an iterator recomputed from its
//! inputs; cloning it restarts the sequence.

use crate::models::{ExpenseBook, Money};
use crate::services::LedgerSnapshot;

use super::analysis::{survival_months, total_fixed_expenses, total_variable_expenses};

/// Last month index ever projected
pub const MAX_HORIZON: u32 = 12;

/// One month of the projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurndownPoint {
    /// Month index, 0 is the starting point
    pub month: u32,
    pub remaining_budget: Money,
    pub fixed_cumulative: Money,
    pub variable_cumulative: Money,
}

impl BurndownPoint {
    /// "Start" for month 0, "Month N" afterwards
    pub fn label(&self) -> String {
        if self.month == 0 {
            "Start".to_string()
        } else {
            format!("Month {}", self.month)
        }
    }

    /// Total consumed so far
    pub fn spent(&self) -> Money {
        self.fixed_cumulative + self.variable_cumulative
    }
}

/// Last month index to project for a given runway
///
/// `min(ceil(survival) + 1, 12)`; an infinite runway uses the cap.
pub fn horizon(survival_months: f64) -> u32 {
    if !survival_months.is_finite() {
        return MAX_HORIZON;
    }
    let months = survival_months.max(0.0).ceil() + 1.0;
    if months >= MAX_HORIZON as f64 {
        MAX_HORIZON
    } else {
        months as u32
    }
}

/// Iterator over the projected months `0..=horizon`
#[derive(Debug, Clone)]
pub struct Burndown {
    total_budget: Money,
    fixed: Money,
    variable: Money,
    horizon: u32,
    next_month: u32,
}

impl Burndown {
    pub fn new(total_budget: Money, fixed: Money, variable: Money) -> Self {
        let survival = survival_months(total_budget, fixed + variable);
        Self {
            total_budget,
            fixed,
            variable,
            horizon: horizon(survival),
            next_month: 0,
        }
    }

    pub fn compute(total_budget: Money, expenses: &ExpenseBook) -> Self {
        Self::new(
            total_budget,
            total_fixed_expenses(expenses),
            total_variable_expenses(expenses),
        )
    }

    pub fn from_snapshot(snapshot: &LedgerSnapshot<'_>) -> Self {
        Self::compute(snapshot.total_budget(), snapshot.expenses)
    }

    /// Last month index of the sequence
    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// The point for month `m`
    pub fn point(&self, month: u32) -> BurndownPoint {
        let m = i64::from(month);
        let burn = self.fixed + self.variable;

        let remaining_budget = (self.total_budget - burn * m).max(Money::zero());
        let fixed_cumulative = remaining_budget.min(self.fixed * m);
        let variable_cumulative = (remaining_budget - fixed_cumulative).min(self.variable * m);

        BurndownPoint {
            month,
            remaining_budget,
            fixed_cumulative,
            variable_cumulative,
        }
    }
}

impl Iterator for Burndown {
    type Item = BurndownPoint;

    fn next(&mut self) -> Option<BurndownPoint> {
        if self.next_month > self.horizon {
            return None;
        }
        let point = self.point(self.next_month);
        self.next_month += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.horizon + 1).saturating_sub(self.next_month) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Burndown {}
