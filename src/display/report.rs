//! Report display formatting

use chrono::{DateTime, Utc};

use crate::config::settings::validate_date_format;
use crate::reports::{BudgetAnalysis, Burndown, FinancialBreakdown, IncomeProjection};

/// Overview, burn rate and expense distribution
pub fn format_summary(
    analysis: &BudgetAnalysis,
    breakdown: &FinancialBreakdown,
    last_updated: DateTime<Utc>,
    symbol: &str,
    date_format: &str,
) -> String {
    let money = |m: crate::models::Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str("Budget Overview\n");
    output.push_str("===============\n");
    output.push_str(&format!("  Total Budget:      {}\n", money(analysis.total_budget)));
    output.push_str(&format!("  Monthly Expenses:  {}\n", money(analysis.total_expenses)));
    output.push_str(&format!("  Remaining Budget:  {}\n", money(analysis.remaining_budget)));
    output.push_str(&format!("  Financial Runway:  {}\n", analysis.survival()));
    // an unrenderable strftime string would panic inside `format!`
    let date_format = match validate_date_format(date_format) {
        Ok(()) => date_format,
        Err(_) => "%Y-%m-%d",
    };
    output.push_str(&format!(
        "  Last Updated:      {}\n",
        last_updated.format(date_format)
    ));
    output.push('\n');

    output.push_str("Monthly Burn Rate\n");
    output.push_str(&format!(
        "  {} ({:.1}% of total budget){}\n",
        money(analysis.total_expenses),
        analysis.budget_usage,
        if analysis.is_over_budget() {
            " OVER BUDGET"
        } else {
            ""
        }
    ));
    output.push_str(&format!("  {}\n", progress_bar(analysis.usage_display(), 30)));
    output.push('\n');

    output.push_str("Expense Distribution\n");
    output.push_str(&format!(
        "  Fixed:     {:>12}  {:>5.1}% of monthly expenses\n",
        money(analysis.fixed_expenses),
        analysis.fixed_percentage
    ));
    output.push_str(&format!(
        "  Variable:  {:>12}  {:>5.1}% of monthly expenses\n",
        money(analysis.variable_expenses),
        analysis.variable_percentage
    ));
    output.push('\n');

    let rec = &breakdown.recommendations;
    output.push_str("Recommendations\n");
    output.push_str(&format!(
        "  Recommended savings:  {}\n",
        money(rec.recommended_savings)
    ));
    if rec.is_overspending {
        output.push_str(&format!(
            "  Overspending: cut {} to stay within budget\n",
            money(rec.suggested_cuts)
        ));
    }
    if rec.is_saving_enough {
        output.push_str("  Savings target met.\n");
    } else {
        output.push_str(&format!(
            "  Save {} more to reach the target\n",
            money(rec.additional_savings_possible)
        ));
    }

    output
}

/// Burndown table, one row per projected month
pub fn format_burndown(burndown: Burndown, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<9}  {:>14}  {:>14}  {:>14}  {:>14}\n",
        "Month", "Remaining", "Fixed", "Variable", "Total Spent"
    ));
    output.push_str(&format!(
        "{:-<9}  {:->14}  {:->14}  {:->14}  {:->14}\n",
        "", "", "", "", ""
    ));

    for point in burndown {
        output.push_str(&format!(
            "{:<9}  {:>14}  {:>14}  {:>14}  {:>14}\n",
            point.label(),
            point.remaining_budget.format_with_symbol(symbol),
            point.fixed_cumulative.format_with_symbol(symbol),
            point.variable_cumulative.format_with_symbol(symbol),
            point.spent().format_with_symbol(symbol),
        ));
    }

    output
}

/// Income split into spending and savings, with the health indicator
pub fn format_projections(projection: &IncomeProjection, symbol: &str) -> String {
    let rows = [
        ("Monthly Income", projection.monthly_income, projection.income_width),
        ("Fixed Expenses", projection.fixed_expenses, projection.fixed_width),
        ("Variable Expenses", projection.variable_expenses, projection.variable_width),
        ("Monthly Savings", projection.monthly_savings, projection.savings_width),
    ];

    let mut output = String::from("Budget Projections\n==================\n");
    for (label, value, width) in rows {
        output.push_str(&format!(
            "  {:<18} {:>12}  {}\n",
            label,
            value.format_with_symbol(symbol),
            bar(width, 40)
        ));
    }

    output.push('\n');
    output.push_str("Financial Health\n");
    output.push_str(&format!("  {}\n", projection.health));
    output.push_str(&format!(
        "  Emergency Fund: {} months of expenses covered\n",
        projection.emergency_fund_months
    ));
    output
}

/// `[#####.....]` for a 0-100 percentage
fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// Unframed bar scaled from a percentage of `width`
fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    "#".repeat(filled)
}
