//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_burndown, format_projections, format_summary};
use crate::error::RunwayResult;
use crate::reports::{BudgetAnalysis, Burndown, FinancialBreakdown, IncomeProjection};
use crate::services::LedgerStore;
use crate::storage::KeyValueStore;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Budget overview, burn rate and expense distribution
    Summary,
    /// Month-by-month budget depletion
    Burndown,
    /// Monthly income against expenses
    Projections,
}

/// Handle a report command
pub fn handle_report_command<S: KeyValueStore>(
    ledger: &LedgerStore<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> RunwayResult<()> {
    let snapshot = ledger.snapshot();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary => {
            let analysis = BudgetAnalysis::from_snapshot(&snapshot);
            let breakdown =
                FinancialBreakdown::from_snapshot(&snapshot, settings.recommended_savings_rate);
            print!(
                "{}",
                format_summary(
                    &analysis,
                    &breakdown,
                    snapshot.budget.last_updated,
                    symbol,
                    &settings.date_format,
                )
            );
        }
        ReportCommands::Burndown => {
            print!("{}", format_burndown(Burndown::from_snapshot(&snapshot), symbol));
        }
        ReportCommands::Projections => {
            let projection = IncomeProjection::from_snapshot(&snapshot);
            print!("{}", format_projections(&projection, symbol));
        }
    }

    Ok(())
}
