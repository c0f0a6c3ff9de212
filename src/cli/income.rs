//! Income CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::RunwayResult;
use crate::services::forms::parse_income;
use crate::services::LedgerStore;
use crate::storage::KeyValueStore;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly income
    Set {
        /// Amount (e.g., "4500.00")
        amount: String,
    },
    /// Show the monthly income
    Show,
}

/// Handle an income command
pub fn handle_income_command<S: KeyValueStore>(
    ledger: &mut LedgerStore<S>,
    settings: &Settings,
    cmd: IncomeCommands,
) -> RunwayResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Set { amount } => {
            let income = parse_income(&amount)?;
            ledger.set_monthly_income(income)?;
            println!("Monthly income set to {}", income.format_with_symbol(symbol));
        }
        IncomeCommands::Show => {
            println!(
                "Monthly income: {}",
                ledger.snapshot().monthly_income().format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
