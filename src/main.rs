use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use runway::cli::{
    handle_account_command, handle_expense_command, handle_income_command, handle_report_command,
};
use runway::config::{RunwayPaths, Settings};
use runway::logging;
use runway::services::LedgerStore;
use runway::storage::{FileStore, KeyValueStore};

#[derive(Parser)]
#[command(
    name = "runway",
    version,
    about = "Track how long your money lasts",
    long_about = "Runway keeps a list of accounts and monthly expenses, then reports \
                  how many months your combined balance will cover, month by month \
                  depletion, and how your income compares to your spending."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(runway::cli::AccountCommands),

    /// Fixed and variable expense commands
    #[command(subcommand)]
    Expense(runway::cli::ExpenseCommands),

    /// Monthly income commands
    #[command(subcommand)]
    Income(runway::cli::IncomeCommands),

    /// Budget reports
    #[command(subcommand)]
    Report(runway::cli::ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let paths = RunwayPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    let mut ledger = LedgerStore::open(FileStore::new(paths.data_dir()));

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&mut ledger, &settings, cmd)?;
            warn_unsaved(&ledger);
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut ledger, &settings, cmd)?;
            warn_unsaved(&ledger);
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&mut ledger, &settings, cmd)?;
            warn_unsaved(&ledger);
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&ledger, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Runway Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:          {}", settings.currency_symbol);
            println!("  Date format:              {}", settings.date_format);
            println!(
                "  Recommended savings rate: {:.0}%",
                settings.recommended_savings_rate * 100.0
            );
        }
        None => {
            println!("Runway - how long does your money last?");
            println!();
            println!("Run 'runway --help' for usage information.");
            println!("Start with 'runway account add <name> --balance <amount>'.");
        }
    }

    Ok(())
}

/// The in-memory change already happened; only the write was lost
fn warn_unsaved<S: KeyValueStore>(ledger: &LedgerStore<S>) {
    if !ledger.is_persisted() {
        eprintln!(
            "Warning: changes could not be saved ({}). They will be lost when runway exits.",
            ledger.unsaved_keys().join(", ")
        );
    }
}
