//! Account CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_account_list;
use crate::error::{RunwayError, RunwayResult};
use crate::models::{AccountId, BudgetSnapshot};
use crate::services::{AccountEditForm, AccountForm, LedgerStore};
use crate::storage::KeyValueStore;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Add a new account
    Add {
        /// Account name
        name: String,
        /// Account type (bank, cash, savings)
        #[arg(short = 't', long = "type", default_value = "bank")]
        account_type: String,
        /// Balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// List all accounts
    List,
    /// Edit an account
    Edit {
        /// Account name or ID
        account: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New type
        #[arg(short = 't', long = "type")]
        account_type: Option<String>,
        /// New balance
        #[arg(short, long)]
        balance: Option<String>,
    },
    /// Delete an account
    Delete {
        /// Account name or ID
        account: String,
    },
}

/// Resolve an account by name (case-insensitive), full id or unique id prefix
pub fn resolve_account(budget: &BudgetSnapshot, identifier: &str) -> RunwayResult<AccountId> {
    if let Some(account) = budget.find_by_name(identifier) {
        return Ok(account.id.clone());
    }

    let identifier = identifier.trim();
    if let Some(account) = budget.accounts.iter().find(|a| a.id.as_str() == identifier) {
        return Ok(account.id.clone());
    }

    let mut matches = budget
        .accounts
        .iter()
        .filter(|a| !identifier.is_empty() && a.id.as_str().starts_with(identifier));
    match (matches.next(), matches.next()) {
        (Some(account), None) => Ok(account.id.clone()),
        (Some(_), Some(_)) => Err(RunwayError::Validation(format!(
            "Account id prefix '{}' is ambiguous",
            identifier
        ))),
        _ => Err(RunwayError::account_not_found(identifier)),
    }
}

/// Handle an account command
pub fn handle_account_command<S: KeyValueStore>(
    ledger: &mut LedgerStore<S>,
    settings: &Settings,
    cmd: AccountCommands,
) -> RunwayResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        AccountCommands::Add {
            name,
            account_type,
            balance,
        } => {
            let input = AccountForm {
                name: &name,
                account_type: &account_type,
                balance: &balance,
            }
            .parse()?;

            let account = ledger.add_account(&input.name, input.account_type, input.balance)?;

            println!("Added account: {}", account.name);
            println!("  Type:    {}", account.account_type);
            println!("  Balance: {}", account.balance.format_with_symbol(symbol));
            println!("  ID:      {}", account.id);
            println!(
                "Total budget: {}",
                ledger.snapshot().total_budget().format_with_symbol(symbol)
            );
        }

        AccountCommands::List => {
            print!("{}", format_account_list(ledger.snapshot().accounts(), symbol));
        }

        AccountCommands::Edit {
            account,
            name,
            account_type,
            balance,
        } => {
            let id = resolve_account(ledger.snapshot().budget, &account)?;
            let patch = AccountEditForm {
                name: name.as_deref(),
                account_type: account_type.as_deref(),
                balance: balance.as_deref(),
            }
            .parse()?;

            if patch.is_empty() {
                println!("No changes specified. Use --name, --type or --balance.");
                return Ok(());
            }

            ledger.update_account(&id, &patch)?;
            if let Some(updated) = ledger.snapshot().budget.get(&id) {
                println!("Updated account: {}", updated);
            }
            println!(
                "Total budget: {}",
                ledger.snapshot().total_budget().format_with_symbol(symbol)
            );
        }

        AccountCommands::Delete { account } => {
            let id = resolve_account(ledger.snapshot().budget, &account)?;
            let name = ledger
                .snapshot()
                .budget
                .get(&id)
                .map(|a| a.name.clone())
                .unwrap_or_default();

            ledger.delete_account(&id);
            println!("Deleted account: {}", name);
            println!(
                "Total budget: {}",
                ledger.snapshot().total_budget().format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
