//! Account display formatting
//!
//! Formats accounts for terminal output in table views.

use crate::models::{Account, Money};

/// Format a list of accounts with a total row
pub fn format_account_list(accounts: &[Account], symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let type_width = accounts
        .iter()
        .map(|a| a.account_type.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<name_width$}  {:<type_width$}  {:>14}\n",
        "ID",
        "Name",
        "Type",
        "Balance",
        name_width = name_width,
        type_width = type_width,
    ));

    let separator = format!(
        "{:-<8}  {:-<name_width$}  {:-<type_width$}  {:->14}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
    );
    output.push_str(&separator);

    for account in accounts {
        output.push_str(&format!(
            "{:<8}  {:<name_width$}  {:<type_width$}  {:>14}\n",
            account.id.short(),
            account.name,
            account.account_type.to_string(),
            account.balance.format_with_symbol(symbol),
            name_width = name_width,
            type_width = type_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();
    output.push_str(&separator);
    output.push_str(&format!(
        "{:<8}  {:<name_width$}  {:<type_width$}  {:>14}\n",
        "",
        "TOTAL",
        "",
        total.format_with_symbol(symbol),
        name_width = name_width,
        type_width = type_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, AccountType};

    #[test]
    fn test_empty_list() {
        assert_eq!(format_account_list(&[], "$"), "No accounts found.\n");
    }

    #[test]
    fn test_list_has_total() {
        let accounts = vec![
            Account {
                id: AccountId::from_string("aaaaaaaa-1"),
                name: "Checking".into(),
                account_type: AccountType::Bank,
                balance: Money::from_cents(100000),
            },
            Account {
                id: AccountId::from_string("bbbbbbbb-2"),
                name: "Wallet".into(),
                account_type: AccountType::Cash,
                balance: Money::from_cents(2550),
            },
        ];
        let output = format_account_list(&accounts, "$");
        assert!(output.contains("aaaaaaaa"));
        assert!(output.contains("Bank Account"));
        assert!(output.contains("$1000.00"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$1025.50"));
    }
}
