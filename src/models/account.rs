//! Account model
//!
//! Represents a named store of money (bank, cash, savings) whose balance
//! contributes to the total budget.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Type of account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Bank account
    #[default]
    Bank,
    /// Cash/wallet
    Cash,
    /// Savings account
    Savings,
}

impl AccountType {
    /// All account types in display order
    pub const ALL: [AccountType; 3] = [Self::Bank, Self::Cash, Self::Savings];

    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bank" | "bank account" | "checking" => Some(Self::Bank),
            "cash" | "wallet" => Some(Self::Cash),
            "savings" | "saving" => Some(Self::Savings),
            _ => None,
        }
    }

    /// Lowercase identifier as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bank => "bank",
            Self::Cash => "cash",
            Self::Savings => "savings",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bank => write!(f, "Bank Account"),
            Self::Cash => write!(f, "Cash"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// A money-holding account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned by the ledger store
    pub id: AccountId,

    /// Account name (e.g., "Main Checking")
    pub name: String,

    /// Type of account
    #[serde(rename = "type", default)]
    pub account_type: AccountType,

    /// Current balance, never negative
    #[serde(default)]
    pub balance: Money,
}

impl Account {
    /// Create a new account with a fresh id
    pub fn new(name: impl Into<String>, account_type: AccountType, balance: Money) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
            balance,
        }
    }

    /// Apply the fields present in `patch`
    pub fn apply(&mut self, patch: &AccountPatch) {
        if let Some(name) = &patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(account_type) = patch.account_type {
            self.account_type = account_type;
        }
        if let Some(balance) = patch.balance {
            self.balance = balance;
        }
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        if self.balance.is_negative() {
            return Err(AccountValidationError::NegativeBalance);
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Mutable fields of an account; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub account_type: Option<AccountType>,
    pub balance: Option<Money>,
}

impl AccountPatch {
    /// True when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.account_type.is_none() && self.balance.is_none()
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeBalance,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name is required"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
            Self::NegativeBalance => write!(f, "Please enter a valid positive amount"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new("Checking", AccountType::Bank, Money::from_cents(10000));
        assert_eq!(account.name, "Checking");
        assert_eq!(account.account_type, AccountType::Bank);
        assert_eq!(account.balance.cents(), 10000);
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new("Valid Name", AccountType::Cash, Money::zero());
        assert!(account.validate().is_ok());

        account.name = "   ".into();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.name = "a".repeat(101);
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::NameTooLong(_))
        ));

        account.name = "Wallet".into();
        account.balance = Money::from_cents(-1);
        assert_eq!(
            account.validate(),
            Err(AccountValidationError::NegativeBalance)
        );
    }

    #[test]
    fn test_apply_patch() {
        let mut account = Account::new("Old", AccountType::Bank, Money::from_cents(500));
        let id = account.id.clone();

        account.apply(&AccountPatch {
            name: Some(" New ".into()),
            account_type: None,
            balance: Some(Money::from_cents(900)),
        });

        assert_eq!(account.id, id);
        assert_eq!(account.name, "New");
        assert_eq!(account.account_type, AccountType::Bank);
        assert_eq!(account.balance.cents(), 900);
    }

    #[test]
    fn test_account_type_parsing() {
        assert_eq!(AccountType::parse("bank"), Some(AccountType::Bank));
        assert_eq!(AccountType::parse("SAVINGS"), Some(AccountType::Savings));
        assert_eq!(AccountType::parse(" cash "), Some(AccountType::Cash));
        assert_eq!(AccountType::parse("credit"), None);
    }

    #[test]
    fn test_serialization_layout() {
        let account = Account {
            id: AccountId::from_string("1"),
            name: "Wallet".into(),
            account_type: AccountType::Cash,
            balance: Money::from_cents(2550),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "1", "name": "Wallet", "type": "cash", "balance": 25.5})
        );
    }

    #[test]
    fn test_display() {
        let account = Account::new("Rainy Day", AccountType::Savings, Money::zero());
        assert_eq!(format!("{}", account), "Rainy Day (Savings)");
    }
}
