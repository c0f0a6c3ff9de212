//! Input boundary
//!
//! Parses raw form/argument strings into typed values before they reach the
//! ledger store. Anything unparseable is a `Validation` error and nothing is
//! changed.

use crate::error::{RunwayError, RunwayResult};
use crate::models::{AccountPatch, AccountType, ExpenseCategory, ExpenseKind, ExpensePatch, Money};

/// Parse a required, non-empty name
pub fn parse_name(raw: &str, what: &str) -> RunwayResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(RunwayError::Validation(format!("{} name is required", what)));
    }
    Ok(name.to_string())
}

/// Parse an account balance (zero allowed, negative rejected)
pub fn parse_balance(raw: &str) -> RunwayResult<Money> {
    let balance = Money::parse(raw).map_err(|_| {
        RunwayError::Validation(format!(
            "Invalid balance '{}'. Please enter a valid positive amount",
            raw.trim()
        ))
    })?;
    if balance.is_negative() {
        return Err(RunwayError::Validation(
            "Please enter a valid positive amount".into(),
        ));
    }
    Ok(balance)
}

/// Parse an expense amount (must be strictly positive)
pub fn parse_expense_amount(raw: &str) -> RunwayResult<Money> {
    match Money::parse(raw) {
        Ok(amount) if amount.is_positive() => Ok(amount),
        _ => Err(RunwayError::Validation(format!(
            "Invalid amount '{}'. Please enter a valid amount",
            raw.trim()
        ))),
    }
}

/// Parse a monthly income figure (zero allowed)
pub fn parse_income(raw: &str) -> RunwayResult<Money> {
    match Money::parse(raw) {
        Ok(income) if !income.is_negative() => Ok(income),
        _ => Err(RunwayError::Validation(format!(
            "Invalid income '{}'. Please enter a non-negative amount",
            raw.trim()
        ))),
    }
}

pub fn parse_account_type(raw: &str) -> RunwayResult<AccountType> {
    AccountType::parse(raw).ok_or_else(|| {
        RunwayError::Validation(format!(
            "Invalid account type: '{}'. Valid types: bank, cash, savings",
            raw
        ))
    })
}

pub fn parse_category(raw: &str) -> RunwayResult<ExpenseCategory> {
    ExpenseCategory::parse(raw).ok_or_else(|| {
        let valid: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect();
        RunwayError::Validation(format!(
            "Invalid category: '{}'. Valid categories: {}",
            raw,
            valid.join(", ")
        ))
    })
}

pub fn parse_kind(raw: &str) -> RunwayResult<ExpenseKind> {
    ExpenseKind::parse(raw).ok_or_else(|| {
        RunwayError::Validation(format!(
            "Invalid expense type: '{}'. Use 'fixed' or 'variable'",
            raw
        ))
    })
}

/// Fields of the add-account form
#[derive(Debug, Clone, Copy)]
pub struct AccountForm<'a> {
    pub name: &'a str,
    pub account_type: &'a str,
    pub balance: &'a str,
}

/// A validated new account
#[derive(Debug, Clone, PartialEq)]
pub struct AccountInput {
    pub name: String,
    pub account_type: AccountType,
    pub balance: Money,
}

impl AccountForm<'_> {
    pub fn parse(&self) -> RunwayResult<AccountInput> {
        Ok(AccountInput {
            name: parse_name(self.name, "Account")?,
            account_type: parse_account_type(self.account_type)?,
            balance: parse_balance(self.balance)?,
        })
    }
}

/// Optional fields of the edit-account form
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountEditForm<'a> {
    pub name: Option<&'a str>,
    pub account_type: Option<&'a str>,
    pub balance: Option<&'a str>,
}

impl AccountEditForm<'_> {
    pub fn parse(&self) -> RunwayResult<AccountPatch> {
        Ok(AccountPatch {
            name: self.name.map(|n| parse_name(n, "Account")).transpose()?,
            account_type: self.account_type.map(parse_account_type).transpose()?,
            balance: self.balance.map(parse_balance).transpose()?,
        })
    }
}

/// Fields of the add-expense form
#[derive(Debug, Clone, Copy)]
pub struct ExpenseForm<'a> {
    pub name: &'a str,
    pub amount: &'a str,
    pub category: &'a str,
}

/// A validated new expense
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseInput {
    pub name: String,
    pub amount: Money,
    pub category: ExpenseCategory,
}

impl ExpenseForm<'_> {
    pub fn parse(&self) -> RunwayResult<ExpenseInput> {
        Ok(ExpenseInput {
            name: parse_name(self.name, "Expense")?,
            amount: parse_expense_amount(self.amount)?,
            category: parse_category(self.category)?,
        })
    }
}

/// Optional fields of the edit-expense form
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseEditForm<'a> {
    pub name: Option<&'a str>,
    pub amount: Option<&'a str>,
    pub category: Option<&'a str>,
}

impl ExpenseEditForm<'_> {
    pub fn parse(&self) -> RunwayResult<ExpensePatch> {
        Ok(ExpensePatch {
            name: self.name.map(|n| parse_name(n, "Expense")).transpose()?,
            amount: self.amount.map(parse_expense_amount).transpose()?,
            category: self.category.map(parse_category).transpose()?,
        })
    }
}
