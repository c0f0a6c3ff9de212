//! Expense model
//!
//! A recurring monthly obligation, filed under either the fixed or the
//! variable partition of the expense book.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Spending category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Housing,
    Utilities,
    Food,
    Transportation,
    Healthcare,
    Entertainment,
    #[default]
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 7] = [
        Self::Housing,
        Self::Utilities,
        Self::Food,
        Self::Transportation,
        Self::Healthcare,
        Self::Entertainment,
        Self::Other,
    ];

    /// Parse a category from its identifier (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Lowercase identifier as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Utilities => "utilities",
            Self::Food => "food",
            Self::Transportation => "transportation",
            Self::Healthcare => "healthcare",
            Self::Entertainment => "entertainment",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Food => "Food & Groceries",
            Self::Transportation => "Transportation",
            Self::Healthcare => "Healthcare",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Which partition an expense belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    Fixed,
    Variable,
}

impl ExpenseKind {
    /// Parse the partition tag
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Some(Self::Fixed),
            "variable" => Some(Self::Variable),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Variable => write!(f, "Variable"),
        }
    }
}

/// A monthly expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    /// Monthly amount
    #[serde(default)]
    pub amount: Money,
    #[serde(default)]
    pub category: ExpenseCategory,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(name: impl Into<String>, amount: Money, category: ExpenseCategory) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            category,
        }
    }

    /// Apply the fields present in `patch`
    pub fn apply(&mut self, patch: &ExpensePatch) {
        if let Some(name) = &patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

/// Mutable fields of an expense; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<ExpenseCategory>,
}

impl ExpensePatch {
    /// True when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount.is_none() && self.category.is_none()
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter an expense name"),
            Self::NonPositiveAmount => write!(f, "Please enter a valid amount"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
