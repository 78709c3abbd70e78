//! Entry category model
//!
//! Every ledger entry is classified as either income or expense. The set is
//! closed, so the category is an enum rather than a validated string.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{WalletError, WalletResult};

/// Binary classification of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl Category {
    /// Parse a category from user input, case-insensitively
    ///
    /// Accepts any casing of the canonical labels ("income", "EXPENSE", ...).
    /// The parsed value always renders in title case, so canonicalization is
    /// a construction guarantee.
    pub fn parse_input(input: &str) -> WalletResult<Self> {
        match input.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(WalletError::InvalidCategory(input.trim().to_string())),
        }
    }

    /// Check if this is the income category
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        assert_eq!(Category::parse_input("Income").unwrap(), Category::Income);
        assert_eq!(Category::parse_input("Expense").unwrap(), Category::Expense);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::parse_input("income").unwrap(), Category::Income);
        assert_eq!(Category::parse_input("EXPENSE").unwrap(), Category::Expense);
        assert_eq!(Category::parse_input("  eXpEnSe ").unwrap(), Category::Expense);
    }

    #[test]
    fn test_parse_rejects_unknown_labels() {
        let err = Category::parse_input("groceries").unwrap_err();
        assert!(matches!(err, WalletError::InvalidCategory(_)));
        assert_eq!(
            err.to_string(),
            "Invalid category 'groceries': must be Income or Expense"
        );
    }

    #[test]
    fn test_display_is_title_case() {
        assert_eq!(Category::parse_input("income").unwrap().to_string(), "Income");
        assert_eq!(Category::parse_input("expense").unwrap().to_string(), "Expense");
    }

    #[test]
    fn test_serializes_as_canonical_label() {
        assert_eq!(serde_json::to_string(&Category::Income).unwrap(), "\"Income\"");
        let parsed: Category = serde_json::from_str("\"Expense\"").unwrap();
        assert_eq!(parsed, Category::Expense);
    }
}
