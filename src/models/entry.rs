//! Ledger entry model
//!
//! Represents a single validated income or expense record. Entries are
//! constructed from the raw text the user typed at the prompts; construction
//! validates every field and fails atomically, so a partially-valid entry
//! never exists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{WalletError, WalletResult};

use super::category::Category;

/// Date format accepted at the prompts and used in the ledger file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single financial record
///
/// Fields are private: an entry is immutable once constructed, and the only
/// way to "change" one is to replace it wholesale through the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Calendar date of the transaction
    date: NaiveDate,

    /// Income or expense
    category: Category,

    /// Whole currency units, always >= 1
    amount: i64,

    /// Free-form note, unconstrained
    description: String,
}

impl Entry {
    /// Build an entry from the four raw text fields
    ///
    /// Validation runs in a fixed order (date, category, amount) and stops at
    /// the first failure, so only the earliest error is ever reported.
    pub fn from_input(
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> WalletResult<Self> {
        let date = parse_date(date)?;
        let category = Category::parse_input(category)?;
        let amount = parse_amount(amount)?;

        Ok(Self {
            date,
            category,
            amount,
            description: description.to_string(),
        })
    }

    /// Transaction date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Income or expense
    pub fn category(&self) -> Category {
        self.category
    }

    /// Amount in whole currency units
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Free-form description
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date:        {}", self.date.format(DATE_FORMAT))?;
        writeln!(f, "Category:    {}", self.category)?;
        writeln!(f, "Amount:      {}", self.amount)?;
        writeln!(f, "Description: {}", self.description)
    }
}

/// Parse a strict YYYY-MM-DD date
pub(crate) fn parse_date(input: &str) -> WalletResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| WalletError::InvalidDate(input.trim().to_string()))
}

/// Coerce an amount to an integer and enforce the minimum of 1
fn parse_amount(input: &str) -> WalletResult<i64> {
    let amount: i64 = input
        .trim()
        .parse()
        .map_err(|_| WalletError::InvalidAmount(input.trim().to_string()))?;

    if amount < 1 {
        return Err(WalletError::AmountTooSmall(amount));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry() {
        let entry = Entry::from_input("2024-01-15", "income", "1000", "Salary").unwrap();

        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(entry.category(), Category::Income);
        assert_eq!(entry.amount(), 1000);
        assert_eq!(entry.description(), "Salary");
    }

    #[test]
    fn test_category_is_canonicalized() {
        let entry = Entry::from_input("2024-01-15", "eXpEnSe", "50", "Coffee").unwrap();
        assert_eq!(entry.category().to_string(), "Expense");
    }

    #[test]
    fn test_invalid_date() {
        let err = Entry::from_input("15.01.2024", "income", "1000", "").unwrap_err();
        assert!(matches!(err, WalletError::InvalidDate(_)));

        let err = Entry::from_input("2024-02-30", "income", "1000", "").unwrap_err();
        assert!(matches!(err, WalletError::InvalidDate(_)));
    }

    #[test]
    fn test_invalid_category() {
        let err = Entry::from_input("2024-01-15", "salary", "1000", "").unwrap_err();
        assert!(matches!(err, WalletError::InvalidCategory(_)));
    }

    #[test]
    fn test_non_numeric_amount() {
        let err = Entry::from_input("2024-01-15", "income", "ten", "").unwrap_err();
        assert!(matches!(err, WalletError::InvalidAmount(_)));

        let err = Entry::from_input("2024-01-15", "income", "10.50", "").unwrap_err();
        assert!(matches!(err, WalletError::InvalidAmount(_)));
    }

    #[test]
    fn test_amount_below_minimum() {
        let err = Entry::from_input("2024-01-15", "income", "0", "").unwrap_err();
        assert!(matches!(err, WalletError::AmountTooSmall(0)));

        let err = Entry::from_input("2024-01-15", "income", "-5", "").unwrap_err();
        assert!(matches!(err, WalletError::AmountTooSmall(-5)));
    }

    #[test]
    fn test_validation_order_reports_date_first() {
        // Both the date and the category are wrong; only the date error
        // surfaces because validation short-circuits.
        let err = Entry::from_input("bad-date", "bad-category", "0", "").unwrap_err();
        assert!(matches!(err, WalletError::InvalidDate(_)));
    }

    #[test]
    fn test_empty_description_is_allowed() {
        let entry = Entry::from_input("2024-01-15", "expense", "1", "").unwrap();
        assert_eq!(entry.description(), "");
    }

    #[test]
    fn test_display_renders_one_field_per_line() {
        let entry = Entry::from_input("2024-01-15", "income", "1000", "Salary").unwrap();
        let rendered = entry.to_string();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Date:"));
        assert!(lines[0].ends_with("2024-01-15"));
        assert!(lines[1].ends_with("Income"));
        assert!(lines[2].ends_with("1000"));
        assert!(lines[3].ends_with("Salary"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let entry = Entry::from_input("2024-01-15", "income", "1000", "Зарплата").unwrap();

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }

    #[test]
    fn test_serialized_field_order_and_types() {
        let entry = Entry::from_input("2024-01-15", "income", "1000", "Salary").unwrap();
        let json = serde_json::to_string(&entry).unwrap();

        assert_eq!(
            json,
            r#"{"date":"2024-01-15","category":"Income","amount":1000,"description":"Salary"}"#
        );
    }
}
