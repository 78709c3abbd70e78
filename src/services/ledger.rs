//! Ledger operations
//!
//! The ledger is the ordered collection of entries, addressed by the same
//! 1-based positions the user sees on screen. Positions are dense and
//! contiguous: deleting an entry renumbers everything after it, because a
//! position is derived from the current index, never stored.

use chrono::NaiveDate;
use std::fmt;

use crate::error::{WalletError, WalletResult};
use crate::models::{Category, Entry};

/// Ordered, position-addressed collection of entries
///
/// Rebuilt from the store at the start of every menu cycle and discarded
/// after the mutation is flushed back.
pub struct Ledger {
    entries: Vec<Entry>,
}

/// A field/value pair to match entries against
///
/// The set of searchable fields is closed, so the query is an enum carrying
/// an already-parsed value; matching is strict typed equality, with no
/// substring or case-insensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryQuery {
    /// Match entries on this exact date
    Date(NaiveDate),
    /// Match entries with this category
    Category(Category),
    /// Match entries with this exact amount
    Amount(i64),
}

impl EntryQuery {
    /// Check whether an entry matches this query
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Self::Date(date) => entry.date() == *date,
            Self::Category(category) => entry.category() == *category,
            Self::Amount(amount) => entry.amount() == *amount,
        }
    }
}

/// Income, expense, and net totals over the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BalanceSummary {
    /// Sum of amounts across income entries
    pub income: i64,
    /// Sum of amounts across expense entries
    pub expense: i64,
}

impl BalanceSummary {
    /// Net balance: income minus expense
    pub fn net(&self) -> i64 {
        self.income - self.expense
    }
}

impl fmt::Display for BalanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Balance: {}", self.net())?;
        writeln!(f, "Income:  {}", self.income)?;
        writeln!(f, "Expense: {}", self.expense)
    }
}

impl Ledger {
    /// Create a ledger over an existing entry collection
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ledger has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The backing collection, in storage order
    ///
    /// This is what gets flushed back to the store after a mutation.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Append an entry at the end
    ///
    /// No duplicate check: identical entries are legitimate (two coffees on
    /// the same day).
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Replace the entry at `position` wholesale
    ///
    /// There is no partial-field update; the caller constructs a complete
    /// replacement entry.
    pub fn edit(&mut self, position: usize, entry: Entry) -> WalletResult<()> {
        let index = self.index_of(position)?;
        self.entries[index] = entry;
        Ok(())
    }

    /// Remove the entry at `position`, shifting later entries down
    ///
    /// Returns the removed entry so the caller can echo what was deleted.
    pub fn delete(&mut self, position: usize) -> WalletResult<Entry> {
        let index = self.index_of(position)?;
        Ok(self.entries.remove(index))
    }

    /// All entries paired with their current 1-based positions
    pub fn list_all(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index + 1, entry))
    }

    /// The single entry at `position`
    pub fn get_one(&self, position: usize) -> WalletResult<&Entry> {
        let index = self.index_of(position)?;
        Ok(&self.entries[index])
    }

    /// Entries matching the query, with their original positions and order
    pub fn filter(&self, query: &EntryQuery) -> Vec<(usize, &Entry)> {
        self.list_all()
            .filter(|(_, entry)| query.matches(entry))
            .collect()
    }

    /// Total income, total expense, and the net between them
    pub fn balance(&self) -> BalanceSummary {
        let mut summary = BalanceSummary::default();
        for entry in &self.entries {
            if entry.category().is_income() {
                summary.income += entry.amount();
            } else {
                summary.expense += entry.amount();
            }
        }
        summary
    }

    /// Convert a 1-based position into a checked 0-based index
    fn index_of(&self, position: usize) -> WalletResult<usize> {
        if position == 0 || position > self.entries.len() {
            return Err(WalletError::IndexOutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        Ok(position - 1)
    }
}
