//! Business logic layer for wallet-cli

pub mod ledger;

pub use ledger::{BalanceSummary, EntryQuery, Ledger};
