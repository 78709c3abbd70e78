//! Custom error types for wallet-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for wallet-cli operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// The date field did not parse as a YYYY-MM-DD calendar date
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The category field was neither Income nor Expense
    #[error("Invalid category '{0}': must be Income or Expense")]
    InvalidCategory(String),

    /// The amount field was not a whole number
    #[error("Invalid amount '{0}': must be a whole number")]
    InvalidAmount(String),

    /// The amount was a number but below the minimum of 1
    #[error("Amount must be at least 1, got {0}")]
    AmountTooSmall(i64),

    /// A 1-based position outside the ledger's current bounds
    #[error("No entry at position {position}: the ledger holds {len} entries")]
    IndexOutOfRange { position: usize, len: usize },

    /// The ledger file exists but could not be decoded
    #[error("Corrupt ledger file: {0}")]
    CorruptStore(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl WalletError {
    /// Check if this error came from validating user-supplied entry fields
    ///
    /// The shell reports these and keeps the session running; everything
    /// else aborts the session.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::InvalidCategory(_)
                | Self::InvalidAmount(_)
                | Self::AmountTooSmall(_)
        )
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for wallet-cli operations
pub type WalletResult<T> = Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WalletError::InvalidDate("01.01.2024".into());
        assert_eq!(
            err.to_string(),
            "Invalid date '01.01.2024': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = WalletError::IndexOutOfRange { position: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "No entry at position 7: the ledger holds 3 entries"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(WalletError::AmountTooSmall(0).is_validation());
        assert!(WalletError::InvalidCategory("rent".into()).is_validation());
        assert!(!WalletError::CorruptStore("bad json".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let wallet_err: WalletError = io_err.into();
        assert!(matches!(wallet_err, WalletError::Io(_)));
    }
}
