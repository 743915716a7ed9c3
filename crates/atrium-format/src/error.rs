//! Error types for the formatting crate.

use thiserror::Error;

/// Errors that can occur while formatting display values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The currency code is not a recognized ISO 4217 transactional code.
    #[error("unrecognized ISO 4217 currency code: {code:?}")]
    InvalidCurrencyCode { code: String },

    /// The amount is NaN or infinite and cannot be shown as money.
    #[error("non-finite amount cannot be formatted as currency")]
    NonFiniteAmount,
}

/// Result type for formatting operations.
pub type FormatResult<T> = Result<T, FormatError>;
