//! Error type shared by every engine operation

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised when a caller violates an engine precondition
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid horizon: {months} months (must be at least 1)")]
    InvalidHorizon { months: u32 },

    #[error("Invalid installment count: {count} (must be at least 2 to split)")]
    InvalidInstallmentCount { count: u32 },

    #[error("Negative amount for {field}: {value}")]
    NegativeAmount { field: &'static str, value: String },

    #[error("Amount out of range: {value}")]
    AmountOutOfRange { value: String },

    #[error("Non-finite value for {field}")]
    NonFiniteInput { field: &'static str },

    #[error("Date out of range: {date} advanced by {months} months")]
    DateOutOfRange { date: NaiveDate, months: u32 },

    #[error("Load error: {0}")]
    Load(String),
}

impl From<csv::Error> for EngineError {
    fn from(e: csv::Error) -> Self {
        EngineError::Load(e.to_string())
    }
}

/// Result alias used across the crate
pub type EngineResult<T> = Result<T, EngineError>;
