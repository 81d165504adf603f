//! Error types for billcalclib

use thiserror::Error;

/// Errors that can occur while building or reporting a bill
#[derive(Error, Debug)]
pub enum BillError {
    /// Party count is zero or negative
    #[error("invalid party count {0}: the bill must be split at least one way")]
    InvalidPartyCount(i64),

    /// Cost token is not a finite decimal number
    #[error("invalid cost '{value}' for '{label}': not a decimal number")]
    InvalidCost { label: String, value: String },

    /// Label/cost tokens did not pair up
    #[error("expected [label] [cost] pairs, got {0} tokens (unpaired trailing label)")]
    MalformedInput(usize),

    /// Sum of costs exceeds the decimal range
    #[error("total cost overflows the supported decimal range")]
    Overflow,
}
