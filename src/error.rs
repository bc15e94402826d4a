//! Error types for sqlconvert

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting values to or from text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Input reduced to no digits, or to digits that are all zero
    #[error("no date entered: {input:?}")]
    EmptyDate { input: String },

    /// No split or field order produced a valid calendar date
    #[error("invalid date format: {input:?}")]
    NoValidFormat { input: String },

    /// Text could not be read as a number of the requested type
    #[error("cannot convert '{input}' to {target}")]
    InvalidNumber { input: String, target: &'static str },

    /// Text is not an ISO-compact date/time
    #[error("cannot convert '{input}' to a date/time")]
    InvalidDateTime { input: String },

    /// Rounding was asked for a negative number of decimal places
    #[error("number of decimal places must be non-negative, got {0}")]
    NegativePrecision(i32),

    /// Version text is not `major.minor[.build[.revision]]`
    #[error("invalid version string: {input:?}")]
    InvalidVersion { input: String },

    /// Float has no exact decimal counterpart (NaN, infinite, out of range)
    #[error("{value} cannot be represented as a decimal")]
    NotRepresentable { value: f64 },
}
