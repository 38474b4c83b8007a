//! Conversion error types

use thiserror::Error;

/// Errors returned by the conversion engine
///
/// Every variant is scoped to a single conversion attempt and is recoverable
/// by correcting the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid unit '{unit}' for dimension '{dimension}'")]
    InvalidUnit { unit: String, dimension: String },

    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("Unsupported conversion from '{from}' to '{to}'")]
    UnsupportedConversion { from: String, to: String },

    #[error("Conversion from '{from}' to '{to}' is undefined")]
    ConversionUndefined { from: String, to: String },
}

impl ConversionError {
    /// Fixed message shown to the operator in place of a result
    pub fn user_message(&self) -> &'static str {
        match self {
            ConversionError::InvalidInput(_) => "Invalid input",
            ConversionError::InvalidUnit { .. } | ConversionError::UnknownDimension(_) => {
                "Invalid unit"
            }
            ConversionError::UnsupportedConversion { .. } => "Unsupported conversion",
            ConversionError::ConversionUndefined { .. } => "Invalid conversion",
        }
    }

    /// Stable snake_case code for structured responses
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::InvalidInput(_) => "invalid_input",
            ConversionError::InvalidUnit { .. } => "invalid_unit",
            ConversionError::UnknownDimension(_) => "unknown_dimension",
            ConversionError::UnsupportedConversion { .. } => "unsupported_conversion",
            ConversionError::ConversionUndefined { .. } => "conversion_undefined",
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
