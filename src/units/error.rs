use crate::units::types::Category;
use thiserror::Error;

/// Notice shown when the raw input is not a number
pub const INVALID_VALUE_NOTICE: &str = "Please enter a valid value";
/// Notice shown for any other failed conversion
pub const CONVERSION_ERROR_NOTICE: &str = "Conversion error";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Invalid value: '{0}'")]
    InvalidValue(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: Category, unit: String },
    // Label that names no unit of any category, so there is no category to report
    #[error("Unrecognized unit: {0}")]
    UnrecognizedUnit(String),
    #[error("Result of converting {value:e} is out of range")]
    OutOfRange { value: f64 },
}

impl ConversionError {
    /// Whether the error comes from user input rather than a malformed caller
    pub fn is_input_error(&self) -> bool {
        matches!(self, ConversionError::InvalidValue(_))
    }

    /// User-facing line for this error
    pub fn notice(&self) -> String {
        if self.is_input_error() {
            INVALID_VALUE_NOTICE.to_string()
        } else {
            format!("{}: {}", CONVERSION_ERROR_NOTICE, self)
        }
    }
}
