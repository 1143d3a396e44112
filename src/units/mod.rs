// Unit conversion for the Temperature, Weight and Distance categories

pub mod detector;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod request;
pub mod types;


pub use detector::{looks_like_quantity, parse_quantity};
pub use engine::{convert, ConversionEngine, UnitPolicy};
pub use error::{ConversionError, CONVERSION_ERROR_NOTICE, INVALID_VALUE_NOTICE};
pub use formatter::{format_value, render, OutputFormat, Report, DEFAULT_DECIMALS};
pub use parser::{parse_unit, parse_value, UnrecognizedUnit};
pub use request::{ConversionRequest, ConversionResult};
pub use types::{units_for, Category, Quantity, Unit};
