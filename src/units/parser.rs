// Label and raw value parsing for the boundary layer

use crate::units::error::ConversionError;
use crate::units::types::{Category, Unit};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized unit label: {0}")]
pub struct UnrecognizedUnit(pub String);

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temp" => Ok(Category::Temperature),
            "weight" | "mass" => Ok(Category::Weight),
            "distance" | "length" => Ok(Category::Distance),
            _ => Err(ConversionError::UnknownCategory(s.to_string())),
        }
    }
}

impl FromStr for Unit {
    type Err = UnrecognizedUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "celsius" | "degc" | "°c" | "c" => Ok(Unit::Celsius),
            "fahrenheit" | "degf" | "°f" | "f" => Ok(Unit::Fahrenheit),
            "kelvin" | "kelvins" | "k" => Ok(Unit::Kelvin),
            "kilograms" | "kilogram" | "kilo" | "kilos" | "kg" => Ok(Unit::Kilograms),
            "pounds" | "pound" | "lb" | "lbs" => Ok(Unit::Pounds),
            "ounces" | "ounce" | "oz" => Ok(Unit::Ounces),
            "grams" | "gram" | "g" => Ok(Unit::Grams),
            "meters" | "meter" | "metres" | "metre" | "m" => Ok(Unit::Meters),
            "kilometers" | "kilometer" | "kilometres" | "kilometre" | "km" => {
                Ok(Unit::Kilometers)
            }
            "miles" | "mile" | "mi" => Ok(Unit::Miles),
            _ => Err(UnrecognizedUnit(s.to_string())),
        }
    }
}

/// Parse raw user input into a finite number.
/// Empty, non-numeric, NaN and infinite input are all rejected.
pub fn parse_value(raw: &str) -> Result<f64, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::InvalidValue(raw.to_string()));
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConversionError::InvalidValue(raw.to_string())),
    }
}

/// Parse a unit label, leaving unrecognized labels to the caller's policy
pub fn parse_unit(label: &str) -> Option<Unit> {
    label.parse().ok()
}
