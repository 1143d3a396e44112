use crate::units::error::ConversionError;
use crate::units::parser::{parse_value, UnrecognizedUnit};
use crate::units::types::{Quantity, Unit};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number (optional sign, decimal part, exponent) followed by a unit label
    /// Examples: "100 kg", "-40 °F", "1e3 m", "12.5 Miles", "20C"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(?P<value>[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?)\s*(?P<unit>[a-zA-Z°]+)$"
    ).unwrap();
}

/// Check if a string looks like a quantity expression
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}

/// Split a quantity expression such as "12.5 kg" into its value and unit
pub fn parse_quantity(s: &str) -> Result<Quantity, ConversionError> {
    let trimmed = s.trim();
    let caps = QUANTITY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ConversionError::InvalidValue(s.to_string()))?;

    let value = parse_value(&caps["value"])?;
    let unit: Unit = caps["unit"]
        .parse()
        .map_err(|UnrecognizedUnit(label)| ConversionError::UnrecognizedUnit(label))?;

    Ok(Quantity { value, unit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_detection() {
        assert!(looks_like_quantity("100 kg"));
        assert!(looks_like_quantity("10.5 m"));
        assert!(looks_like_quantity("-40 °F"));
        assert!(looks_like_quantity("1e3 Meters"));
        assert!(looks_like_quantity("20C"));
        assert!(looks_like_quantity(".5 mi"));

        assert!(!looks_like_quantity("100"));
        assert!(!looks_like_quantity("kg"));
        assert!(!looks_like_quantity("hello world"));
        assert!(!looks_like_quantity("5 kg/s"));
        assert!(!looks_like_quantity(""));
    }

    #[test]
    fn test_parse_quantity() {
        let q = parse_quantity("12.5 kg").unwrap();
        assert_eq!(q.value, 12.5);
        assert_eq!(q.unit, Unit::Kilograms);

        let q = parse_quantity(" -40 °F ").unwrap();
        assert_eq!(q.value, -40.0);
        assert_eq!(q.unit, Unit::Fahrenheit);

        let q = parse_quantity("3 Miles").unwrap();
        assert_eq!(q.unit, Unit::Miles);
    }

    #[test]
    fn test_parse_quantity_rejects_bad_input() {
        assert!(matches!(
            parse_quantity("twelve kg"),
            Err(ConversionError::InvalidValue(_))
        ));
        assert!(matches!(
            parse_quantity("3 furlongs"),
            Err(ConversionError::UnrecognizedUnit(s)) if s == "furlongs"
        ));
    }
}
