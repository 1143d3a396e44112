use crate::units::engine::ConversionEngine;
use crate::units::error::ConversionError;
use crate::units::formatter::format_value;
use crate::units::parser::{parse_unit, parse_value};
use crate::units::types::{Category, Unit};
use serde::Serialize;

/// A validated conversion: both units belong to the category and the value is finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionRequest {
    pub category: Category,
    pub from: Unit,
    pub to: Unit,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(
        category: Category,
        from: Unit,
        to: Unit,
        value: f64,
    ) -> Result<Self, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidValue(value.to_string()));
        }
        check_membership(category, from, from.label())?;
        check_membership(category, to, to.label())?;

        Ok(Self {
            category,
            from,
            to,
            value,
        })
    }

    /// Build a request from raw labels. The value is parsed before anything else.
    pub fn from_labels(
        category: &str,
        from: &str,
        to: &str,
        raw_value: &str,
    ) -> Result<Self, ConversionError> {
        let value = parse_value(raw_value)?;
        let category: Category = category.parse()?;
        let from_unit = lookup(category, from)?;
        let to_unit = lookup(category, to)?;

        Self::new(category, from_unit, to_unit, value)
    }

    /// Same request with a different target unit in the same category
    pub fn with_target(self, to: Unit) -> Result<Self, ConversionError> {
        Self::new(self.category, self.from, to, self.value)
    }
}

fn lookup(category: Category, label: &str) -> Result<Unit, ConversionError> {
    parse_unit(label).ok_or_else(|| ConversionError::UnknownUnit {
        category,
        unit: label.to_string(),
    })
}

fn check_membership(category: Category, unit: Unit, label: &str) -> Result<(), ConversionError> {
    if category.contains(unit) {
        Ok(())
    } else {
        Err(ConversionError::UnknownUnit {
            category,
            unit: label.to_string(),
        })
    }
}

/// The converted value together with the request that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionResult {
    #[serde(flatten)]
    pub request: ConversionRequest,
    pub result: f64,
}

impl ConversionResult {
    /// Result rounded for display, e.g. `formatted(2)` gives "16.00"
    pub fn formatted(&self, decimals: usize) -> String {
        format_value(self.result, decimals)
    }
}

impl ConversionEngine {
    pub fn run(&self, request: ConversionRequest) -> Result<ConversionResult, ConversionError> {
        let result = self.convert(request.category, request.from, request.to, request.value)?;
        Ok(ConversionResult { request, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_foreign_units() {
        let err = ConversionRequest::new(Category::Distance, Unit::Meters, Unit::Pounds, 1.0)
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                category: Category::Distance,
                unit: "Pounds".to_string()
            }
        );
    }

    #[test]
    fn test_new_rejects_non_finite_value() {
        let err = ConversionRequest::new(Category::Weight, Unit::Grams, Unit::Pounds, f64::NAN)
            .unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_from_labels() {
        let request = ConversionRequest::from_labels("Weight", "Pounds", "Ounces", " 1 ").unwrap();
        assert_eq!(request.category, Category::Weight);
        assert_eq!(request.from, Unit::Pounds);
        assert_eq!(request.to, Unit::Ounces);
        assert_eq!(request.value, 1.0);
    }

    #[test]
    fn test_from_labels_reports_invalid_value_first() {
        let err = ConversionRequest::from_labels("Nope", "Nope", "Nope", "").unwrap_err();
        assert_eq!(err, ConversionError::InvalidValue(String::new()));
    }

    #[test]
    fn test_run_and_format() {
        let request =
            ConversionRequest::new(Category::Weight, Unit::Pounds, Unit::Ounces, 1.0).unwrap();
        let result = ConversionEngine::default().run(request).unwrap();
        assert_eq!(result.formatted(2), "16.00");
        assert_eq!(result.request, request);
    }

    #[test]
    fn test_with_target() {
        let request =
            ConversionRequest::new(Category::Temperature, Unit::Celsius, Unit::Celsius, 100.0)
                .unwrap()
                .with_target(Category::Temperature.default_target())
                .unwrap();
        assert_eq!(request.to, Unit::Fahrenheit);
        assert!(request.with_target(Unit::Miles).is_err());
    }

    #[test]
    fn test_result_serializes_flat() {
        let request =
            ConversionRequest::new(Category::Distance, Unit::Kilometers, Unit::Meters, 2.0)
                .unwrap();
        let result = ConversionEngine::default().run(request).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["category"], "Distance");
        assert_eq!(json["from"], "Kilometers");
        assert_eq!(json["to"], "Meters");
        assert_eq!(json["value"], 2.0);
        assert_eq!(json["result"], 2000.0);
    }
}
