use crate::units::error::ConversionError;
use crate::units::parser::{parse_unit, parse_value};
use crate::units::types::{Category, Unit};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const KILOGRAMS_PER_POUND: f64 = 0.453592;
pub const KILOGRAMS_PER_OUNCE: f64 = 0.0283495;
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;
pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_MILE: f64 = 1609.34;
pub const KELVIN_OFFSET: f64 = 273.15;

/// How a unit outside the requested category is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitPolicy {
    /// Reject with `ConversionError::UnknownUnit`
    #[default]
    Strict,
    /// Treat the unit as already canonical and pass the value through
    Passthrough,
}

/// Stateless converter between the units of a category
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionEngine {
    policy: UnitPolicy,
}

impl ConversionEngine {
    pub fn new(policy: UnitPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnitPolicy {
        self.policy
    }

    /// Convert `value` from `from` to `to` within `category`
    pub fn convert(
        &self,
        category: Category,
        from: Unit,
        to: Unit,
        value: f64,
    ) -> Result<f64, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidValue(value.to_string()));
        }

        let from_unit = self.resolve(category, Some(from), from.label())?;
        let to_unit = self.resolve(category, Some(to), to.label())?;
        self.finish(category, from_unit, to_unit, value)
    }

    /// Convert from raw labels and raw input, the way a form submission arrives.
    ///
    /// The value is parsed first so that bad input is reported before the labels
    /// are looked at.
    pub fn convert_labels(
        &self,
        category: &str,
        from: &str,
        to: &str,
        raw_value: &str,
    ) -> Result<f64, ConversionError> {
        let value = parse_value(raw_value)?;
        let category: Category = category.parse()?;

        let from_unit = self.resolve(category, parse_unit(from), from)?;
        let to_unit = self.resolve(category, parse_unit(to), to)?;
        self.finish(category, from_unit, to_unit, value)
    }

    /// `None` means the label is not a unit of `category` and the passthrough
    /// fallback applies
    fn resolve(
        &self,
        category: Category,
        unit: Option<Unit>,
        label: &str,
    ) -> Result<Option<Unit>, ConversionError> {
        match unit {
            Some(u) if category.contains(u) => Ok(Some(u)),
            _ => match self.policy {
                UnitPolicy::Strict => Err(ConversionError::UnknownUnit {
                    category,
                    unit: label.to_string(),
                }),
                UnitPolicy::Passthrough => {
                    warn!(
                        category = %category,
                        unit = label,
                        "unit not recognized for category, treating value as canonical"
                    );
                    Ok(None)
                }
            },
        }
    }

    fn finish(
        &self,
        category: Category,
        from: Option<Unit>,
        to: Option<Unit>,
        value: f64,
    ) -> Result<f64, ConversionError> {
        let result = match category {
            Category::Temperature => convert_temperature(value, from, to),
            Category::Weight => convert_weight(value, from, to),
            Category::Distance => convert_distance(value, from, to),
        };

        // Large finite inputs can still overflow once scaled
        if !result.is_finite() {
            return Err(ConversionError::OutOfRange { value });
        }

        debug!(
            category = %category,
            from = ?from,
            to = ?to,
            value,
            result,
            "converted"
        );
        Ok(result)
    }
}

/// Convert with the default (strict) engine
pub fn convert(
    category: Category,
    from: Unit,
    to: Unit,
    value: f64,
) -> Result<f64, ConversionError> {
    ConversionEngine::default().convert(category, from, to, value)
}

/// Temperature uses direct pairwise formulas; there is no canonical scale.
fn convert_temperature(value: f64, from: Option<Unit>, to: Option<Unit>) -> f64 {
    use Unit::{Celsius, Fahrenheit, Kelvin};

    match (from, to) {
        (Some(Celsius), Some(Fahrenheit)) => value * 9.0 / 5.0 + 32.0,
        (Some(Celsius), Some(Kelvin)) => value + KELVIN_OFFSET,
        (Some(Fahrenheit), Some(Celsius)) => (value - 32.0) * 5.0 / 9.0,
        (Some(Fahrenheit), Some(Kelvin)) => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        (Some(Kelvin), Some(Celsius)) => value - KELVIN_OFFSET,
        (Some(Kelvin), Some(Fahrenheit)) => (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
        _ => value,
    }
}

fn convert_weight(value: f64, from: Option<Unit>, to: Option<Unit>) -> f64 {
    let kilograms = match from {
        Some(Unit::Kilograms) => value,
        Some(Unit::Grams) => value / GRAMS_PER_KILOGRAM,
        Some(Unit::Pounds) => value * KILOGRAMS_PER_POUND,
        Some(Unit::Ounces) => value * KILOGRAMS_PER_OUNCE,
        _ => value,
    };

    match to {
        Some(Unit::Kilograms) => kilograms,
        Some(Unit::Grams) => kilograms * GRAMS_PER_KILOGRAM,
        Some(Unit::Pounds) => kilograms / KILOGRAMS_PER_POUND,
        Some(Unit::Ounces) => kilograms / KILOGRAMS_PER_OUNCE,
        _ => kilograms,
    }
}

fn convert_distance(value: f64, from: Option<Unit>, to: Option<Unit>) -> f64 {
    let meters = match from {
        Some(Unit::Meters) => value,
        Some(Unit::Kilometers) => value * METERS_PER_KILOMETER,
        Some(Unit::Miles) => value * METERS_PER_MILE,
        _ => value,
    };

    match to {
        Some(Unit::Meters) => meters,
        Some(Unit::Kilometers) => meters / METERS_PER_KILOMETER,
        Some(Unit::Miles) => meters / METERS_PER_MILE,
        _ => meters,
    }
}
