use serde::{Deserialize, Serialize};
use std::fmt;

/// Family of comparable units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    Temperature,
    Weight,
    Distance,
}

impl Category {
    /// All categories in presentation order
    pub const ALL: [Category; 3] = [Category::Temperature, Category::Weight, Category::Distance];

    pub fn label(self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Weight => "Weight",
            Category::Distance => "Distance",
        }
    }

    /// Ordered units owned by this category
    pub fn units(self) -> &'static [Unit] {
        match self {
            Category::Temperature => &TEMPERATURE_UNITS,
            Category::Weight => &WEIGHT_UNITS,
            Category::Distance => &DISTANCE_UNITS,
        }
    }

    /// Default target unit when a category is picked: the second entry of its list
    pub fn default_target(self) -> Unit {
        self.units()[1]
    }

    pub fn contains(self, unit: Unit) -> bool {
        unit.category() == self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named measurement scale. Each unit belongs to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Kilograms,
    Pounds,
    Ounces,
    Grams,
    Meters,
    Kilometers,
    Miles,
}

const TEMPERATURE_UNITS: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];
const WEIGHT_UNITS: [Unit; 4] = [Unit::Kilograms, Unit::Pounds, Unit::Ounces, Unit::Grams];
const DISTANCE_UNITS: [Unit; 3] = [Unit::Meters, Unit::Kilometers, Unit::Miles];

impl Unit {
    pub fn category(self) -> Category {
        match self {
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
            Unit::Kilograms | Unit::Pounds | Unit::Ounces | Unit::Grams => Category::Weight,
            Unit::Meters | Unit::Kilometers | Unit::Miles => Category::Distance,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
            Unit::Kilograms => "Kilograms",
            Unit::Pounds => "Pounds",
            Unit::Ounces => "Ounces",
            Unit::Grams => "Grams",
            Unit::Meters => "Meters",
            Unit::Kilometers => "Kilometers",
            Unit::Miles => "Miles",
        }
    }

    /// Short symbol used in quantity expressions and compact output
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
            Unit::Kilograms => "kg",
            Unit::Pounds => "lb",
            Unit::Ounces => "oz",
            Unit::Grams => "g",
            Unit::Meters => "m",
            Unit::Kilometers => "km",
            Unit::Miles => "mi",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered unit labels for a category, as shown in a unit picker
pub fn units_for(category: Category) -> &'static [Unit] {
    category.units()
}

/// A value paired with the unit it is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_are_ordered_per_category() {
        assert_eq!(
            units_for(Category::Temperature),
            &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin]
        );
        assert_eq!(
            units_for(Category::Weight),
            &[Unit::Kilograms, Unit::Pounds, Unit::Ounces, Unit::Grams]
        );
        assert_eq!(
            units_for(Category::Distance),
            &[Unit::Meters, Unit::Kilometers, Unit::Miles]
        );
    }

    #[test]
    fn test_every_unit_belongs_to_its_category() {
        for category in Category::ALL {
            for unit in category.units() {
                assert_eq!(unit.category(), category);
                assert!(category.contains(*unit));
            }
        }
        assert!(!Category::Weight.contains(Unit::Kelvin));
    }

    #[test]
    fn test_default_target_is_second_unit() {
        assert_eq!(Category::Temperature.default_target(), Unit::Fahrenheit);
        assert_eq!(Category::Weight.default_target(), Unit::Pounds);
        assert_eq!(Category::Distance.default_target(), Unit::Kilometers);
    }

    #[test]
    fn test_display_uses_labels() {
        assert_eq!(Category::Distance.to_string(), "Distance");
        assert_eq!(Unit::Ounces.to_string(), "Ounces");
        let q = Quantity {
            value: 12.5,
            unit: Unit::Kilograms,
        };
        assert_eq!(q.to_string(), "12.5 kg");
    }
}
