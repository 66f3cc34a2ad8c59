//! Temperature units and conversion.
//!
//! The canonical value is always Celsius; Fahrenheit is derived on demand.
//! The original app re-parsed the rendered label on every unit toggle, which
//! accumulated rounding error over repeated toggles. Storing the canonical
//! value once eliminates that drift.

use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    pub fn toggled(&self) -> Unit {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }
}

/// Convert a temperature between units. Returns the converted value together
/// with the unit it is now expressed in. Converting to the same unit is the
/// identity.
pub fn convert(value: f64, from: Unit, to: Unit) -> (f64, Unit) {
    let converted = match (from, to) {
        (Unit::Celsius, Unit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Unit::Fahrenheit, Unit::Celsius) => (value - 32.0) * 5.0 / 9.0,
        _ => value,
    };
    (converted, to)
}

/// Parse a user-supplied temperature value. Whitespace and a trailing unit
/// symbol ("21.5", "21.5 °C", "70F") are accepted.
pub fn parse_value(input: &str) -> Result<f64, WeatherError> {
    let trimmed = input
        .trim()
        .trim_end_matches(['C', 'F', 'c', 'f'])
        .trim_end_matches('°')
        .trim();

    trimmed
        .parse::<f64>()
        .map_err(|_| WeatherError::Conversion { input: input.to_string() })
}

/// A temperature with Celsius as its canonical representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    celsius: f64,
}

impl Temperature {
    pub fn from_celsius(celsius: f64) -> Self {
        Self { celsius }
    }

    pub fn celsius(&self) -> f64 {
        self.celsius
    }

    pub fn in_unit(&self, unit: Unit) -> f64 {
        convert(self.celsius, Unit::Celsius, unit).0
    }

    /// Render as e.g. "21.5 °C", one decimal place.
    pub fn format(&self, unit: Unit) -> String {
        format!("{:.1} {}", self.in_unit(unit), unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point_converts_to_32f() {
        assert_eq!(convert(0.0, Unit::Celsius, Unit::Fahrenheit), (32.0, Unit::Fahrenheit));
    }

    #[test]
    fn boiling_point_converts_to_212f() {
        assert_eq!(convert(100.0, Unit::Celsius, Unit::Fahrenheit), (212.0, Unit::Fahrenheit));
    }

    #[test]
    fn same_unit_is_identity() {
        assert_eq!(convert(17.3, Unit::Celsius, Unit::Celsius), (17.3, Unit::Celsius));
    }

    #[test]
    fn round_trip_stays_within_tolerance() {
        // Display rounding is one decimal, so a full round trip through the
        // rendered value must stay within 0.2 degrees.
        let original = 21.7;
        let (f, _) = convert(original, Unit::Celsius, Unit::Fahrenheit);
        let rounded_f = (f * 10.0).round() / 10.0;
        let (back, _) = convert(rounded_f, Unit::Fahrenheit, Unit::Celsius);

        assert!((back - original).abs() <= 0.2, "round trip drifted: {back}");
    }

    #[test]
    fn canonical_value_survives_repeated_toggles() {
        let temp = Temperature::from_celsius(21.7);
        let mut unit = Unit::Celsius;
        for _ in 0..100 {
            unit = unit.toggled();
        }
        assert_eq!(temp.format(unit), "21.7 °C");
    }

    #[test]
    fn format_rounds_to_one_decimal() {
        let temp = Temperature::from_celsius(21.54);
        assert_eq!(temp.format(Unit::Celsius), "21.5 °C");
        assert_eq!(temp.format(Unit::Fahrenheit), "70.8 °F");
    }

    #[test]
    fn parse_accepts_plain_and_suffixed_values() {
        assert_eq!(parse_value("21.5").unwrap(), 21.5);
        assert_eq!(parse_value(" 21.5 °C ").unwrap(), 21.5);
        assert_eq!(parse_value("70F").unwrap(), 70.0);
        assert_eq!(parse_value("-4.2").unwrap(), -4.2);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_value("warm").unwrap_err();
        assert!(err.to_string().contains("warm"));
    }
}
