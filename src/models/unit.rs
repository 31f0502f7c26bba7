//! Temperature units and display-time conversion
//!
//! The unit is a pure presentation concern: the simulated Celsius value is
//! never altered, only converted on the way out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeasoncastError;

/// Temperature unit for display output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// Both units in selection order
    pub const ALL: [Unit; 2] = [Unit::Celsius, Unit::Fahrenheit];

    /// Get display name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
        }
    }

    /// Degree suffix shown after the value
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    /// Convert a Celsius value into this unit for display
    #[must_use]
    pub fn from_celsius(self, celsius: f32) -> f32 {
        match self {
            Unit::Celsius => celsius,
            Unit::Fahrenheit => to_fahrenheit(celsius),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = SeasoncastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "celsius" => Ok(Unit::Celsius),
            "fahrenheit" => Ok(Unit::Fahrenheit),
            _ => Err(SeasoncastError::UnknownUnit {
                label: s.to_string(),
            }),
        }
    }
}

/// Convert Celsius to Fahrenheit, rounded to one decimal place
#[must_use]
pub fn to_fahrenheit(celsius: f32) -> f32 {
    round_tenths(celsius * 9.0 / 5.0 + 32.0)
}

/// Round to one decimal place. Halves round away from zero.
#[must_use]
pub fn round_tenths(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_fixed_points() {
        assert_eq!(to_fahrenheit(0.0), 32.0);
        assert_eq!(to_fahrenheit(100.0), 212.0);
        assert_eq!(to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_fahrenheit_is_monotone() {
        let mut previous = to_fahrenheit(-30.0);
        for step in 1..=70 {
            let next = to_fahrenheit(-30.0 + step as f32);
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        assert_eq!(round_tenths(36.666), 36.7);
        assert_eq!(round_tenths(36.64), 36.6);
        assert_eq!(round_tenths(-0.55), -0.6);
        assert_eq!(to_fahrenheit(2.57), 36.6);
    }

    #[test]
    fn test_celsius_passes_through() {
        assert_eq!(Unit::Celsius.from_celsius(13.4), 13.4);
        assert_eq!(Unit::Fahrenheit.from_celsius(0.0), 32.0);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("Celsius".parse::<Unit>().unwrap(), Unit::Celsius);
        assert_eq!("fahrenheit".parse::<Unit>().unwrap(), Unit::Fahrenheit);
        assert!("Kelvin".parse::<Unit>().is_err());
    }
}
