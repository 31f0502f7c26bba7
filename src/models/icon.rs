//! The fixed weather icon set the display picks from

use serde::{Deserialize, Serialize};

/// Symbolic weather icon shown next to the simulated temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherIcon {
    ColdSnow,
    Cloudy,
    Blossom,
    MildSun,
    FullSun,
    PartlyCloudy,
    AutumnLeaf,
    HazySun,
    /// Fallback for season labels outside the declared domain
    Thermometer,
}

impl WeatherIcon {
    /// Stable label for payloads and logs
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WeatherIcon::ColdSnow => "cold/snow",
            WeatherIcon::Cloudy => "cloudy",
            WeatherIcon::Blossom => "blossom",
            WeatherIcon::MildSun => "mild-sun",
            WeatherIcon::FullSun => "full-sun",
            WeatherIcon::PartlyCloudy => "partly-cloudy",
            WeatherIcon::AutumnLeaf => "autumn-leaf",
            WeatherIcon::HazySun => "hazy-sun",
            WeatherIcon::Thermometer => "generic-thermometer",
        }
    }

    /// Emoji glyph rendered by the demo
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::ColdSnow => "❄️",
            WeatherIcon::Cloudy => "☁️",
            WeatherIcon::Blossom => "🌸",
            WeatherIcon::MildSun => "🌤",
            WeatherIcon::FullSun => "🌞",
            WeatherIcon::PartlyCloudy => "⛅",
            WeatherIcon::AutumnLeaf => "🍂",
            WeatherIcon::HazySun => "🌥",
            WeatherIcon::Thermometer => "🌡",
        }
    }
}
