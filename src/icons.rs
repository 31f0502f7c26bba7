//! Weather icon selection from season and Celsius temperature

use crate::models::{Season, WeatherIcon};

/// Pick the display icon for a season and Celsius temperature.
///
/// Pure and total over the season enum. Thresholds are the demo's fixed
/// rules: winter splits at 5, spring and fall at 18, summer at 25 (with
/// summer alone treating the threshold value as the cooler side).
#[must_use]
pub fn select_icon(season: Season, temp_c: f32) -> WeatherIcon {
    match season {
        Season::Winter if temp_c < 5.0 => WeatherIcon::ColdSnow,
        Season::Winter => WeatherIcon::Cloudy,
        Season::Spring if temp_c < 18.0 => WeatherIcon::Blossom,
        Season::Spring => WeatherIcon::MildSun,
        Season::Summer if temp_c > 25.0 => WeatherIcon::FullSun,
        Season::Summer => WeatherIcon::PartlyCloudy,
        Season::Fall if temp_c < 18.0 => WeatherIcon::AutumnLeaf,
        Season::Fall => WeatherIcon::HazySun,
    }
}

/// Like [`select_icon`] but for a raw season label.
///
/// Unrecognized labels fall back to the generic thermometer instead of
/// failing. The simulation path stays strict about its labels; only icon
/// selection defaults.
#[must_use]
pub fn select_icon_for_label(label: &str, temp_c: f32) -> WeatherIcon {
    match label.parse::<Season>() {
        Ok(season) => select_icon(season, temp_c),
        Err(_) => WeatherIcon::Thermometer,
    }
}
