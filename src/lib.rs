//! `Seasoncast` - seasonal city weather simulation
//!
//! This library provides the core functionality of the demo: a fixed city
//! catalog, a per-(region, season) temperature range table with a random
//! "typical" temperature draw, themed icon selection, and display payload
//! assembly for the thin CLI and JSON API on top.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod icons;
pub mod models;
pub mod report;
pub mod simulation;
pub mod theme;
pub mod web;

// Re-export core types for public API
pub use catalog::CityCatalog;
pub use config::SeasoncastConfig;
pub use error::SeasoncastError;
pub use icons::{select_icon, select_icon_for_label};
pub use models::unit::to_fahrenheit;
pub use models::{City, Region, Season, Unit, WeatherIcon};
pub use report::{WeatherReport, build_report, build_report_for_labels};
pub use simulation::{RangeTable, TemperatureRange};
pub use theme::Theme;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SeasoncastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
