//! Display payload assembly
//!
//! Composes the catalog lookup, the temperature draw, icon selection and
//! unit conversion into the payload the presentation layer renders. One
//! report per user query; nothing is cached between queries.

use rand::RngExt;
use serde::Serialize;
use tracing::instrument;

use crate::catalog::CityCatalog;
use crate::error::SeasoncastError;
use crate::icons::select_icon;
use crate::models::{City, Season, Unit, WeatherIcon};
use crate::simulation::RangeTable;

/// Everything the presentation layer needs for one query
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub city: City,
    pub season: Season,
    pub unit: Unit,
    /// The underlying Celsius draw
    pub temperature_c: f32,
    /// The draw converted into the requested unit
    pub temperature: f32,
    pub icon: WeatherIcon,
}

impl WeatherReport {
    /// Degree suffix for the display temperature
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        self.unit.suffix()
    }

    /// Headline line, e.g. "🌞 Typical Summer Temperature: 88.3 °F"
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "{} Typical {} Temperature: {} {}",
            self.icon.glyph(),
            self.season,
            self.temperature,
            self.suffix(),
        )
    }

    /// Metadata line, e.g. "USA | Population: 1,027,000 | Founded: 1777"
    #[must_use]
    pub fn metadata_line(&self) -> String {
        format!(
            "{} | Population: {} | Founded: {}",
            self.city.country,
            self.city.population_formatted(),
            self.city.founded,
        )
    }
}

/// Assemble a report for a typed selection.
///
/// Draws from the passed generator, so callers control seeding; each web
/// request or CLI invocation passes its own handle.
#[instrument(skip(catalog, table, rng))]
pub fn build_report<R: RngExt>(
    catalog: &CityCatalog,
    table: &RangeTable,
    city_name: &str,
    season: Season,
    unit: Unit,
    rng: &mut R,
) -> Result<WeatherReport, SeasoncastError> {
    let city = catalog.get(city_name)?;
    let temperature_c = table.simulate(city.region, season, rng);
    let icon = select_icon(season, temperature_c);
    let temperature = unit.from_celsius(temperature_c);

    tracing::debug!(
        region = %city.region,
        temperature_c,
        icon = icon.label(),
        "simulated temperature"
    );

    Ok(WeatherReport {
        city: city.clone(),
        season,
        unit,
        temperature_c,
        temperature,
        icon,
    })
}

/// Assemble a report from raw label inputs, the HTTP/CLI boundary.
///
/// Season and unit labels parse strictly; an out-of-domain label is a
/// lookup error, never a silent default.
pub fn build_report_for_labels<R: RngExt>(
    catalog: &CityCatalog,
    table: &RangeTable,
    city_name: &str,
    season_label: &str,
    unit_label: &str,
    rng: &mut R,
) -> Result<WeatherReport, SeasoncastError> {
    let season: Season = season_label.parse()?;
    let unit: Unit = unit_label.parse()?;
    build_report(catalog, table, city_name, season, unit, rng)
}
