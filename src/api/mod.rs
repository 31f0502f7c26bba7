//! JSON API surface the browser demo consumes

use axum::{
    Router,
    extract::Query,
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::CityCatalog,
    error::SeasoncastError,
    models::City,
    report::{self, WeatherReport},
    simulation::RangeTable,
    theme::Theme,
};

#[derive(Serialize, Deserialize)]
pub struct ApiCity {
    pub name: String,
    pub country: String,
    pub population: u64,
    pub founded: String,
    pub region: String,
}

impl From<&City> for ApiCity {
    fn from(city: &City) -> Self {
        Self {
            name: city.name.clone(),
            country: city.country.clone(),
            population: city.population,
            founded: city.founded.clone(),
            region: city.region.name().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiTheme {
    pub name: String,
    pub background: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiReport {
    pub city: ApiCity,
    pub season: String,
    pub unit: String,
    pub suffix: String,
    /// Display value in the requested unit
    pub temperature: f32,
    /// The underlying Celsius draw
    pub temperature_celsius: f32,
    pub icon: String,
    pub glyph: String,
}

impl From<&WeatherReport> for ApiReport {
    fn from(report: &WeatherReport) -> Self {
        Self {
            city: ApiCity::from(&report.city),
            season: report.season.name().to_string(),
            unit: report.unit.name().to_string(),
            suffix: report.suffix().to_string(),
            temperature: report.temperature,
            temperature_celsius: report.temperature_c,
            icon: report.icon.label().to_string(),
            glyph: report.icon.glyph().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: String,
    pub season: String,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "Celsius".to_string()
}

pub fn router() -> Router {
    Router::new()
        .route("/cities", get(get_cities))
        .route("/themes", get(get_themes))
        .route("/weather", get(get_weather))
}

async fn get_cities() -> Json<Vec<ApiCity>> {
    let cities: Vec<ApiCity> = CityCatalog::builtin().iter().map(ApiCity::from).collect();
    Json(cities)
}

async fn get_themes() -> Json<Vec<ApiTheme>> {
    let themes: Vec<ApiTheme> = Theme::ALL
        .iter()
        .map(|theme| ApiTheme {
            name: theme.name().to_string(),
            background: theme.background().to_string(),
        })
        .collect();
    Json(themes)
}

async fn get_weather(Query(query): Query<WeatherQuery>) -> Result<Json<ApiReport>, StatusCode> {
    // Fresh thread-local draw per request; no shared draw state
    let report = report::build_report_for_labels(
        CityCatalog::builtin(),
        RangeTable::builtin(),
        &query.city,
        &query.season,
        &query.unit,
        &mut rand::rng(),
    )
    .map_err(|err| {
        tracing::warn!(error = %err, "weather query rejected");
        status_for(&err)
    })?;

    Ok(Json(ApiReport::from(&report)))
}

fn status_for(err: &SeasoncastError) -> StatusCode {
    match err {
        SeasoncastError::UnknownCity { .. } => StatusCode::NOT_FOUND,
        err if err.is_lookup() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cities_endpoint_lists_the_catalog() {
        let Json(cities) = get_cities().await;
        assert_eq!(cities.len(), 20);
        assert!(cities.iter().any(|c| c.name == "San Jose"));
    }

    #[tokio::test]
    async fn test_themes_endpoint() {
        let Json(themes) = get_themes().await;
        assert_eq!(themes.len(), 6);
        assert!(themes.iter().all(|t| t.background.starts_with('#')));
    }

    #[tokio::test]
    async fn test_weather_endpoint_happy_path() {
        let query = WeatherQuery {
            city: "Miami".to_string(),
            season: "Summer".to_string(),
            unit: "Fahrenheit".to_string(),
        };
        let Json(report) = get_weather(Query(query)).await.unwrap();
        assert_eq!(report.city.region, "South");
        assert_eq!(report.suffix, "°F");
    }

    #[tokio::test]
    async fn test_unknown_city_is_404() {
        let query = WeatherQuery {
            city: "Atlantis".to_string(),
            season: "Winter".to_string(),
            unit: "Celsius".to_string(),
        };
        let status = get_weather(Query(query)).await.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_season_is_400() {
        let query = WeatherQuery {
            city: "Miami".to_string(),
            season: "Monsoon".to_string(),
            unit: "Celsius".to_string(),
        };
        let status = get_weather(Query(query)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
