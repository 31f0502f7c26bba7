//! The fixed city catalog the demo selects from
//!
//! Populated once at first use and read-only for the lifetime of the
//! process. Lookup failures surface to the caller; the presentation layer
//! is expected to restrict selections to catalog keys, so strictness here
//! is a safety net.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::SeasoncastError;
use crate::models::{City, Region};

static BUILTIN: LazyLock<CityCatalog> = LazyLock::new(|| CityCatalog::from_cities(builtin_cities()));

/// Read-only mapping from city name to its record
#[derive(Debug, Clone)]
pub struct CityCatalog {
    cities: BTreeMap<String, City>,
}

impl CityCatalog {
    /// The built-in 20-city catalog
    pub fn builtin() -> &'static CityCatalog {
        &BUILTIN
    }

    /// Build a catalog from city records, keyed by name
    pub fn from_cities(cities: impl IntoIterator<Item = City>) -> Self {
        Self {
            cities: cities
                .into_iter()
                .map(|city| (city.name.clone(), city))
                .collect(),
        }
    }

    /// Look up a city by its exact name
    pub fn get(&self, name: &str) -> Result<&City, SeasoncastError> {
        self.cities
            .get(name)
            .ok_or_else(|| SeasoncastError::UnknownCity {
                name: name.to_string(),
            })
    }

    /// City names in sorted order, as the selection control lists them
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// All cities in name order
    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

fn builtin_cities() -> Vec<City> {
    fn city(name: &str, country: &str, population: u64, founded: &str, region: Region) -> City {
        City {
            name: name.to_string(),
            country: country.to_string(),
            population,
            founded: founded.to_string(),
            region,
        }
    }

    vec![
        city("Saratoga", "USA", 31_000, "1847", Region::West),
        city("San Jose", "USA", 1_027_000, "1777", Region::West),
        city("San Francisco", "USA", 815_000, "1776", Region::West),
        city("New York", "USA", 8_800_000, "1624", Region::East),
        city("Los Angeles", "USA", 3_900_000, "1781", Region::West),
        city("Chicago", "USA", 2_700_000, "1833", Region::Midwest),
        city("Houston", "USA", 2_300_000, "1837", Region::South),
        city("Phoenix", "USA", 1_600_000, "1867", Region::West),
        city("Philadelphia", "USA", 1_600_000, "1682", Region::East),
        city("Dallas", "USA", 1_300_000, "1841", Region::South),
        city("Austin", "USA", 970_000, "1839", Region::South),
        city("Seattle", "USA", 744_000, "1851", Region::West),
        city("Boston", "USA", 692_000, "1630", Region::East),
        city("Miami", "USA", 467_000, "1896", Region::South),
        city("Atlanta", "USA", 498_000, "1847", Region::South),
        city("Orlando", "USA", 287_000, "1875", Region::South),
        city("Denver", "USA", 715_000, "1858", Region::West),
        city("Portland", "USA", 650_000, "1845", Region::West),
        city("Las Vegas", "USA", 641_000, "1905", Region::West),
        city("San Diego", "USA", 1_420_000, "1769", Region::West),
    ]
}
