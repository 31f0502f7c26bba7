//! City record backing the fixed catalog

use serde::{Deserialize, Serialize};

use super::Region;

/// A selectable city and its display metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Unique name, the catalog key
    pub name: String,
    /// Country the city is in
    pub country: String,
    /// Resident count
    pub population: u64,
    /// Founding year, kept verbatim from the source data
    pub founded: String,
    /// Region selecting the city's temperature profile
    pub region: Region,
}

impl City {
    /// Population with thousands separators, e.g. "1,027,000"
    #[must_use]
    pub fn population_formatted(&self) -> String {
        let digits = self.population.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_city(population: u64) -> City {
        City {
            name: "San Jose".to_string(),
            country: "USA".to_string(),
            population,
            founded: "1777".to_string(),
            region: Region::West,
        }
    }

    #[test]
    fn test_population_formatting() {
        assert_eq!(sample_city(1_027_000).population_formatted(), "1,027,000");
        assert_eq!(sample_city(31_000).population_formatted(), "31,000");
        assert_eq!(sample_city(815).population_formatted(), "815");
        assert_eq!(sample_city(0).population_formatted(), "0");
    }
}
