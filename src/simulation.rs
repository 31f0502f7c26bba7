//! Temperature range table and the simulated draw
//!
//! The table is fixed configuration data: one inclusive Celsius range per
//! (region, season) pair. Construction validates the complete-grid
//! invariant, so lookups on a built table are total. The draw consumes an
//! explicitly passed random generator; there is no process-global source.

use std::sync::LazyLock;

use rand::RngExt;
use serde::{Deserialize, Serialize};

use crate::error::SeasoncastError;
use crate::models::unit::round_tenths;
use crate::models::{Region, Season};

/// Inclusive Celsius bounds for one (region, season) cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min_c: f32,
    pub max_c: f32,
}

impl TemperatureRange {
    #[must_use]
    pub const fn new(min_c: f32, max_c: f32) -> Self {
        Self { min_c, max_c }
    }
}

const BUILTIN_ENTRIES: [(Region, Season, TemperatureRange); 16] = [
    (Region::West, Season::Winter, TemperatureRange::new(5.0, 15.0)),
    (Region::West, Season::Spring, TemperatureRange::new(10.0, 20.0)),
    (Region::West, Season::Summer, TemperatureRange::new(18.0, 33.0)),
    (Region::West, Season::Fall, TemperatureRange::new(10.0, 22.0)),
    (Region::East, Season::Winter, TemperatureRange::new(-5.0, 5.0)),
    (Region::East, Season::Spring, TemperatureRange::new(5.0, 15.0)),
    (Region::East, Season::Summer, TemperatureRange::new(18.0, 30.0)),
    (Region::East, Season::Fall, TemperatureRange::new(7.0, 18.0)),
    (Region::Midwest, Season::Winter, TemperatureRange::new(-10.0, 3.0)),
    (Region::Midwest, Season::Spring, TemperatureRange::new(5.0, 15.0)),
    (Region::Midwest, Season::Summer, TemperatureRange::new(20.0, 32.0)),
    (Region::Midwest, Season::Fall, TemperatureRange::new(5.0, 18.0)),
    (Region::South, Season::Winter, TemperatureRange::new(5.0, 15.0)),
    (Region::South, Season::Spring, TemperatureRange::new(15.0, 25.0)),
    (Region::South, Season::Summer, TemperatureRange::new(25.0, 38.0)),
    (Region::South, Season::Fall, TemperatureRange::new(18.0, 28.0)),
];

static BUILTIN: LazyLock<RangeTable> = LazyLock::new(|| {
    RangeTable::from_entries(&BUILTIN_ENTRIES).expect("builtin range table covers the full grid")
});

/// Complete Region × Season grid of temperature ranges
#[derive(Debug, Clone)]
pub struct RangeTable {
    cells: [[TemperatureRange; 4]; 4],
}

impl RangeTable {
    /// The built-in table the demo ships with
    pub fn builtin() -> &'static RangeTable {
        &BUILTIN
    }

    /// Build a table from entries, enforcing that every (region, season)
    /// pair is present exactly once with min ≤ max
    pub fn from_entries(
        entries: &[(Region, Season, TemperatureRange)],
    ) -> Result<Self, SeasoncastError> {
        let mut staged: [[Option<TemperatureRange>; 4]; 4] = [[None; 4]; 4];

        for &(region, season, range) in entries {
            if range.min_c > range.max_c {
                return Err(SeasoncastError::InvalidRange { region, season });
            }
            let cell = &mut staged[region.index()][season.index()];
            if cell.is_some() {
                return Err(SeasoncastError::DuplicateRange { region, season });
            }
            *cell = Some(range);
        }

        let mut cells = [[TemperatureRange::new(0.0, 0.0); 4]; 4];
        for region in Region::ALL {
            for season in Season::ALL {
                cells[region.index()][season.index()] = staged[region.index()][season.index()]
                    .ok_or(SeasoncastError::MissingRange { region, season })?;
            }
        }

        Ok(Self { cells })
    }

    /// Bounds for a (region, season) pair
    #[must_use]
    pub fn range(&self, region: Region, season: Season) -> TemperatureRange {
        self.cells[region.index()][season.index()]
    }

    /// Draw a typical temperature for the pair: uniform over the closed
    /// interval [min, max], rounded to one decimal place. Rounding may land
    /// up to 0.05 outside the nominal bounds. Each call draws fresh; equal
    /// inputs do not imply equal results.
    pub fn simulate<R: RngExt>(&self, region: Region, season: Season, rng: &mut R) -> f32 {
        let range = self.range(region, season);
        round_tenths(rng.random_range(range.min_c..=range.max_c))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_builtin_table_builds() {
        let table = RangeTable::builtin();
        let range = table.range(Region::Midwest, Season::Winter);
        assert_eq!(range, TemperatureRange::new(-10.0, 3.0));
    }

    #[test]
    fn test_missing_pair_is_rejected() {
        let entries: Vec<_> = BUILTIN_ENTRIES
            .iter()
            .copied()
            .filter(|(region, season, _)| {
                !(*region == Region::South && *season == Season::Fall)
            })
            .collect();

        let err = RangeTable::from_entries(&entries).unwrap_err();
        assert!(matches!(
            err,
            SeasoncastError::MissingRange {
                region: Region::South,
                season: Season::Fall,
            }
        ));
    }

    #[test]
    fn test_duplicate_pair_is_rejected() {
        let mut entries = BUILTIN_ENTRIES.to_vec();
        entries.push((
            Region::West,
            Season::Winter,
            TemperatureRange::new(0.0, 1.0),
        ));

        let err = RangeTable::from_entries(&entries).unwrap_err();
        assert!(matches!(err, SeasoncastError::DuplicateRange { .. }));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut entries = BUILTIN_ENTRIES.to_vec();
        entries[0].2 = TemperatureRange::new(15.0, 5.0);

        let err = RangeTable::from_entries(&entries).unwrap_err();
        assert!(matches!(err, SeasoncastError::InvalidRange { .. }));
    }

    #[test]
    fn test_draws_stay_within_bounds() {
        let table = RangeTable::builtin();
        let mut rng = StdRng::seed_from_u64(1);

        for region in Region::ALL {
            for season in Season::ALL {
                let range = table.range(region, season);
                for _ in 0..1_000 {
                    let temp = table.simulate(region, season, &mut rng);
                    assert!(
                        temp >= range.min_c - 0.05 && temp <= range.max_c + 0.05,
                        "{temp} outside [{}, {}] for {region}/{season}",
                        range.min_c,
                        range.max_c,
                    );
                }
            }
        }
    }

    #[test]
    fn test_draw_is_rounded_to_tenths() {
        let table = RangeTable::builtin();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let temp = table.simulate(Region::West, Season::Summer, &mut rng);
            assert_eq!(temp, round_tenths(temp));
        }
    }

    #[test]
    fn test_same_seed_same_draw() {
        let table = RangeTable::builtin();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            table.simulate(Region::East, Season::Winter, &mut a),
            table.simulate(Region::East, Season::Winter, &mut b),
        );
    }
}
