//! Coarse US geographic zones used to select a temperature profile

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeasoncastError;

/// Geographic zone a city belongs to, driving its temperature ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    West,
    East,
    Midwest,
    South,
}

impl Region {
    /// All regions in table order
    pub const ALL: [Region; 4] = [Region::West, Region::East, Region::Midwest, Region::South];

    /// Get display name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Region::West => "West",
            Region::East => "East",
            Region::Midwest => "Midwest",
            Region::South => "South",
        }
    }

    /// Row index into the range table grid
    pub(crate) fn index(self) -> usize {
        match self {
            Region::West => 0,
            Region::East => 1,
            Region::Midwest => 2,
            Region::South => 3,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = SeasoncastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "west" => Ok(Region::West),
            "east" => Ok(Region::East),
            "midwest" => Ok(Region::Midwest),
            "south" => Ok(Region::South),
            _ => Err(SeasoncastError::UnknownRegion {
                label: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_regions() {
        assert_eq!("West".parse::<Region>().unwrap(), Region::West);
        assert_eq!("midwest".parse::<Region>().unwrap(), Region::Midwest);
    }

    #[test]
    fn test_parse_unknown_region_fails() {
        let err = "Atlantis".parse::<Region>().unwrap_err();
        assert!(matches!(err, SeasoncastError::UnknownRegion { .. }));
        assert!(err.is_lookup());
    }

    #[test]
    fn test_indices_cover_the_grid() {
        let mut seen = [false; 4];
        for region in Region::ALL {
            seen[region.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
