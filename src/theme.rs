//! Visual themes the demo offers
//!
//! Only the lookup table lives here; applying the colors is the
//! presentation layer's business.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeasoncastError;

/// Named color theme with a background fill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Ocean,
    Sand,
    Forest,
    Midnight,
}

impl Theme {
    /// All themes in selection order
    pub const ALL: [Theme; 6] = [
        Theme::Light,
        Theme::Dark,
        Theme::Ocean,
        Theme::Sand,
        Theme::Forest,
        Theme::Midnight,
    ];

    /// Get display name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Ocean => "Ocean",
            Theme::Sand => "Sand",
            Theme::Forest => "Forest",
            Theme::Midnight => "Midnight",
        }
    }

    /// Background fill as a hex color
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Theme::Light => "#fdfdfd",
            Theme::Dark => "#1e1e1e",
            Theme::Ocean => "#e0f7fa",
            Theme::Sand => "#fff8e1",
            Theme::Forest => "#e8f5e9",
            Theme::Midnight => "#0d1b2a",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = SeasoncastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "ocean" => Ok(Theme::Ocean),
            "sand" => Ok(Theme::Sand),
            "forest" => Ok(Theme::Forest),
            "midnight" => Ok(Theme::Midnight),
            _ => Err(SeasoncastError::UnknownTheme {
                label: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::default().background(), "#fdfdfd");
    }

    #[test]
    fn test_parse_round_trips() {
        for theme in Theme::ALL {
            assert_eq!(theme.name().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn test_unknown_theme_fails() {
        let err = "Neon".parse::<Theme>().unwrap_err();
        assert!(matches!(err, SeasoncastError::UnknownTheme { .. }));
    }
}
