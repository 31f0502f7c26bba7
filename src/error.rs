//! Error types and handling for `Seasoncast`

use thiserror::Error;

use crate::models::{Region, Season};

/// Main error type for the `Seasoncast` library
#[derive(Error, Debug)]
pub enum SeasoncastError {
    /// City name is not in the catalog
    #[error("Unknown city: {name}")]
    UnknownCity { name: String },

    /// Season label is outside the declared domain
    #[error("Unknown season: {label}")]
    UnknownSeason { label: String },

    /// Region label is outside the declared domain
    #[error("Unknown region: {label}")]
    UnknownRegion { label: String },

    /// Temperature unit label is outside the declared domain
    #[error("Unknown temperature unit: {label}")]
    UnknownUnit { label: String },

    /// Theme label is outside the declared domain
    #[error("Unknown theme: {label}")]
    UnknownTheme { label: String },

    /// Range table construction found no entry for a (region, season) pair
    #[error("Temperature range table is missing an entry for {region}/{season}")]
    MissingRange { region: Region, season: Season },

    /// Range table construction found a (region, season) pair twice
    #[error("Temperature range table has a duplicate entry for {region}/{season}")]
    DuplicateRange { region: Region, season: Season },

    /// Range table entry with min above max
    #[error("Temperature range for {region}/{season} has min above max")]
    InvalidRange { region: Region, season: Season },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SeasoncastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for the lookup-failure kind: an input label or key fell outside
    /// the catalog or the declared enum domains
    #[must_use]
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            SeasoncastError::UnknownCity { .. }
                | SeasoncastError::UnknownSeason { .. }
                | SeasoncastError::UnknownRegion { .. }
                | SeasoncastError::UnknownUnit { .. }
                | SeasoncastError::UnknownTheme { .. }
        )
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SeasoncastError::UnknownCity { name } => {
                format!("'{name}' is not one of the cities this demo knows about.")
            }
            SeasoncastError::UnknownSeason { label } => {
                format!("'{label}' is not a season. Try Winter, Spring, Summer or Fall.")
            }
            SeasoncastError::UnknownRegion { label } => {
                format!("'{label}' is not a region. Try West, East, Midwest or South.")
            }
            SeasoncastError::UnknownUnit { label } => {
                format!("'{label}' is not a temperature unit. Try Celsius or Fahrenheit.")
            }
            SeasoncastError::UnknownTheme { label } => {
                format!("'{label}' is not a theme this demo ships.")
            }
            SeasoncastError::MissingRange { .. }
            | SeasoncastError::DuplicateRange { .. }
            | SeasoncastError::InvalidRange { .. } => {
                "The temperature range table is malformed.".to_string()
            }
            SeasoncastError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            SeasoncastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_kind() {
        let city_err = SeasoncastError::UnknownCity {
            name: "Atlantis".to_string(),
        };
        assert!(city_err.is_lookup());

        let config_err = SeasoncastError::config("bad port");
        assert!(!config_err.is_lookup());

        let missing = SeasoncastError::MissingRange {
            region: Region::West,
            season: Season::Winter,
        };
        assert!(!missing.is_lookup());
    }

    #[test]
    fn test_user_messages() {
        let season_err = SeasoncastError::UnknownSeason {
            label: "Monsoon".to_string(),
        };
        assert!(season_err.user_message().contains("Monsoon"));
        assert!(season_err.user_message().contains("Winter"));

        let config_err = SeasoncastError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SeasoncastError = io_err.into();
        assert!(matches!(err, SeasoncastError::Io { .. }));
    }
}
