//! Grid configuration.

use std::path::{Path, PathBuf};

use chrono::Weekday;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalGridError, CalGridResult};
use crate::format::{DEFAULT_DAY_TITLE_FORMAT, DEFAULT_MONTH_HEADER_FORMAT, validate_pattern};
use crate::grid::DEFAULT_WEEK_START;

/// Configuration at ~/.config/calgrid/config.toml
///
/// Every key is optional; missing keys fall back to Sunday-start weeks,
/// UTC, "%B %Y" headers and "%a" weekday labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    #[serde(with = "weekday_name")]
    pub week_start: Weekday,

    /// Time zone instants are converted into before comparing calendar days
    #[serde(with = "timezone_name")]
    pub timezone: Tz,

    pub month_header_format: String,

    pub day_title_format: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            week_start: DEFAULT_WEEK_START,
            timezone: Tz::UTC,
            month_header_format: DEFAULT_MONTH_HEADER_FORMAT.to_string(),
            day_title_format: DEFAULT_DAY_TITLE_FORMAT.to_string(),
        }
    }
}

impl GridConfig {
    pub fn config_path() -> CalGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalGridError::Config("Could not determine config directory".into()))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, or defaults if there is no file yet.
    pub fn load() -> CalGridResult<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(GridConfig::default())
        }
    }

    pub fn load_from(path: &Path) -> CalGridResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GridConfig = toml::from_str(&content)
            .map_err(|e| CalGridError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;

        debug!(
            path = %path.display(),
            week_start = ?config.week_start,
            timezone = config.timezone.name(),
            "loaded config"
        );
        Ok(config)
    }

    /// Check the format patterns before anything tries to render with them.
    pub fn validate(&self) -> CalGridResult<()> {
        validate_pattern(&self.month_header_format)?;
        validate_pattern(&self.day_title_format)?;
        Ok(())
    }

    /// Save the current config to ~/.config/calgrid/config.toml
    pub fn save(&self) -> CalGridResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> CalGridResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CalGridError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| CalGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalGridResult<()> {
        let contents = format!(
            "\
# calgrid configuration

# First column of every week row (sunday, monday, ...):
# week_start = \"{}\"

# Time zone used to decide which calendar day an instant falls on:
# timezone = \"UTC\"

# strftime pattern for the month title:
# month_header_format = \"{}\"

# strftime pattern for the weekday labels:
# day_title_format = \"{}\"
",
            weekday_name::name(DEFAULT_WEEK_START),
            DEFAULT_MONTH_HEADER_FORMAT,
            DEFAULT_DAY_TITLE_FORMAT,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Parse a weekday name ("sunday", "Mon", ...).
pub fn parse_weekday(s: &str) -> CalGridResult<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| CalGridError::InvalidWeekday(s.to_string()))
}

/// Parse an IANA time zone name ("UTC", "Europe/Berlin", ...).
pub fn parse_timezone(s: &str) -> CalGridResult<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| CalGridError::InvalidTimezone(s.to_string()))
}

mod weekday_name {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn name(day: Weekday) -> &'static str {
        match day {
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
        }
    }

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_weekday(&s).map_err(serde::de::Error::custom)
    }
}

mod timezone_name {
    use chrono_tz::Tz;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(tz: &Tz, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(tz.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Tz, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_timezone(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: GridConfig = toml::from_str("").unwrap();
        assert_eq!(config, GridConfig::default());
        assert_eq!(config.week_start, Weekday::Sun);
    }

    #[test]
    fn test_partial_file() {
        let config: GridConfig = toml::from_str(
            r#"
week_start = "Monday"
timezone = "Europe/Berlin"
"#,
        )
        .unwrap();
        assert_eq!(config.week_start, Weekday::Mon);
        assert_eq!(config.timezone, Tz::Europe__Berlin);
        assert_eq!(config.month_header_format, DEFAULT_MONTH_HEADER_FORMAT);
    }

    #[test]
    fn test_bad_values_rejected() {
        let bad_day = toml::from_str::<GridConfig>("week_start = \"someday\"");
        assert!(bad_day.is_err());
        let bad_zone = toml::from_str::<GridConfig>("timezone = \"Mars/Olympus\"");
        assert!(bad_zone.is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let config = GridConfig {
            week_start: Weekday::Sat,
            timezone: Tz::Asia__Tokyo,
            month_header_format: "%b %Y".into(),
            day_title_format: "%A".into(),
        };
        config.save_to(&path).unwrap();

        assert_eq!(GridConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_pattern_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "month_header_format = \"%Q\"\n").unwrap();

        assert!(matches!(
            GridConfig::load_from(&path),
            Err(CalGridError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_default_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calgrid/config.toml");
        GridConfig::create_default_config(&path).unwrap();

        assert_eq!(GridConfig::load_from(&path).unwrap(), GridConfig::default());
    }

    #[test]
    fn test_parse_weekday_variants() {
        assert_eq!(parse_weekday("mon").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("SUNDAY").unwrap(), Weekday::Sun);
        assert!(matches!(
            parse_weekday("funday"),
            Err(CalGridError::InvalidWeekday(_))
        ));
    }
}
