//! Session start-up configuration.
//!
//! A session starts at the current local date and hour unless overridden by
//! environment variables:
//!
//! * `COMFORT_MAP_DATE`: `YYYY-MM-DD`
//! * `COMFORT_MAP_HOUR`: `0`-`23`
//! * `COMFORT_MAP_STYLE`: `satellite` or `standard`
//! * `COMFORT_MAP_VIEWPORT_WIDTH`: viewport width in pixels

use chrono::{Local, NaiveDate, Timelike};
use comfort_map_weather_models::Hour;

use crate::map::MapStyle;

/// Viewports narrower than this use the compact (mobile) layout.
pub const COMPACT_BREAKPOINT: u32 = 768;

/// Width assumed when none is configured.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors that can occur while reading session configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A date was not in `YYYY-MM-DD` form.
    #[error("Invalid date {value:?}: {source}")]
    InvalidDate {
        /// Raw value.
        value: String,
        /// Underlying parse failure.
        source: chrono::ParseError,
    },

    /// An hour was not an integer in 0-23.
    #[error("Invalid hour {value:?}: expected 0-23")]
    InvalidHour {
        /// Raw value.
        value: String,
    },

    /// A map style was not recognized.
    #[error("Invalid map style {value:?}: expected satellite or standard")]
    InvalidMapStyle {
        /// Raw value.
        value: String,
    },

    /// A viewport width was not a positive integer.
    #[error("Invalid viewport width {value:?}")]
    InvalidViewportWidth {
        /// Raw value.
        value: String,
    },
}

/// Dimensions of the surface the dashboard is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
}

impl Viewport {
    /// Whether the compact (mobile) layout applies.
    #[must_use]
    pub const fn is_compact(self) -> bool {
        self.width < COMPACT_BREAKPOINT
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

/// Initial values for a dashboard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Selected date.
    pub date: NaiveDate,
    /// Selected hour.
    pub hour: Hour,
    /// Base map style.
    pub map_style: MapStyle,
    /// Viewport the session renders into.
    pub viewport: Viewport,
}

impl SessionConfig {
    /// Starts at the current local date and hour.
    #[must_use]
    pub fn now() -> Self {
        let now = Local::now();
        let hour = u8::try_from(now.hour())
            .ok()
            .and_then(|h| Hour::new(h).ok())
            .unwrap_or_default();

        Self {
            date: now.date_naive(),
            hour,
            map_style: MapStyle::default(),
            viewport: Viewport::default(),
        }
    }

    /// Reads overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads overrides through `lookup`, falling back to [`Self::now`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::now();

        if let Some(value) = lookup("COMFORT_MAP_DATE") {
            config.date = parse_date(&value)?;
        }
        if let Some(value) = lookup("COMFORT_MAP_HOUR") {
            config.hour = parse_hour(&value)?;
        }
        if let Some(value) = lookup("COMFORT_MAP_STYLE") {
            config.map_style = value
                .trim()
                .parse::<MapStyle>()
                .map_err(|_| ConfigError::InvalidMapStyle {
                    value: value.clone(),
                })?;
        }
        if let Some(value) = lookup("COMFORT_MAP_VIEWPORT_WIDTH") {
            let width = value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|w| *w > 0)
                .ok_or_else(|| ConfigError::InvalidViewportWidth {
                    value: value.clone(),
                })?;
            config.viewport = Viewport { width };
        }

        log::debug!(
            "Session config: date={} hour={} style={} viewport={}px",
            config.date,
            config.hour,
            config.map_style,
            config.viewport.width
        );

        Ok(config)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::now()
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDate`] if the value is not a valid date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        ConfigError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

/// Parses an hour in 0-23.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidHour`] if the value is not an integer in
/// range.
pub fn parse_hour(value: &str) -> Result<Hour, ConfigError> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(|h| Hour::new(h).ok())
        .ok_or_else(|| ConfigError::InvalidHour {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn overrides_apply() {
        let vars = [
            ("COMFORT_MAP_DATE", "2024-06-15"),
            ("COMFORT_MAP_HOUR", "15"),
            ("COMFORT_MAP_STYLE", "standard"),
            ("COMFORT_MAP_VIEWPORT_WIDTH", "390"),
        ];
        let config = SessionConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(config.hour.value(), 15);
        assert_eq!(config.map_style, MapStyle::Standard);
        assert!(config.viewport.is_compact());
    }

    #[test]
    fn defaults_without_overrides() {
        let config = SessionConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.map_style, MapStyle::Satellite);
        assert_eq!(config.viewport.width, DEFAULT_VIEWPORT_WIDTH);
        assert!(!config.viewport.is_compact());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SessionConfig::from_lookup(lookup(&[("COMFORT_MAP_DATE", "2024-13-01")])),
            Err(ConfigError::InvalidDate { .. })
        ));
        assert!(matches!(
            SessionConfig::from_lookup(lookup(&[("COMFORT_MAP_HOUR", "24")])),
            Err(ConfigError::InvalidHour { .. })
        ));
        assert!(matches!(
            SessionConfig::from_lookup(lookup(&[("COMFORT_MAP_STYLE", "terrain")])),
            Err(ConfigError::InvalidMapStyle { .. })
        ));
        assert!(matches!(
            SessionConfig::from_lookup(lookup(&[("COMFORT_MAP_VIEWPORT_WIDTH", "0")])),
            Err(ConfigError::InvalidViewportWidth { .. })
        ));
    }

    #[test]
    fn compact_breakpoint() {
        assert!(Viewport { width: 767 }.is_compact());
        assert!(!Viewport { width: 768 }.is_compact());
    }

    #[test]
    fn parse_hour_trims() {
        assert_eq!(parse_hour(" 7 ").unwrap().value(), 7);
        assert!(parse_hour("-1").is_err());
        assert!(parse_hour("noon").is_err());
    }
}
