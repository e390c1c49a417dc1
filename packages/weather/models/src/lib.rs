#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Weather condition, hour, and forecast metric types.
//!
//! These types are shared by the weather and congestion models and by the
//! dashboard state. Everything here is plain data; the formulas live in
//! `comfort_map_weather`.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// An hour of the day in the range 0-23.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    /// The last valid hour of the day.
    pub const MAX: u8 = 23;

    /// Creates an hour from a numeric value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range 0-23.
    pub const fn new(value: u8) -> Result<Self, InvalidHourError> {
        if value > Self::MAX {
            return Err(InvalidHourError { value });
        }
        Ok(Self(value))
    }

    /// Returns the numeric value of this hour.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns every hour of the day in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for Hour {
    type Error = InvalidHourError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

impl std::fmt::Display for Hour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:00", self.0)
    }
}

/// Error returned when attempting to create an [`Hour`] from a value
/// outside 0-23.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidHourError {
    /// The invalid hour value that was provided.
    pub value: u8,
}

impl std::fmt::Display for InvalidHourError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid hour {}: expected 0-23", self.value)
    }
}

impl std::error::Error for InvalidHourError {}

/// Qualitative weather condition shown on the dashboard.
///
/// Exactly one condition is active at a time. It is predicted from the
/// selected date and hour, and can be overridden by the user until the next
/// date or hour change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum WeatherCondition {
    /// Clear skies.
    Sunny,
    /// Afternoon showers, typical of the wet season.
    Rainy,
    /// Low cloud, typical of early mornings and late evenings.
    Foggy,
}

impl WeatherCondition {
    /// Returns the icon used to render this condition.
    #[must_use]
    pub const fn icon(self) -> WeatherIcon {
        match self {
            Self::Sunny => WeatherIcon::Sun,
            Self::Rainy => WeatherIcon::Rain,
            Self::Foggy => WeatherIcon::Fog,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Sunny, Self::Rainy, Self::Foggy]
    }
}

/// Icon key for the weather summary card.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WeatherIcon {
    /// Fallback icon used by renderers when no other icon applies.
    Cloud,
    /// Sunny.
    Sun,
    /// Rainy.
    Rain,
    /// Foggy.
    Fog,
}

/// Wet/dry season partition of the calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Season {
    /// May through October.
    Wet,
    /// November through April.
    Dry,
}

impl Season {
    /// Returns the season for a zero-based month index (0 = January).
    #[must_use]
    pub const fn for_month0(month0: u32) -> Self {
        if matches!(month0, 4..=9) {
            Self::Wet
        } else {
            Self::Dry
        }
    }
}

/// Temperature and humidity derived for a date, hour, and condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherMetrics {
    /// Air temperature in whole degrees Celsius. Not clamped.
    pub temperature: i32,
    /// Relative humidity in percent, 0-100.
    pub humidity: u8,
}

/// Everything the weather summary card needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    /// Active condition.
    pub condition: WeatherCondition,
    /// Air temperature in whole degrees Celsius.
    pub temperature: i32,
    /// Relative humidity in percent, 0-100.
    pub humidity: u8,
    /// Icon key, derived from `condition`.
    pub icon: WeatherIcon,
}

impl WeatherData {
    /// Combines a condition with its derived metrics.
    #[must_use]
    pub const fn new(condition: WeatherCondition, metrics: WeatherMetrics) -> Self {
        Self {
            condition,
            temperature: metrics.temperature,
            humidity: metrics.humidity,
            icon: condition.icon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_range_enforced() {
        for v in 0..=23u8 {
            assert_eq!(Hour::new(v).unwrap().value(), v);
        }
        assert_eq!(Hour::new(24), Err(InvalidHourError { value: 24 }));
        assert!(Hour::try_from(255).is_err());
    }

    #[test]
    fn hour_all_covers_the_day() {
        let hours: Vec<u8> = Hour::all().map(Hour::value).collect();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours.first(), Some(&0));
        assert_eq!(hours.last(), Some(&23));
    }

    #[test]
    fn icon_is_one_to_one_with_condition() {
        assert_eq!(WeatherCondition::Sunny.icon(), WeatherIcon::Sun);
        assert_eq!(WeatherCondition::Rainy.icon(), WeatherIcon::Rain);
        assert_eq!(WeatherCondition::Foggy.icon(), WeatherIcon::Fog);
    }

    #[test]
    fn condition_parses_case_insensitively() {
        assert_eq!(
            "rainy".parse::<WeatherCondition>().unwrap(),
            WeatherCondition::Rainy
        );
        assert_eq!(
            "FOGGY".parse::<WeatherCondition>().unwrap(),
            WeatherCondition::Foggy
        );
        assert!("cloudy".parse::<WeatherCondition>().is_err());
    }

    #[test]
    fn season_boundaries() {
        assert_eq!(Season::for_month0(3), Season::Dry);
        assert_eq!(Season::for_month0(4), Season::Wet);
        assert_eq!(Season::for_month0(9), Season::Wet);
        assert_eq!(Season::for_month0(10), Season::Dry);
        assert_eq!(Season::for_month0(0), Season::Dry);
    }
}
