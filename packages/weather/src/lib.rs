#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Deterministic weather prediction and metric estimation.
//!
//! There is no real forecast behind the dashboard. The condition is a pure
//! function of the month's season and the hour, and the metrics are a
//! monthly base temperature with a cosine diurnal swing peaking at 2 PM.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};
use comfort_map_weather_models::{Hour, Season, WeatherCondition, WeatherData, WeatherMetrics};

/// Hour of the daily temperature peak.
const PEAK_HOUR: f64 = 14.0;

/// Half the peak-to-trough temperature swing, in degrees Celsius.
const DIURNAL_AMPLITUDE: f64 = 4.0;

/// Humidity used when no condition-specific value applies.
pub const DEFAULT_HUMIDITY: u8 = 75;

/// Extra humidity at night (before 6 AM and after 6 PM).
const NIGHT_HUMIDITY_BONUS: u8 = 10;

const MAX_HUMIDITY: u8 = 100;

/// Returns the season of the given date.
#[must_use]
pub fn season(date: NaiveDate) -> Season {
    Season::for_month0(date.month0())
}

/// Predicts the weather condition for a date and hour.
///
/// Only the season of `date` and the hour matter; the year and day of
/// month are ignored.
#[must_use]
pub fn predict_condition(date: NaiveDate, hour: Hour) -> WeatherCondition {
    let h = hour.value();

    match season(date) {
        Season::Wet => {
            if (13..=18).contains(&h) {
                WeatherCondition::Rainy
            } else if !(7..20).contains(&h) {
                WeatherCondition::Foggy
            } else {
                WeatherCondition::Sunny
            }
        }
        Season::Dry => {
            if h <= 6 {
                WeatherCondition::Foggy
            } else {
                WeatherCondition::Sunny
            }
        }
    }
}

/// Returns the base temperature in degrees Celsius for a zero-based month.
#[must_use]
pub const fn base_temperature(month0: u32) -> f64 {
    match month0 {
        0 | 11 => 19.0,
        1 => 21.0,
        2..=4 => 24.0,
        _ => 22.0,
    }
}

/// Returns the diurnal temperature offset for an hour.
///
/// Peaks at +4 at 14:00 and bottoms out at -4 at 02:00.
#[must_use]
pub fn diurnal_variation(hour: Hour) -> f64 {
    let offset = f64::from(hour.value()) - PEAK_HOUR;
    (offset * PI / 12.0).cos() * DIURNAL_AMPLITUDE
}

const fn condition_temperature_adjustment(condition: WeatherCondition) -> i32 {
    match condition {
        WeatherCondition::Rainy => -2,
        WeatherCondition::Sunny => 1,
        WeatherCondition::Foggy => -1,
    }
}

/// Base humidity for a condition, before the night bonus.
#[must_use]
pub const fn base_humidity(condition: Option<WeatherCondition>) -> u8 {
    match condition {
        Some(WeatherCondition::Rainy) => 95,
        Some(WeatherCondition::Foggy) => 90,
        Some(WeatherCondition::Sunny) => 60,
        None => DEFAULT_HUMIDITY,
    }
}

/// Derives temperature and humidity for a date, hour, and condition.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn derive_metrics(date: NaiveDate, hour: Hour, condition: WeatherCondition) -> WeatherMetrics {
    let base = base_temperature(date.month0());
    // Values stay within roughly 15..28, so the cast cannot truncate.
    let rounded = (base + diurnal_variation(hour)).round() as i32;
    let temperature = rounded + condition_temperature_adjustment(condition);

    let h = hour.value();
    let mut humidity = base_humidity(Some(condition));
    if !(6..=18).contains(&h) {
        humidity += NIGHT_HUMIDITY_BONUS;
    }
    let humidity = humidity.min(MAX_HUMIDITY);

    debug_assert!(humidity <= MAX_HUMIDITY);

    WeatherMetrics {
        temperature,
        humidity,
    }
}

/// Derives the full weather summary for a date, hour, and condition.
#[must_use]
pub fn weather_data(date: NaiveDate, hour: Hour, condition: WeatherCondition) -> WeatherData {
    WeatherData::new(condition, derive_metrics(date, hour, condition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hour(h: u8) -> Hour {
        Hour::new(h).unwrap()
    }

    #[test]
    fn wet_season_predictions() {
        let june = date(2024, 6, 12);
        assert_eq!(predict_condition(june, hour(13)), WeatherCondition::Rainy);
        assert_eq!(predict_condition(june, hour(18)), WeatherCondition::Rainy);
        assert_eq!(predict_condition(june, hour(6)), WeatherCondition::Foggy);
        assert_eq!(predict_condition(june, hour(20)), WeatherCondition::Foggy);
        assert_eq!(predict_condition(june, hour(19)), WeatherCondition::Sunny);
        assert_eq!(predict_condition(june, hour(7)), WeatherCondition::Sunny);
        assert_eq!(predict_condition(june, hour(12)), WeatherCondition::Sunny);
    }

    #[test]
    fn dry_season_predictions() {
        let jan = date(2024, 1, 2);
        assert_eq!(predict_condition(jan, hour(0)), WeatherCondition::Foggy);
        assert_eq!(predict_condition(jan, hour(6)), WeatherCondition::Foggy);
        assert_eq!(predict_condition(jan, hour(7)), WeatherCondition::Sunny);
        assert_eq!(predict_condition(jan, hour(15)), WeatherCondition::Sunny);
        assert_eq!(predict_condition(jan, hour(23)), WeatherCondition::Sunny);
    }

    #[test]
    fn prediction_ignores_year_and_day() {
        for month in 1..=12 {
            let reference = date(2024, month, 1);
            for h in Hour::all() {
                let expected = predict_condition(reference, h);
                for (y, d) in [(1999, 28), (2031, 15), (2024, 9)] {
                    assert_eq!(
                        predict_condition(date(y, month, d), h),
                        expected,
                        "month {month} hour {h} varied with {y}-{d}"
                    );
                }
            }
        }
    }

    #[test]
    fn base_temperature_by_month() {
        assert!((base_temperature(0) - 19.0).abs() < f64::EPSILON);
        assert!((base_temperature(11) - 19.0).abs() < f64::EPSILON);
        assert!((base_temperature(1) - 21.0).abs() < f64::EPSILON);
        for m in 2..=4 {
            assert!((base_temperature(m) - 24.0).abs() < f64::EPSILON);
        }
        for m in 5..=10 {
            assert!((base_temperature(m) - 22.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn diurnal_peak_and_trough() {
        assert!((diurnal_variation(hour(14)) - 4.0).abs() < 1e-9);
        assert!((diurnal_variation(hour(2)) + 4.0).abs() < 1e-9);
        assert!(diurnal_variation(hour(8)).abs() < 1e-9);
    }

    #[test]
    fn tuesday_in_january_at_two_pm() {
        let d = date(2024, 1, 2);
        assert_eq!(d.weekday(), Weekday::Tue);
        let condition = predict_condition(d, hour(14));
        assert_eq!(condition, WeatherCondition::Sunny);

        let metrics = derive_metrics(d, hour(14), condition);
        assert_eq!(metrics.temperature, 24);
        assert_eq!(metrics.humidity, 60);
    }

    #[test]
    fn rainy_night_humidity_is_clamped() {
        let metrics = derive_metrics(date(2024, 7, 1), hour(2), WeatherCondition::Rainy);
        assert_eq!(metrics.humidity, 100);
    }

    #[test]
    fn night_bonus_applies_outside_six_to_eighteen() {
        let humidity = |h, c| derive_metrics(date(2024, 3, 10), hour(h), c).humidity;
        assert_eq!(humidity(5, WeatherCondition::Sunny), 70);
        assert_eq!(humidity(6, WeatherCondition::Sunny), 60);
        assert_eq!(humidity(18, WeatherCondition::Sunny), 60);
        assert_eq!(humidity(19, WeatherCondition::Sunny), 70);
        assert_eq!(humidity(19, WeatherCondition::Foggy), 100);
    }

    #[test]
    fn condition_adjusts_temperature() {
        let temperature = |c| derive_metrics(date(2024, 4, 10), hour(14), c).temperature;
        assert_eq!(temperature(WeatherCondition::Sunny), 29);
        assert_eq!(temperature(WeatherCondition::Foggy), 27);
        assert_eq!(temperature(WeatherCondition::Rainy), 26);
    }

    #[test]
    fn cold_season_trough() {
        // 19 - 4 = 15, foggy -1
        let metrics = derive_metrics(date(2023, 12, 25), hour(2), WeatherCondition::Foggy);
        assert_eq!(metrics.temperature, 14);
        assert_eq!(metrics.humidity, 100);
    }

    #[test]
    fn metrics_are_deterministic_and_in_range() {
        for month in 1..=12 {
            let d = date(2025, month, 14);
            for h in Hour::all() {
                for &c in WeatherCondition::all() {
                    let first = derive_metrics(d, h, c);
                    assert_eq!(first, derive_metrics(d, h, c));
                    assert!(first.humidity <= 100, "{d} {h} {c}: {}", first.humidity);
                }
            }
        }
    }

    #[test]
    fn default_humidity_is_seventy_five() {
        assert_eq!(base_humidity(None), 75);
    }

    #[test]
    fn weather_data_carries_icon() {
        let data = weather_data(date(2024, 8, 3), hour(15), WeatherCondition::Rainy);
        assert_eq!(data.condition, WeatherCondition::Rainy);
        assert_eq!(data.icon, comfort_map_weather_models::WeatherIcon::Rain);
        assert_eq!(data.temperature, 24);
        assert_eq!(data.humidity, 95);
    }
}
