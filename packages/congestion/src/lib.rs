#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Deterministic crowd congestion classifier.
//!
//! Each location is classified independently by a short list of rules,
//! evaluated in priority order with the first match winning:
//!
//! 1. Rain empties outdoor spots and pushes people indoors.
//! 2. The primary commercial strip is packed every evening.
//! 3. Otherwise a score built from peak hours, the weekend multiplier, and
//!    the weather is thresholded into a [`CrowdLevel`].

use chrono::{Datelike, NaiveDate, Weekday};
use comfort_map_catalog::{Catalog, PRIMARY_COMMERCIAL_STRIP_ID};
use comfort_map_catalog_models::{Location, LocationCategory};
use comfort_map_congestion_models::{CongestionSnapshot, CrowdLevel};
use comfort_map_weather_models::{Hour, WeatherCondition};

const BASE_SCORE: f64 = 1.0;
const PEAK_HOUR_BONUS: f64 = 1.5;
const SUNNY_MULTIPLIER: f64 = 1.1;
const FOGGY_MULTIPLIER: f64 = 0.9;

/// Scores below this are [`CrowdLevel::Low`].
pub const MEDIUM_THRESHOLD: f64 = 1.5;

/// Scores at or above this are [`CrowdLevel::High`].
pub const HIGH_THRESHOLD: f64 = 2.5;

/// Evening hours during which the primary commercial strip is always packed.
const STRIP_EVENING: std::ops::RangeInclusive<u8> = 17..=20;

/// Whether `date` falls on a Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classifies how crowded `location` is at the given date, hour, and weather.
#[must_use]
pub fn classify(
    location: &Location,
    date: NaiveDate,
    hour: Hour,
    weather: WeatherCondition,
) -> CrowdLevel {
    if weather == WeatherCondition::Rainy {
        match location.category {
            LocationCategory::Outdoor => return CrowdLevel::Low,
            LocationCategory::Indoor => return CrowdLevel::Medium,
        }
    }

    if location.id == PRIMARY_COMMERCIAL_STRIP_ID && STRIP_EVENING.contains(&hour.value()) {
        return CrowdLevel::High;
    }

    level_for_score(congestion_score(location, date, hour, weather))
}

/// Computes the fallback congestion score of a location.
///
/// Rain leaves the score untouched here because [`classify`] settles every
/// rainy case for both categories before scoring.
#[must_use]
pub fn congestion_score(
    location: &Location,
    date: NaiveDate,
    hour: Hour,
    weather: WeatherCondition,
) -> f64 {
    let mut score = BASE_SCORE;

    if location.is_peak_hour(hour.value()) {
        score += PEAK_HOUR_BONUS;
    }

    if is_weekend(date) {
        score *= location.weekend_multiplier;
    }

    match weather {
        WeatherCondition::Sunny => score *= SUNNY_MULTIPLIER,
        WeatherCondition::Foggy => score *= FOGGY_MULTIPLIER,
        WeatherCondition::Rainy => {}
    }

    score
}

/// Maps a congestion score onto a crowd level.
#[must_use]
pub fn level_for_score(score: f64) -> CrowdLevel {
    if score < MEDIUM_THRESHOLD {
        CrowdLevel::Low
    } else if score < HIGH_THRESHOLD {
        CrowdLevel::Medium
    } else {
        CrowdLevel::High
    }
}

/// Classifies every location in the catalog.
#[must_use]
pub fn snapshot(
    catalog: &Catalog,
    date: NaiveDate,
    hour: Hour,
    weather: WeatherCondition,
) -> CongestionSnapshot {
    let snapshot: CongestionSnapshot = catalog
        .locations()
        .iter()
        .map(|loc| (loc.id.clone(), classify(loc, date, hour, weather)))
        .collect();

    log::debug!(
        "Congestion for {date} {hour} {weather}: {} quiet, {} busy, {} packed",
        snapshot.count(CrowdLevel::Low),
        snapshot.count(CrowdLevel::Medium),
        snapshot.count(CrowdLevel::High),
    );

    snapshot
}
