#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Point-of-interest and neighborhood reference types.
//!
//! Defines the TOML schema for the static location catalog. Locations carry
//! the parameters the congestion model needs; neighborhoods are plain
//! centroids kept as supplementary geographic data.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Whether a location is sheltered from the weather.
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
pub enum LocationCategory {
    /// Malls, markets, campuses, museums.
    Indoor,
    /// Parks, streets, viewpoints.
    Outdoor,
}

/// A point of interest on the dashboard, deserialized from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Location {
    /// Unique location identifier (e.g., `"session-road"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// One-line description shown in detail views.
    pub description: String,
    /// Weather sensitivity class.
    pub category: LocationCategory,
    /// Hours (0-23) with structurally elevated foot traffic.
    #[serde(default)]
    pub peak_hours: Vec<u8>,
    /// Congestion score multiplier on Saturdays and Sundays (1.0-2.0).
    pub weekend_multiplier: f64,
    /// Thumbnail image URL.
    #[serde(default)]
    pub image_url: String,
}

impl Location {
    /// Returns the location identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable location name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the coordinate of this location.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// Whether `hour` is one of this location's peak hours.
    #[must_use]
    pub fn is_peak_hour(&self, hour: u8) -> bool {
        self.peak_hours.contains(&hour)
    }
}

/// A named neighborhood centroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    /// Neighborhood (barangay) name.
    pub name: String,
    /// Centroid latitude.
    pub lat: f64,
    /// Centroid longitude.
    pub lng: f64,
}

impl Neighborhood {
    /// Returns the centroid of this neighborhood.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Top-level layout of a locations TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsFile {
    /// Map center used when nothing is selected.
    pub center: Coordinate,
    /// Points of interest, in display order.
    #[serde(rename = "location")]
    pub locations: Vec<Location>,
}

/// Top-level layout of a neighborhoods TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborhoodsFile {
    /// Neighborhood centroids.
    #[serde(rename = "neighborhood")]
    pub neighborhoods: Vec<Neighborhood>,
}
