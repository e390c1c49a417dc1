#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Static point-of-interest catalog for the comfort map.
//!
//! Locations and neighborhood centroids are defined as TOML files embedded
//! at compile time (see [`registry`]). A [`Catalog`] is validated once on
//! load and is read-only afterwards; everything else holds references into
//! it.

pub mod registry;

use std::collections::BTreeSet;

use comfort_map_catalog_models::{
    Coordinate, Location, LocationsFile, Neighborhood, NeighborhoodsFile,
};

/// Identifier of the primary commercial strip, which has a fixed evening
/// congestion rule.
pub const PRIMARY_COMMERCIAL_STRIP_ID: &str = "session-road";

/// Largest allowed weekend multiplier.
pub const MAX_WEEKEND_MULTIPLIER: f64 = 2.0;

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// TOML parsing failed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Two locations share an identifier.
    #[error("Duplicate location ID: {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },

    /// A peak hour is outside 0-23.
    #[error("Location {id} has peak hour {hour} outside 0-23")]
    PeakHourOutOfRange {
        /// Offending location.
        id: String,
        /// Offending hour.
        hour: u8,
    },

    /// A weekend multiplier is outside 1.0-2.0.
    #[error("Location {id} has weekend multiplier {multiplier} outside 1.0-2.0")]
    WeekendMultiplierOutOfRange {
        /// Offending location.
        id: String,
        /// Offending multiplier.
        multiplier: f64,
    },
}

/// The validated set of locations and neighborhoods.
#[derive(Debug, Clone)]
pub struct Catalog {
    center: Coordinate,
    locations: Vec<Location>,
    neighborhoods: Vec<Neighborhood>,
}

impl Catalog {
    /// Builds a catalog, checking every location invariant.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if an identifier repeats, a peak hour is
    /// outside 0-23, or a weekend multiplier is outside 1.0-2.0.
    pub fn new(
        center: Coordinate,
        locations: Vec<Location>,
        neighborhoods: Vec<Neighborhood>,
    ) -> Result<Self, CatalogError> {
        validate(&locations)?;

        log::debug!(
            "Loaded catalog with {} locations and {} neighborhoods",
            locations.len(),
            neighborhoods.len()
        );

        Ok(Self {
            center,
            locations,
            neighborhoods,
        })
    }

    /// Parses and validates a catalog from TOML documents.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if either document fails to parse or the
    /// locations violate an invariant.
    pub fn from_toml(locations_toml: &str, neighborhoods_toml: &str) -> Result<Self, CatalogError> {
        let locations: LocationsFile = toml::de::from_str(locations_toml)?;
        let neighborhoods: NeighborhoodsFile = toml::de::from_str(neighborhoods_toml)?;

        Self::new(
            locations.center,
            locations.locations,
            neighborhoods.neighborhoods,
        )
    }

    /// Map center used when no location is selected.
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        self.center
    }

    /// All locations, in display order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// All neighborhood centroids.
    #[must_use]
    pub fn neighborhoods(&self) -> &[Neighborhood] {
        &self.neighborhoods
    }

    /// Looks up a location by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|loc| loc.id == id)
    }

    /// Number of locations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the catalog has no locations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

fn validate(locations: &[Location]) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();

    for loc in locations {
        if !seen.insert(loc.id.as_str()) {
            return Err(CatalogError::DuplicateId { id: loc.id.clone() });
        }

        if let Some(&hour) = loc.peak_hours.iter().find(|&&h| h > 23) {
            return Err(CatalogError::PeakHourOutOfRange {
                id: loc.id.clone(),
                hour,
            });
        }

        if !(1.0..=MAX_WEEKEND_MULTIPLIER).contains(&loc.weekend_multiplier) {
            return Err(CatalogError::WeekendMultiplierOutOfRange {
                id: loc.id.clone(),
                multiplier: loc.weekend_multiplier,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEIGHBORHOODS: &str = r#"
        [[neighborhood]]
        name = "Pacdal"
        lat = 16.4167
        lng = 120.6167
    "#;

    fn load(body: &str) -> Result<Catalog, CatalogError> {
        let locations = format!("center = {{ lat = 16.4, lng = 120.6 }}\n{body}");
        Catalog::from_toml(&locations, NEIGHBORHOODS)
    }

    const PARK: &str = r#"
        [[location]]
        id = "park"
        name = "Park"
        lat = 16.41
        lng = 120.59
        description = "A park"
        category = "Outdoor"
        peak_hours = [9, 10]
        weekend_multiplier = 1.5
    "#;

    #[test]
    fn parses_minimal_catalog() {
        let catalog = load(PARK).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.neighborhoods().len(), 1);
        let park = catalog.get("park").unwrap();
        assert!(park.is_peak_hour(9));
        assert!(!park.is_peak_hour(11));
        assert!(park.image_url.is_empty());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let body = format!("{PARK}\n{PARK}");
        let err = load(&body).unwrap_err();
        assert!(
            matches!(err, CatalogError::DuplicateId { ref id } if id == "park"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn rejects_out_of_range_peak_hour() {
        let body = PARK.replace("[9, 10]", "[9, 24]");
        let err = load(&body).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::PeakHourOutOfRange { hour: 24, .. }
        ));
    }

    #[test]
    fn rejects_out_of_range_weekend_multiplier() {
        for bad in ["0.9", "2.5"] {
            let body = PARK.replace("1.5", bad);
            let err = load(&body).unwrap_err();
            assert!(
                matches!(err, CatalogError::WeekendMultiplierOutOfRange { .. }),
                "multiplier {bad} accepted"
            );
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let body = PARK.replace("Outdoor", "Underground");
        assert!(matches!(load(&body), Err(CatalogError::Toml(_))));
    }
}
