//! Compile-time catalog of Baguio City locations and neighborhoods.
//!
//! Both lists are TOML files under `data/` embedded via `include_str!`.
//! Adding a location means adding a `[[location]]` table to
//! `data/locations.toml` and bumping the expected count below.

use std::sync::OnceLock;

use crate::Catalog;

/// Number of built-in locations. Enforced by a test.
#[cfg(test)]
const EXPECTED_LOCATION_COUNT: usize = 14;

/// Number of built-in neighborhoods. Enforced by a test.
#[cfg(test)]
const EXPECTED_NEIGHBORHOOD_COUNT: usize = 20;

const LOCATIONS_TOML: &str = include_str!("../data/locations.toml");
const NEIGHBORHOODS_TOML: &str = include_str!("../data/neighborhoods.toml");

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Returns the built-in catalog.
///
/// # Panics
///
/// Panics if the embedded TOML fails to parse or validate. Since these are
/// compile-time constants, failures indicate a development error and are
/// caught by the tests below.
#[must_use]
pub fn builtin() -> &'static Catalog {
    BUILTIN.get_or_init(|| {
        Catalog::from_toml(LOCATIONS_TOML, NEIGHBORHOODS_TOML)
            .unwrap_or_else(|e| panic!("Failed to load built-in catalog: {e}"))
    })
}
