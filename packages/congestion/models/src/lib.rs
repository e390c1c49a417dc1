#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crowd level and congestion snapshot types.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Three-level crowd classification, ordered from quietest to busiest.
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
pub enum CrowdLevel {
    /// Few people around.
    Low,
    /// Noticeable crowd.
    Medium,
    /// Expect queues and slow walking.
    High,
}

impl CrowdLevel {
    /// Returns the label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Quiet",
            Self::Medium => "Busy",
            Self::High => "Packed",
        }
    }

    /// Returns the color tone used for meters and badges.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Low => "emerald",
            Self::Medium => "yellow",
            Self::High => "rose",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

/// Crowd level of every catalog location for one date, hour, and weather.
///
/// Entries keep the catalog's display order. A snapshot is always rebuilt
/// from scratch rather than patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CongestionSnapshot {
    entries: Vec<(String, CrowdLevel)>,
}

impl CongestionSnapshot {
    /// Returns the crowd level of a location, if it is in the snapshot.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<CrowdLevel> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|&(_, level)| level)
    }

    /// Iterates over `(location id, level)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, CrowdLevel)> {
        self.entries.iter().map(|(id, level)| (id.as_str(), *level))
    }

    /// Number of locations in the snapshot.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of locations at the given level.
    #[must_use]
    pub fn count(&self, level: CrowdLevel) -> usize {
        self.entries.iter().filter(|(_, l)| *l == level).count()
    }
}

impl FromIterator<(String, CrowdLevel)> for CongestionSnapshot {
    fn from_iter<T: IntoIterator<Item = (String, CrowdLevel)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
