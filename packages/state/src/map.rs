//! Contract with the external map widget.
//!
//! The widget owns tiles, panning, and animation. The dashboard only tells
//! it where to look and which tile sources to draw, and listens for zoom
//! changes. Every call is fire-and-forget.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use comfort_map_catalog_models::Coordinate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Zoom level when the map first opens.
pub const INITIAL_ZOOM: u8 = 13;

/// Zoom level used when flying to a selection.
pub const SELECTED_ZOOM: u8 = 14;

/// Duration of the fly-to animation.
pub const FLY_DURATION: Duration = Duration::from_millis(1500);

/// Base map imagery.
#[derive(
    Debug,
    Default,
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MapStyle {
    /// Aerial imagery with a labels overlay.
    #[default]
    Satellite,
    /// Street map.
    Standard,
}

impl MapStyle {
    /// Returns the tile layers for this style, bottom layer first.
    #[must_use]
    pub const fn tile_layers(self) -> &'static [TileLayer] {
        match self {
            Self::Satellite => SATELLITE_LAYERS,
            Self::Standard => STANDARD_LAYERS,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Standard, Self::Satellite]
    }
}

/// One raster tile source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    /// URL template with `{x}`, `{y}`, `{z}` placeholders.
    pub url_template: &'static str,
    /// Attribution text, if the provider requires one.
    pub attribution: Option<&'static str>,
    /// Maximum zoom level served.
    pub max_zoom: u8,
}

const SATELLITE_LAYERS: &[TileLayer] = &[
    TileLayer {
        url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        attribution: Some(
            "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community",
        ),
        max_zoom: 19,
    },
    TileLayer {
        url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/Reference/World_Boundaries_and_Places/MapServer/tile/{z}/{y}/{x}",
        attribution: None,
        max_zoom: 19,
    },
];

const STANDARD_LAYERS: &[TileLayer] = &[TileLayer {
    url_template: "https://mt1.google.com/vt/lyrs=m&x={x}&y={y}&z={z}",
    attribution: Some("&copy; Google Maps"),
    max_zoom: 20,
}];

/// A request sent to the map widget.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    /// Animate the view to a new center and zoom.
    FlyTo {
        /// Target center.
        center: Coordinate,
        /// Target zoom.
        zoom: u8,
        /// Animation length.
        duration: Duration,
    },
    /// Replace the tile layers.
    SetTileLayers(Vec<TileLayer>),
}

/// The map widget as seen by the dashboard.
///
/// Implementations must not block; the dashboard never waits for an
/// animation or tile load to finish.
pub trait MapWidget: Send + Sync {
    /// Starts an animated transition to `center` at `zoom`.
    fn fly_to(&self, center: Coordinate, zoom: u8, duration: Duration);

    /// Replaces the rendered tile layers.
    fn set_tile_layers(&self, layers: &[TileLayer]);
}

/// A map widget that ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMapWidget;

impl MapWidget for NoopMapWidget {
    fn fly_to(&self, _center: Coordinate, _zoom: u8, _duration: Duration) {}

    fn set_tile_layers(&self, _layers: &[TileLayer]) {}
}

/// A map widget that records every request, for test harnesses.
#[derive(Debug, Default)]
pub struct RecordingMapWidget {
    commands: Mutex<Vec<MapCommand>>,
}

impl RecordingMapWidget {
    /// Returns a copy of every command received so far.
    #[must_use]
    pub fn commands(&self) -> Vec<MapCommand> {
        self.commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent command, if any.
    #[must_use]
    pub fn last(&self) -> Option<MapCommand> {
        self.commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    fn push(&self, command: MapCommand) {
        self.commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(command);
    }
}

impl MapWidget for RecordingMapWidget {
    fn fly_to(&self, center: Coordinate, zoom: u8, duration: Duration) {
        self.push(MapCommand::FlyTo {
            center,
            zoom,
            duration,
        });
    }

    fn set_tile_layers(&self, layers: &[TileLayer]) {
        self.push(MapCommand::SetTileLayers(layers.to_vec()));
    }
}
