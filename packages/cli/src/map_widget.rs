//! Map widget stand-in for the terminal.
//!
//! There is no map to draw in a terminal, so requests are logged instead.

use std::time::Duration;

use comfort_map_catalog_models::Coordinate;
use comfort_map_state::map::{MapWidget, TileLayer};

/// Logs every map request at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMapWidget;

impl MapWidget for LoggingMapWidget {
    fn fly_to(&self, center: Coordinate, zoom: u8, duration: Duration) {
        log::info!(
            "Map: flying to {center} at zoom {zoom} over {}ms",
            duration.as_millis()
        );
    }

    fn set_tile_layers(&self, layers: &[TileLayer]) {
        for layer in layers {
            log::info!("Map: tile layer {} (max zoom {})", layer.url_template, layer.max_zoom);
        }
    }
}
