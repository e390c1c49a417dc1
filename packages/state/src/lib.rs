#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Dashboard session state and derivation pipeline.
//!
//! [`AppState`] is the single owner of everything the user can change:
//! date, hour, weather, selected location, map style, and sidebar
//! visibility. Every mutation synchronously recomputes the derived weather
//! summary and the congestion snapshot for the whole catalog, so views can
//! read a consistent picture at any time.
//!
//! Weather is stored once. Changing the date or hour always replaces it
//! with the model's prediction; picking a condition directly overrides it
//! until the next date or hour change.

pub mod config;
pub mod map;

use std::sync::Arc;

use chrono::NaiveDate;
use comfort_map_catalog::Catalog;
use comfort_map_catalog_models::{Coordinate, Location};
use comfort_map_congestion_models::{CongestionSnapshot, CrowdLevel};
use comfort_map_weather_models::{Hour, WeatherCondition, WeatherData};

use crate::config::{SessionConfig, Viewport};
use crate::map::{FLY_DURATION, INITIAL_ZOOM, MapStyle, MapWidget, SELECTED_ZOOM};

/// Errors returned by state mutations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The requested location is not in the catalog.
    #[error("Unknown location: {id}")]
    UnknownLocation {
        /// The identifier that was requested.
        id: String,
    },
}

/// Session state of the dashboard.
pub struct AppState<'a> {
    catalog: &'a Catalog,
    map: Arc<dyn MapWidget>,
    date: NaiveDate,
    hour: Hour,
    weather: WeatherCondition,
    selected_location_id: Option<String>,
    map_style: MapStyle,
    sidebar_open: bool,
    viewport: Viewport,
    zoom: u8,
    weather_data: WeatherData,
    congestion: CongestionSnapshot,
}

impl<'a> AppState<'a> {
    /// Starts a session.
    ///
    /// The map opens on the city center at [`INITIAL_ZOOM`] and immediately
    /// flies in to [`SELECTED_ZOOM`]. Weather starts as
    /// [`WeatherCondition::Sunny`] and is immediately replaced by the
    /// prediction for the configured date and hour. The sidebar starts open
    /// on wide viewports and closed on compact ones.
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: SessionConfig, map: Arc<dyn MapWidget>) -> Self {
        let weather = WeatherCondition::Sunny;
        let weather_data = comfort_map_weather::weather_data(config.date, config.hour, weather);

        let mut state = Self {
            catalog,
            map,
            date: config.date,
            hour: config.hour,
            weather,
            selected_location_id: None,
            map_style: config.map_style,
            sidebar_open: !config.viewport.is_compact(),
            viewport: config.viewport,
            zoom: INITIAL_ZOOM,
            weather_data,
            congestion: CongestionSnapshot::default(),
        };

        state.map.set_tile_layers(state.map_style.tile_layers());
        state.fly_to(state.catalog.center());
        state.predict_weather();
        state.recompute();

        state
    }

    /// Selects a date. Resets the weather to the prediction.
    pub fn set_date(&mut self, date: NaiveDate) {
        if date == self.date {
            return;
        }
        log::debug!("Date changed: {} -> {date}", self.date);
        self.date = date;
        self.predict_weather();
        self.recompute();
    }

    /// Selects an hour. Resets the weather to the prediction.
    pub fn set_hour(&mut self, hour: Hour) {
        if hour == self.hour {
            return;
        }
        log::debug!("Hour changed: {} -> {hour}", self.hour);
        self.hour = hour;
        self.predict_weather();
        self.recompute();
    }

    /// Overrides the weather condition until the next date or hour change.
    pub fn set_weather(&mut self, weather: WeatherCondition) {
        log::debug!("Weather set to {weather}");
        self.weather = weather;
        self.recompute();
    }

    /// Switches the base map and pushes the new tile layers to the widget.
    pub fn set_map_style(&mut self, style: MapStyle) {
        if style == self.map_style {
            return;
        }
        self.map_style = style;
        self.map.set_tile_layers(style.tile_layers());
    }

    /// Selects a location, or clears the selection with `None`.
    ///
    /// The map flies to the location, or back to the city center when the
    /// selection is cleared. On compact viewports the sidebar closes so the
    /// map is visible.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnknownLocation`] if `id` is not in the
    /// catalog. The state is left unchanged.
    pub fn select_location(
        &mut self,
        id: Option<&str>,
    ) -> Result<Option<&'a Location>, StateError> {
        let Some(id) = id else {
            self.selected_location_id = None;
            self.fly_to(self.catalog.center());
            return Ok(None);
        };

        let catalog = self.catalog;
        let Some(location) = catalog.get(id) else {
            log::warn!("Ignoring selection of unknown location '{id}'");
            return Err(StateError::UnknownLocation { id: id.to_string() });
        };

        log::debug!("Selected {}", location.name);
        self.selected_location_id = Some(location.id.clone());
        self.fly_to(location.coordinate());

        if self.viewport.is_compact() {
            self.sidebar_open = false;
        }

        Ok(Some(location))
    }

    /// Opens or closes the sidebar.
    pub const fn toggle_sidebar(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    /// Records a zoom change reported by the map widget.
    pub fn on_zoom_changed(&mut self, zoom: u8) {
        log::trace!("Map zoom changed to {zoom}");
        self.zoom = zoom;
    }

    /// Flies the map to `center`. The zoom is assumed to settle on
    /// [`SELECTED_ZOOM`] until the widget reports otherwise.
    fn fly_to(&mut self, center: Coordinate) {
        self.map.fly_to(center, SELECTED_ZOOM, FLY_DURATION);
        self.zoom = SELECTED_ZOOM;
    }

    fn predict_weather(&mut self) {
        self.weather = comfort_map_weather::predict_condition(self.date, self.hour);
    }

    fn recompute(&mut self) {
        self.weather_data = comfort_map_weather::weather_data(self.date, self.hour, self.weather);
        self.congestion =
            comfort_map_congestion::snapshot(self.catalog, self.date, self.hour, self.weather);

        log::debug!(
            "Recomputed {} {}: {} {}C {}% humidity",
            self.date,
            self.hour,
            self.weather,
            self.weather_data.temperature,
            self.weather_data.humidity
        );
    }

    /// The catalog this session reads from.
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Selected date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Selected hour.
    #[must_use]
    pub const fn hour(&self) -> Hour {
        self.hour
    }

    /// Active weather condition.
    #[must_use]
    pub const fn weather(&self) -> WeatherCondition {
        self.weather
    }

    /// Derived weather summary.
    #[must_use]
    pub const fn weather_data(&self) -> &WeatherData {
        &self.weather_data
    }

    /// Derived crowd levels for every location.
    #[must_use]
    pub const fn congestion(&self) -> &CongestionSnapshot {
        &self.congestion
    }

    /// Crowd level of one location.
    #[must_use]
    pub fn crowd_level(&self, id: &str) -> Option<CrowdLevel> {
        self.congestion.get(id)
    }

    /// Identifier of the selected location.
    #[must_use]
    pub fn selected_location_id(&self) -> Option<&str> {
        self.selected_location_id.as_deref()
    }

    /// The selected location.
    #[must_use]
    pub fn selected_location(&self) -> Option<&'a Location> {
        let catalog = self.catalog;
        self.selected_location_id
            .as_deref()
            .and_then(|id| catalog.get(id))
    }

    /// Where the map is (or is flying) centered.
    #[must_use]
    pub fn map_center(&self) -> Coordinate {
        self.selected_location()
            .map_or_else(|| self.catalog.center(), Location::coordinate)
    }

    /// Base map style.
    #[must_use]
    pub const fn map_style(&self) -> MapStyle {
        self.map_style
    }

    /// Whether the sidebar is open.
    #[must_use]
    pub const fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Viewport the session renders into.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current zoom: the target of the last fly-to, or the last level
    /// reported by the map widget, whichever came later.
    #[must_use]
    pub const fn zoom(&self) -> u8 {
        self.zoom
    }
}

impl std::fmt::Debug for AppState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("date", &self.date)
            .field("hour", &self.hour)
            .field("weather", &self.weather)
            .field("selected_location_id", &self.selected_location_id)
            .field("map_style", &self.map_style)
            .field("sidebar_open", &self.sidebar_open)
            .field("zoom", &self.zoom)
            .finish_non_exhaustive()
    }
}
