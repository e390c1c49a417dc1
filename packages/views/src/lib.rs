#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Presentation view models for the comfort map dashboard.
//!
//! Each view is plain serializable data built from an [`AppState`]. Front
//! ends render these however they like; user intent goes back through the
//! `AppState` setters. The [`text`] module renders views for terminals.

pub mod text;

use chrono::{NaiveDate, NaiveTime};
use comfort_map_catalog_models::{Coordinate, Location, LocationCategory};
use comfort_map_congestion_models::CrowdLevel;
use comfort_map_state::AppState;
use comfort_map_state::map::{MapStyle, TileLayer};
use comfort_map_weather_models::{Hour, WeatherCondition, WeatherData, WeatherIcon};
use serde::Serialize;

/// Dashboard title.
pub const TITLE: &str = "Baguio Comfort Map";

/// Line under the title.
pub const TAGLINE: &str = "Real-time crowd predictions.";

/// Sidebar footer.
pub const FOOTER: &str = "Simulated Data \u{2022} Baguio City";

/// The whole dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Top control strip.
    pub forecast: ForecastControlView,
    /// Sidebar with weather and crowd levels.
    pub sidebar: SidebarView,
    /// Map canvas inputs.
    pub map: MapCanvasView,
}

/// Date, time, weather, and map style controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastControlView {
    /// Selected date as `YYYY-MM-DD`.
    pub date: String,
    /// Selected hour, 0-23.
    pub hour: u8,
    /// Selected hour as a 12-hour clock label (e.g. `3:00 PM`).
    pub time_label: String,
    /// Active weather condition.
    pub weather: WeatherCondition,
    /// Conditions offered by the weather selector.
    pub weather_options: Vec<WeatherCondition>,
    /// Map style toggle buttons.
    pub map_styles: Vec<MapStyleOption>,
}

/// One button of the map style toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStyleOption {
    /// Style selected by this button.
    pub style: MapStyle,
    /// Button label.
    pub label: &'static str,
    /// Whether this style is active.
    pub active: bool,
}

/// Sidebar contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarView {
    /// Whether the sidebar is visible.
    pub open: bool,
    /// Dashboard title.
    pub title: &'static str,
    /// Line under the title.
    pub tagline: &'static str,
    /// Weather summary card.
    pub weather: WeatherCard,
    /// Crowd list heading, e.g. `Sunny • 15:00`.
    pub heading: String,
    /// One row per location, in catalog order.
    pub rows: Vec<CrowdMeterRow>,
    /// Footer text.
    pub footer: &'static str,
}

/// Weather summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherCard {
    /// Icon key.
    pub icon: WeatherIcon,
    /// Temperature label, e.g. `24°C`.
    pub temperature: String,
    /// Condition name.
    pub condition: WeatherCondition,
    /// Humidity label, e.g. `60%`.
    pub humidity: String,
}

/// One crowd meter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrowdMeterRow {
    /// Location identifier; clicking the row selects it.
    pub id: String,
    /// Location name.
    pub name: String,
    /// Location category.
    pub category: LocationCategory,
    /// Crowd level.
    pub level: CrowdLevel,
    /// Crowd label (`Quiet`, `Busy`, `Packed`).
    pub label: &'static str,
    /// Color tone for the badge.
    pub tone: &'static str,
    /// Whether this row is the current selection.
    pub selected: bool,
}

/// Inputs for the map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapCanvasView {
    /// Current center.
    pub center: Coordinate,
    /// Current zoom.
    pub zoom: u8,
    /// Active tile layers, bottom first.
    pub tile_layers: Vec<TileLayer>,
    /// Built-in zoom buttons; always off.
    pub zoom_control: bool,
    /// Selected location name, if any.
    pub selected: Option<String>,
}

/// Builds the whole dashboard.
#[must_use]
pub fn dashboard(state: &AppState<'_>) -> DashboardView {
    DashboardView {
        forecast: forecast_control(state),
        sidebar: sidebar(state),
        map: map_canvas(state),
    }
}

/// Builds the control strip.
#[must_use]
pub fn forecast_control(state: &AppState<'_>) -> ForecastControlView {
    let active = state.map_style();

    ForecastControlView {
        date: date_label(state.date()),
        hour: state.hour().value(),
        time_label: time_label(state.hour()),
        weather: state.weather(),
        weather_options: WeatherCondition::all().to_vec(),
        map_styles: MapStyle::all()
            .iter()
            .map(|&style| MapStyleOption {
                style,
                label: map_style_label(style),
                active: style == active,
            })
            .collect(),
    }
}

/// Builds the sidebar.
#[must_use]
pub fn sidebar(state: &AppState<'_>) -> SidebarView {
    let selected = state.selected_location_id();

    let rows = state
        .catalog()
        .locations()
        .iter()
        .filter_map(|loc| {
            let level = state.crowd_level(&loc.id)?;
            let is_selected = selected == Some(loc.id.as_str());
            Some(crowd_meter_row(loc, level, is_selected))
        })
        .collect();

    SidebarView {
        open: state.sidebar_open(),
        title: TITLE,
        tagline: TAGLINE,
        weather: weather_card(state.weather_data()),
        heading: format!("{} \u{2022} {}", state.weather(), state.hour()),
        rows,
        footer: FOOTER,
    }
}

/// Builds the weather summary card.
#[must_use]
pub fn weather_card(data: &WeatherData) -> WeatherCard {
    WeatherCard {
        icon: data.icon,
        temperature: format!("{}\u{b0}C", data.temperature),
        condition: data.condition,
        humidity: format!("{}%", data.humidity),
    }
}

/// Builds one crowd meter row.
#[must_use]
pub fn crowd_meter_row(location: &Location, level: CrowdLevel, selected: bool) -> CrowdMeterRow {
    CrowdMeterRow {
        id: location.id.clone(),
        name: location.name.clone(),
        category: location.category,
        level,
        label: level.label(),
        tone: level.tone(),
        selected,
    }
}

/// Builds the map widget inputs.
#[must_use]
pub fn map_canvas(state: &AppState<'_>) -> MapCanvasView {
    MapCanvasView {
        center: state.map_center(),
        zoom: state.zoom(),
        tile_layers: state.map_style().tile_layers().to_vec(),
        zoom_control: false,
        selected: state.selected_location().map(|loc| loc.name.clone()),
    }
}

/// Formats a date for the date picker.
#[must_use]
pub fn date_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats an hour on a 12-hour clock, e.g. `3:00 PM`.
#[must_use]
pub fn time_label(hour: Hour) -> String {
    NaiveTime::from_hms_opt(u32::from(hour.value()), 0, 0)
        .map(|t| t.format("%-I:00 %p").to_string())
        .unwrap_or_default()
}

const fn map_style_label(style: MapStyle) -> &'static str {
    match style {
        MapStyle::Standard => "Map",
        MapStyle::Satellite => "Sat",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comfort_map_catalog::registry;
    use comfort_map_state::config::{SessionConfig, Viewport};
    use comfort_map_state::map::{NoopMapWidget, SELECTED_ZOOM};
    use std::sync::Arc;

    fn session(y: i32, m: u32, d: u32, h: u8) -> AppState<'static> {
        AppState::new(
            registry::builtin(),
            SessionConfig {
                date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                hour: Hour::new(h).unwrap(),
                map_style: MapStyle::Satellite,
                viewport: Viewport::default(),
            },
            Arc::new(NoopMapWidget),
        )
    }

    #[test]
    fn time_labels() {
        let label = |h| time_label(Hour::new(h).unwrap());
        assert_eq!(label(0), "12:00 AM");
        assert_eq!(label(9), "9:00 AM");
        assert_eq!(label(12), "12:00 PM");
        assert_eq!(label(15), "3:00 PM");
        assert_eq!(label(23), "11:00 PM");
    }

    #[test]
    fn forecast_control_reflects_state() {
        let mut state = session(2024, 1, 2, 14);
        state.set_map_style(MapStyle::Standard);
        let view = forecast_control(&state);

        assert_eq!(view.date, "2024-01-02");
        assert_eq!(view.hour, 14);
        assert_eq!(view.time_label, "2:00 PM");
        assert_eq!(view.weather, WeatherCondition::Sunny);
        assert_eq!(view.weather_options.len(), 3);
        let active: Vec<&str> = view
            .map_styles
            .iter()
            .filter(|o| o.active)
            .map(|o| o.label)
            .collect();
        assert_eq!(active, ["Map"]);
    }

    #[test]
    fn weather_card_labels() {
        let state = session(2024, 1, 2, 14);
        let card = weather_card(state.weather_data());
        assert_eq!(card.temperature, "24\u{b0}C");
        assert_eq!(card.humidity, "60%");
        assert_eq!(card.icon, WeatherIcon::Sun);
    }

    #[test]
    fn sidebar_lists_every_location_and_marks_selection() {
        let mut state = session(2024, 1, 2, 18);
        state.select_location(Some("session-road")).unwrap();
        let view = sidebar(&state);

        assert_eq!(view.rows.len(), registry::builtin().len());
        assert_eq!(view.heading, "Sunny \u{2022} 18:00");
        let selected: Vec<&str> = view
            .rows
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(selected, ["session-road"]);

        let strip = &view.rows[0];
        assert_eq!(strip.level, CrowdLevel::High);
        assert_eq!(strip.label, "Packed");
        assert_eq!(strip.tone, "rose");
    }

    #[test]
    fn map_canvas_follows_selection_and_style() {
        let mut state = session(2024, 1, 2, 10);
        let view = map_canvas(&state);
        assert_eq!(view.center, registry::builtin().center());
        assert_eq!(view.tile_layers.len(), 2);
        assert!(!view.zoom_control);
        assert_eq!(view.selected, None);

        state.select_location(Some("mines-view-park")).unwrap();
        state.set_map_style(MapStyle::Standard);
        state.on_zoom_changed(15);
        let view = map_canvas(&state);
        assert_eq!(view.selected.as_deref(), Some("Mines View Park"));
        assert_eq!(view.tile_layers.len(), 1);
        assert_eq!(view.zoom, 15);
    }

    #[test]
    fn map_canvas_zoom_matches_fly_target() {
        let mut state = session(2024, 1, 2, 10);
        assert_eq!(map_canvas(&state).zoom, SELECTED_ZOOM);

        state.on_zoom_changed(11);
        state.select_location(Some("session-road")).unwrap();
        let view = map_canvas(&state);
        assert_eq!(view.selected.as_deref(), Some("Session Road"));
        assert_eq!(view.zoom, SELECTED_ZOOM);
        assert!(view.to_string().ends_with("at zoom 14 (Session Road)"));
    }

    #[test]
    fn dashboard_serializes_to_camel_case_json() {
        let state = session(2024, 6, 15, 15);
        let json = serde_json::to_value(dashboard(&state)).unwrap();

        assert_eq!(json["forecast"]["timeLabel"], "3:00 PM");
        assert_eq!(json["forecast"]["weather"], "Rainy");
        assert_eq!(json["sidebar"]["weather"]["icon"], "rain");
        assert_eq!(json["map"]["zoomControl"], false);
        assert_eq!(json["map"]["tileLayers"][0]["maxZoom"], 19);
    }
}
