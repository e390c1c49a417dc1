//! Interactive dashboard session.
//!
//! Prints the dashboard, asks which control to change, applies it, and
//! repeats until the user quits.

use std::sync::Arc;

use comfort_map_catalog::registry;
use comfort_map_catalog_models::Location;
use comfort_map_state::AppState;
use comfort_map_state::config::{ConfigError, SessionConfig, parse_date, parse_hour};
use comfort_map_state::map::MapStyle;
use comfort_map_weather_models::WeatherCondition;
use dialoguer::{Input, Select};

use crate::map_widget::LoggingMapWidget;

/// One entry of the action menu.
enum Action {
    ChangeDate,
    ChangeHour,
    OverrideWeather,
    SwitchMapStyle,
    SelectLocation,
    ClearSelection,
    ToggleSidebar,
    ZoomMap,
    ShowJson,
    Quit,
}

impl Action {
    const ALL: &[Self] = &[
        Self::ChangeDate,
        Self::ChangeHour,
        Self::OverrideWeather,
        Self::SwitchMapStyle,
        Self::SelectLocation,
        Self::ClearSelection,
        Self::ToggleSidebar,
        Self::ZoomMap,
        Self::ShowJson,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::ChangeDate => "Change date",
            Self::ChangeHour => "Change hour",
            Self::OverrideWeather => "Override weather",
            Self::SwitchMapStyle => "Switch map style",
            Self::SelectLocation => "Select location",
            Self::ClearSelection => "Clear selection",
            Self::ToggleSidebar => "Toggle sidebar",
            Self::ZoomMap => "Zoom map",
            Self::ShowJson => "Show as JSON",
            Self::Quit => "Quit",
        }
    }
}

/// Adapts a config parser into a prompt validator.
fn validator<T>(
    parse: impl Fn(&str) -> Result<T, ConfigError>,
) -> impl Fn(&String) -> Result<(), String> {
    move |v: &String| parse(v).map(|_| ()).map_err(|e| e.to_string())
}

/// Runs the interactive session.
///
/// # Errors
///
/// Returns an error if the session configuration is invalid or a prompt
/// fails (e.g., the terminal is not interactive).
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = registry::builtin();
    let config = SessionConfig::from_env()?;
    let mut state = AppState::new(catalog, config, Arc::new(LoggingMapWidget));

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    loop {
        println!();
        println!("{}", comfort_map_views::dashboard(&state));
        println!();

        let idx = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[idx] {
            Action::ChangeDate => {
                let value: String = Input::new()
                    .with_prompt("Date (YYYY-MM-DD)")
                    .default(comfort_map_views::date_label(state.date()))
                    .validate_with(validator(parse_date))
                    .interact_text()?;
                state.set_date(parse_date(&value)?);
            }
            Action::ChangeHour => {
                let value: String = Input::new()
                    .with_prompt("Hour (0-23)")
                    .default(state.hour().value().to_string())
                    .validate_with(validator(parse_hour))
                    .interact_text()?;
                state.set_hour(parse_hour(&value)?);
            }
            Action::OverrideWeather => {
                let options = WeatherCondition::all();
                let current = options
                    .iter()
                    .position(|&w| w == state.weather())
                    .unwrap_or(0);
                let names: Vec<String> = options.iter().map(ToString::to_string).collect();
                let idx = Select::new()
                    .with_prompt("Weather")
                    .items(&names)
                    .default(current)
                    .interact()?;
                state.set_weather(options[idx]);
            }
            Action::SwitchMapStyle => {
                let next = match state.map_style() {
                    MapStyle::Satellite => MapStyle::Standard,
                    MapStyle::Standard => MapStyle::Satellite,
                };
                state.set_map_style(next);
                println!("Map style: {next}");
            }
            Action::SelectLocation => {
                let names: Vec<&str> = catalog.locations().iter().map(Location::name).collect();
                let idx = Select::new()
                    .with_prompt("Location")
                    .items(&names)
                    .default(0)
                    .interact()?;
                let id = catalog.locations()[idx].id();
                if let Some(location) = state.select_location(Some(id))? {
                    println!("{}: {}", location.name, location.description);
                }
            }
            Action::ClearSelection => {
                state.select_location(None)?;
            }
            Action::ToggleSidebar => {
                let open = !state.sidebar_open();
                state.toggle_sidebar(open);
            }
            Action::ZoomMap => {
                let value: u8 = Input::new()
                    .with_prompt("Zoom level (1-20)")
                    .default(state.zoom())
                    .validate_with(|z: &u8| {
                        if (1..=20).contains(z) {
                            Ok(())
                        } else {
                            Err("zoom must be 1-20")
                        }
                    })
                    .interact_text()?;
                // Stands in for the widget's zoom-end notification.
                state.on_zoom_changed(value);
            }
            Action::ShowJson => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&comfort_map_views::dashboard(&state))?
                );
            }
            Action::Quit => break,
        }
    }

    Ok(())
}
