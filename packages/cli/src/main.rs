#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Terminal front end for the comfort map dashboard.
//!
//! Each subcommand builds a session, drives it through the same controls
//! the dashboard exposes (date, hour, weather, map style, selection), and
//! prints the resulting views. Without a subcommand an interactive session
//! is started.

mod interactive;
mod map_widget;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use comfort_map_catalog::registry;
use comfort_map_congestion_models::CrowdLevel;
use comfort_map_state::AppState;
use comfort_map_state::config::{SessionConfig, Viewport, parse_date, parse_hour};
use comfort_map_weather_models::{Hour, WeatherCondition};

use crate::map_widget::LoggingMapWidget;

#[derive(Parser)]
#[command(name = "comfort_map", about = "Baguio crowd and weather dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard for a date and hour
    Forecast {
        /// Date as YYYY-MM-DD (defaults to today or `COMFORT_MAP_DATE`)
        #[arg(long)]
        date: Option<String>,
        /// Hour of day, 0-23 (defaults to now or `COMFORT_MAP_HOUR`)
        #[arg(long)]
        hour: Option<String>,
        /// Override the predicted weather (sunny, rainy, foggy)
        #[arg(long)]
        weather: Option<WeatherCondition>,
        /// Map style (satellite, standard)
        #[arg(long)]
        style: Option<String>,
        /// Location ID to select (e.g., "`session-road`")
        #[arg(long)]
        select: Option<String>,
        /// Viewport width in pixels; below 768 the compact layout applies
        #[arg(long)]
        viewport_width: Option<u32>,
        /// Print the views as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show weather and crowd counts for every hour of a day
    Day {
        /// Date as YYYY-MM-DD (defaults to today or `COMFORT_MAP_DATE`)
        #[arg(long)]
        date: Option<String>,
        /// Hold the weather at this condition instead of the prediction
        #[arg(long)]
        weather: Option<WeatherCondition>,
    },
    /// List all points of interest
    Locations,
    /// List neighborhood centroids
    Neighborhoods,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run();
    };

    match command {
        Commands::Forecast {
            date,
            hour,
            weather,
            style,
            select,
            viewport_width,
            json,
        } => {
            let mut config = SessionConfig::from_env()?;
            if let Some(width) = viewport_width {
                config.viewport = Viewport { width };
            }

            let mut state = AppState::new(registry::builtin(), config, Arc::new(LoggingMapWidget));

            if let Some(date) = date {
                state.set_date(parse_date(&date)?);
            }
            if let Some(hour) = hour {
                state.set_hour(parse_hour(&hour)?);
            }
            if let Some(style) = style {
                state.set_map_style(style.parse()?);
            }
            if let Some(weather) = weather {
                state.set_weather(weather);
            }
            if let Some(id) = select {
                state.select_location(Some(&id))?;
            }

            let view = comfort_map_views::dashboard(&state);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{view}");
            }
        }
        Commands::Day { date, weather } => {
            let mut state = AppState::new(
                registry::builtin(),
                SessionConfig::from_env()?,
                Arc::new(LoggingMapWidget),
            );
            if let Some(date) = date {
                state.set_date(parse_date(&date)?);
            }

            println!(
                "{:<10} {:<8} {:>5} {:>9}  {:>5} {:>5} {:>6}",
                "TIME", "WEATHER", "TEMP", "HUMIDITY", "QUIET", "BUSY", "PACKED"
            );
            println!("{}", "-".repeat(60));

            for hour in Hour::all() {
                state.set_hour(hour);
                if let Some(weather) = weather {
                    state.set_weather(weather);
                }
                let data = state.weather_data();
                let congestion = state.congestion();
                println!(
                    "{:<10} {:<8} {:>4}C {:>8}%  {:>5} {:>5} {:>6}",
                    comfort_map_views::time_label(hour),
                    data.condition.to_string(),
                    data.temperature,
                    data.humidity,
                    congestion.count(CrowdLevel::Low),
                    congestion.count(CrowdLevel::Medium),
                    congestion.count(CrowdLevel::High),
                );
            }
        }
        Commands::Locations => {
            let catalog = registry::builtin();
            println!("{:<20} {:<8} {:<20} NAME", "ID", "KIND", "COORDINATE");
            println!("{}", "-".repeat(80));
            for loc in catalog.locations() {
                println!(
                    "{:<20} {:<8} {:<20} {}",
                    loc.id(),
                    loc.category.to_string(),
                    loc.coordinate().to_string(),
                    loc.name()
                );
            }
        }
        Commands::Neighborhoods => {
            let catalog = registry::builtin();
            println!("{:<20} NAME", "COORDINATE");
            println!("{}", "-".repeat(50));
            for n in catalog.neighborhoods() {
                println!("{:<20} {}", n.coordinate().to_string(), n.name);
            }
        }
    }

    Ok(())
}
