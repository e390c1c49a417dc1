//! Plain-text rendering of the dashboard views for terminals.

use std::fmt::{self, Display, Formatter};

use crate::{
    CrowdMeterRow, DashboardView, ForecastControlView, MapCanvasView, SidebarView, WeatherCard,
};

impl Display for ForecastControlView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date {}  |  Time {}  |  Weather {}  |  Map View",
            self.date, self.time_label, self.weather
        )?;
        for option in &self.map_styles {
            if option.active {
                write!(f, " [{}]", option.label)?;
            } else {
                write!(f, " {}", option.label)?;
            }
        }
        Ok(())
    }
}

impl Display for WeatherCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>5}  {:<6}  Humidity {}",
            self.temperature, self.condition, self.humidity
        )
    }
}

impl Display for CrowdMeterRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let marker = if self.selected { '>' } else { ' ' };
        write!(
            f,
            "{marker} {:<30} {:<8} {}",
            self.name,
            self.category,
            self.label.to_uppercase()
        )
    }
}

impl Display for SidebarView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.tagline)?;
        writeln!(f)?;
        writeln!(f, "{}", self.weather)?;
        writeln!(f)?;
        writeln!(f, "CROWD LEVELS  {}", self.heading)?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.footer.to_uppercase())
    }
}

impl Display for MapCanvasView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Map centered on {} at zoom {}", self.center, self.zoom)?;
        if let Some(name) = &self.selected {
            write!(f, " ({name})")?;
        }
        Ok(())
    }
}

impl Display for DashboardView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.forecast)?;
        writeln!(f, "{}", "-".repeat(72))?;
        if self.sidebar.open {
            writeln!(f, "{}", self.sidebar)?;
            writeln!(f, "{}", "-".repeat(72))?;
        }
        write!(f, "{}", self.map)
    }
}

#[cfg(test)]
mod tests {
    use crate::{CrowdMeterRow, WeatherCard};
    use comfort_map_catalog_models::LocationCategory;
    use comfort_map_congestion_models::CrowdLevel;
    use comfort_map_weather_models::{WeatherCondition, WeatherIcon};

    #[test]
    fn row_marks_selection() {
        let row = CrowdMeterRow {
            id: "burnham-park".to_string(),
            name: "Burnham Park".to_string(),
            category: LocationCategory::Outdoor,
            level: CrowdLevel::Medium,
            label: CrowdLevel::Medium.label(),
            tone: CrowdLevel::Medium.tone(),
            selected: true,
        };
        let text = row.to_string();
        assert!(text.starts_with("> Burnham Park"));
        assert!(text.ends_with("BUSY"));
    }

    #[test]
    fn weather_card_line() {
        let card = WeatherCard {
            icon: WeatherIcon::Fog,
            temperature: "14\u{b0}C".to_string(),
            condition: WeatherCondition::Foggy,
            humidity: "100%".to_string(),
        };
        let text = card.to_string();
        assert!(text.contains("Foggy"));
        assert!(text.ends_with("Humidity 100%"));
    }
}
