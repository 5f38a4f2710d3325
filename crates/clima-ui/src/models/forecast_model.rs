//! Five-day forecast screen: loading, error text, or one card per day.

use clima_core::Screen;
use clima_weather::{DisplayDay, Forecast, ForecastState, Locale};

use crate::services::WeatherServiceMessage;

pub const SCREEN_ID: &str = "clima";

#[derive(Debug, Clone, Default)]
pub struct ForecastModel {
    locale: Locale,
    state: ForecastState,
}

impl ForecastModel {
    /// A freshly mounted screen starts out loading.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            state: ForecastState::Loading,
        }
    }

    pub fn state(&self) -> &ForecastState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Apply a finished fetch. Errors become terminal error text.
    pub fn handle_message(&mut self, msg: WeatherServiceMessage) {
        match msg {
            WeatherServiceMessage::FetchDone(Ok(forecast)) => {
                tracing::info!(
                    "Forecast loaded: {} days for {}",
                    forecast.days.len(),
                    forecast.location_name
                );
                self.state = ForecastState::Loaded(forecast);
            }
            WeatherServiceMessage::FetchDone(Err(e)) => {
                tracing::error!("Failed to fetch forecast: {}", e);
                self.state = ForecastState::Failed(e.screen_message(self.locale));
            }
        }
    }

    fn render_forecast(&self, forecast: &Forecast) -> String {
        let mut out = self.locale.forecast_title(&forecast.location_name);
        for day in &forecast.days {
            out.push_str("\n\n");
            out.push_str(&self.render_card(day));
        }
        out
    }

    fn render_card(&self, day: &DisplayDay) -> String {
        let (max, min, rain) = self.locale.card_labels();
        format!(
            "{} | {} | {}\n  {}: {}°C\n  {}: {}°C\n  {}: {}%\n  {}",
            day.day_of_week,
            day.date,
            day.band().color_hex(),
            max,
            day.max_temp,
            min,
            day.min_temp,
            rain,
            day.pop,
            day.condition
        )
    }
}

impl Screen for ForecastModel {
    fn id(&self) -> &'static str {
        SCREEN_ID
    }

    fn title(&self) -> String {
        match &self.state {
            ForecastState::Loaded(f) => self.locale.forecast_title(&f.location_name),
            _ => self.locale.forecast_title("…"),
        }
    }

    fn render(&self) -> String {
        match &self.state {
            ForecastState::Loading => self.locale.loading().to_string(),
            ForecastState::Failed(message) => message.clone(),
            ForecastState::Loaded(forecast) => self.render_forecast(forecast),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clima_weather::WeatherError;

    fn forecast() -> Forecast {
        Forecast {
            location_name: "Madrid".to_string(),
            days: vec![
                DisplayDay {
                    date: "01/06/2024".to_string(),
                    day_of_week: "Hoy".to_string(),
                    max_temp: 25.0,
                    min_temp: 18.0,
                    pop: 10,
                    condition: "Soleado".to_string(),
                },
                DisplayDay {
                    date: "02/06/2024".to_string(),
                    day_of_week: "Domingo".to_string(),
                    max_temp: 31.5,
                    min_temp: 19.0,
                    pop: 0,
                    condition: "Despejado".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_starts_loading() {
        let model = ForecastModel::new(Locale::Es);
        assert!(model.state().is_loading());
        assert_eq!(model.render(), "Cargando...");
    }

    #[test]
    fn test_renders_cards() {
        let mut model = ForecastModel::new(Locale::Es);
        model.handle_message(WeatherServiceMessage::FetchDone(Ok(forecast())));

        let text = model.render();
        assert!(text.starts_with("Pronóstico del Clima de 5 días - Madrid"));
        assert!(text.contains("Hoy | 01/06/2024 | #FFD700\n  Máx: 25°C\n  Mín: 18°C\n  Lluvia: 10%\n  Soleado"));
        assert!(text.contains("Domingo | 02/06/2024 | #FFA500"));
        assert!(text.contains("Máx: 31.5°C"));
    }

    #[test]
    fn test_error_is_terminal_text() {
        let mut model = ForecastModel::new(Locale::En);
        model.handle_message(WeatherServiceMessage::FetchDone(Err(WeatherError::HttpStatus(401))));

        assert_eq!(model.state(), &ForecastState::Failed("HTTP error: 401".to_string()));
        assert_eq!(model.render(), "HTTP error: 401");
    }
}
