use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Number of forecast days requested and displayed.
pub const FORECAST_DAYS: usize = 5;

/// Geographic location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `lat,lon` query form understood by the forecast service
    pub fn query(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// One day of forecast as delivered by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForecastDay {
    pub date: NaiveDate,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub chance_of_rain: u8,
    pub condition: String,
}

/// One forecast row ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayDay {
    /// `dd/mm/yyyy`
    pub date: String,
    pub day_of_week: String,
    pub max_temp: f64,
    pub min_temp: f64,
    /// Probability of precipitation, percent
    pub pop: u8,
    pub condition: String,
}

impl DisplayDay {
    pub fn band(&self) -> TemperatureBand {
        TemperatureBand::from_max_temp(self.max_temp)
    }
}

/// Successful fetch result: where, and the rows to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub location_name: String,
    pub days: Vec<DisplayDay>,
}

/// Card colouring by daily maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Cold,
    Warm,
    Hot,
}

impl TemperatureBand {
    /// Below 20°C is cold, up to and including 30°C warm, above that hot.
    pub fn from_max_temp(max_temp: f64) -> Self {
        if max_temp < 20.0 {
            Self::Cold
        } else if max_temp <= 30.0 {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Cold => "#87CEEB",
            Self::Warm => "#FFD700",
            Self::Hot => "#FFA500",
        }
    }
}

/// Wire format of `forecast.json`; only the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub location: ApiLocation,
    pub forecast: ApiForecast,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiLocation {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiForecast {
    pub forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiForecastDay {
    pub date: NaiveDate,
    pub day: ApiDay,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiDay {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub daily_chance_of_rain: u8,
    pub condition: ApiCondition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCondition {
    pub text: String,
}

impl From<ApiForecastDay> for RawForecastDay {
    fn from(api: ApiForecastDay) -> Self {
        Self {
            date: api.date,
            max_temp_c: api.day.maxtemp_c,
            min_temp_c: api.day.mintemp_c,
            chance_of_rain: api.day.daily_chance_of_rain,
            condition: api.day.condition.text,
        }
    }
}

impl ForecastResponse {
    pub fn into_parts(self) -> (String, Vec<RawForecastDay>) {
        let days = self
            .forecast
            .forecastday
            .into_iter()
            .map(RawForecastDay::from)
            .collect();
        (self.location.name, days)
    }
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("{0}")]
    Other(String),
}

/// Weather fetch errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("HTTP error: {0}")]
    HttpStatus(u16),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("Network error: {0}")]
    Network(reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Unknown error")]
    Unknown,
}

/// The request URL carries the API key, so it is stripped before the error
/// can reach a log line or the screen.
impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.without_url())
    }
}

impl WeatherError {
    /// Message for the error screen, in the screen's language.
    ///
    /// Errors without a usable message fall back to the locale's
    /// "unknown error" text.
    pub fn screen_message(&self, locale: Locale) -> String {
        match self {
            Self::PermissionDenied | Self::Location(LocationError::PermissionDenied) => {
                locale.permission_denied().to_string()
            }
            Self::HttpStatus(status) => locale.http_error(*status),
            Self::Unknown => locale.unknown_error().to_string(),
            Self::Parse(msg) | Self::Location(LocationError::Other(msg))
                if msg.trim().is_empty() =>
            {
                locale.unknown_error().to_string()
            }
            Self::Location(LocationError::ServiceUnavailable) => {
                locale.location_unavailable().to_string()
            }
            Self::Location(LocationError::Other(msg)) => locale.location_error(msg),
            Self::Network(e) => locale.network_error(&e.to_string()),
            Self::Parse(msg) => locale.parse_error(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(TemperatureBand::from_max_temp(19.9), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::from_max_temp(20.0), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::from_max_temp(30.0), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::from_max_temp(30.1), TemperatureBand::Hot);
    }

    #[test]
    fn test_response_into_parts() {
        let body = serde_json::json!({
            "location": {"name": "Madrid", "country": "Spain"},
            "forecast": {"forecastday": [{
                "date": "2024-06-01",
                "date_epoch": 1717200000,
                "day": {
                    "maxtemp_c": 25.4,
                    "mintemp_c": 18.0,
                    "daily_chance_of_rain": 10,
                    "condition": {"text": "Sunny", "code": 1000}
                }
            }]}
        });
        let response: ForecastResponse = serde_json::from_value(body).unwrap();
        let (name, days) = response.into_parts();

        assert_eq!(name, "Madrid");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(days[0].max_temp_c, 25.4);
        assert_eq!(days[0].chance_of_rain, 10);
        assert_eq!(days[0].condition, "Sunny");
    }

    #[test]
    fn test_location_query() {
        assert_eq!(Location::new(40.4, -3.7).query(), "40.4,-3.7");
    }

    #[test]
    fn test_screen_message() {
        assert_eq!(
            WeatherError::PermissionDenied.screen_message(Locale::Es),
            "Permiso de ubicación denegado"
        );
        assert_eq!(
            WeatherError::HttpStatus(503).screen_message(Locale::Es),
            "Error HTTP: 503"
        );
        assert_eq!(
            WeatherError::HttpStatus(503).screen_message(Locale::En),
            "HTTP error: 503"
        );
        assert_eq!(
            WeatherError::Parse("missing field `forecast`".into()).screen_message(Locale::En),
            "Parse error: missing field `forecast`"
        );
    }

    #[test]
    fn test_screen_message_stays_in_locale() {
        assert_eq!(
            WeatherError::Location(LocationError::ServiceUnavailable).screen_message(Locale::Es),
            "Servicio de ubicación no disponible"
        );
        assert_eq!(
            WeatherError::Location(LocationError::Other("GPS apagado".into()))
                .screen_message(Locale::Es),
            "Error de ubicación: GPS apagado"
        );
        assert_eq!(
            WeatherError::Parse("missing field `forecast`".into()).screen_message(Locale::Es),
            "Respuesta no válida: missing field `forecast`"
        );
        assert_eq!(
            WeatherError::Location(LocationError::ServiceUnavailable).screen_message(Locale::En),
            "Location service unavailable"
        );
    }

    #[test]
    fn test_screen_message_falls_back_to_unknown() {
        assert_eq!(
            WeatherError::Parse(String::new()).screen_message(Locale::Es),
            "Error desconocido"
        );
        assert_eq!(
            WeatherError::Location(LocationError::Other(" ".into())).screen_message(Locale::En),
            "Unknown error"
        );
        assert_eq!(WeatherError::Unknown.screen_message(Locale::En), "Unknown error");
    }
}
