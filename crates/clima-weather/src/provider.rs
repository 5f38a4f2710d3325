//! HTTP client for the weatherapi.com `forecast.json` endpoint.

use reqwest::Client;
use std::sync::Arc;
use tracing::instrument;

use crate::locale::Locale;
use crate::types::{ForecastResponse, Location, WeatherError, FORECAST_DAYS};

pub const WEATHER_API_BASE: &str = "http://api.weatherapi.com";
const USER_AGENT: &str = concat!("clima/", env!("CARGO_PKG_VERSION"));

/// Issues forecast requests. No timeout and no retry: a hung request stays
/// pending until the server answers.
#[derive(Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
    locale: Locale,
}

impl std::fmt::Debug for WeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("locale", &self.locale)
            .finish()
    }
}

impl WeatherProvider {
    pub fn new(api_key: &str, locale: Locale) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, WEATHER_API_BASE, locale)
    }

    pub fn with_base_url(
        api_key: &str,
        base_url: &str,
        locale: Locale,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            locale,
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Request a five-day forecast for `location`.
    ///
    /// Air quality and alerts are switched off. A non-success status is
    /// reported as `HttpStatus` without reading the body.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecast(&self, location: &Location) -> Result<ForecastResponse, WeatherError> {
        let url = format!("{}/v1/forecast.json", self.base_url);
        let days = FORECAST_DAYS.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location.query().as_str()),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
                ("lang", self.locale.code()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Forecast request failed with status {}", status);
            return Err(WeatherError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;

        tracing::info!(
            "Received {} forecast days for {}",
            parsed.forecast.forecastday.len(),
            parsed.location.name
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn body() -> serde_json::Value {
        serde_json::json!({
            "location": {"name": "Sevilla"},
            "forecast": {"forecastday": [
                {"date": "2024-06-01", "day": {
                    "maxtemp_c": 34.1, "mintemp_c": 20.3,
                    "daily_chance_of_rain": 0,
                    "condition": {"text": "Soleado"}
                }}
            ]}
        })
    }

    #[tokio::test]
    async fn test_fetch_sends_expected_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast.json"))
            .and(query_param("key", "test_key"))
            .and(query_param("q", "37.39,-5.99"))
            .and(query_param("days", "5"))
            .and(query_param("aqi", "no"))
            .and(query_param("alerts", "no"))
            .and(query_param("lang", "es"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider =
            WeatherProvider::with_base_url("test_key", &mock_server.uri(), Locale::Es).unwrap();
        let response = provider
            .fetch_forecast(&Location::new(37.39, -5.99))
            .await
            .unwrap();

        assert_eq!(response.location.name, "Sevilla");
        assert_eq!(response.forecast.forecastday.len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast.json"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": {"code": 2008, "message": "API key has been disabled."}
            })))
            .mount(&mock_server)
            .await;

        let provider =
            WeatherProvider::with_base_url("bad_key", &mock_server.uri(), Locale::Es).unwrap();
        let result = provider.fetch_forecast(&Location::new(0.0, 0.0)).await;

        assert!(matches!(result, Err(WeatherError::HttpStatus(403))));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let provider =
            WeatherProvider::with_base_url("key", &mock_server.uri(), Locale::En).unwrap();
        let result = provider.fetch_forecast(&Location::new(0.0, 0.0)).await;

        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider =
            WeatherProvider::with_base_url("key", "http://localhost:9000/", Locale::Es).unwrap();
        assert_eq!(provider.base_url, "http://localhost:9000");
    }
}
