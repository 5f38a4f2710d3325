//! Builds the clients each screen needs from configuration.
//!
//! Screens share nothing at runtime; these constructors only translate
//! config values into ready-to-use clients.

use std::sync::Arc;

use clima_core::{AppError, Config, ConfigError};
use clima_services::ProductClient;
use clima_weather::{ConfiguredLocation, ForecastFetcher, Formatter, Locale, WeatherProvider};

use crate::error_mapping::IntoAppError;

pub type WeatherFetcher = ForecastFetcher<ConfiguredLocation>;

/// Display language from `weather.lang`.
pub fn locale(config: &Config) -> Result<Locale, AppError> {
    Locale::from_code(&config.weather.lang).ok_or_else(|| {
        AppError::Config(ConfigError::Invalid(format!(
            "unsupported language '{}'",
            config.weather.lang
        )))
    })
}

/// Forecast fetcher wired to the configured endpoint, key and location.
///
/// Fails with `MissingSetting` when no API key is configured.
pub fn weather_fetcher(config: &Config) -> Result<Arc<WeatherFetcher>, AppError> {
    let locale = locale(config)?;
    let api_key = config.weather_api_key()?;
    let provider = WeatherProvider::with_base_url(api_key, &config.weather.base_url, locale)
        .map_err(IntoAppError::into_app_error)?;
    let location = ConfiguredLocation::new(config.location.enabled, config.coordinates());

    tracing::debug!("Weather fetcher ready for {}", config.weather.base_url);
    Ok(Arc::new(ForecastFetcher::new(
        location,
        provider,
        Formatter::new(locale),
    )))
}

pub fn product_client(config: &Config) -> Result<Arc<ProductClient>, AppError> {
    let client = ProductClient::new(&config.store.base_url).map_err(IntoAppError::into_app_error)?;
    Ok(Arc::new(client))
}
