//! One-shot forecast fetch: permission, position, request, format.

use chrono::NaiveDate;

use crate::format::Formatter;
use crate::location::{LocationSource, PermissionStatus};
use crate::provider::WeatherProvider;
use crate::types::{Forecast, WeatherError};

/// Render state of the forecast screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ForecastState {
    #[default]
    Loading,
    Loaded(Forecast),
    Failed(String),
}

impl ForecastState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Runs the fetch sequence once. Steps never overlap and nothing is retried.
pub struct ForecastFetcher<L> {
    location: L,
    provider: WeatherProvider,
    formatter: Formatter,
}

impl<L: LocationSource> ForecastFetcher<L> {
    pub fn new(location: L, provider: WeatherProvider, formatter: Formatter) -> Self {
        Self {
            location,
            provider,
            formatter,
        }
    }

    /// Permission, then position, then the request, then formatting.
    ///
    /// A denied permission stops before any network traffic.
    pub async fn fetch(&self, today: NaiveDate) -> Result<Forecast, WeatherError> {
        match self.location.request_permission().await? {
            PermissionStatus::Granted => {}
            PermissionStatus::Denied => {
                tracing::warn!("Location permission denied");
                return Err(WeatherError::PermissionDenied);
            }
        }

        let position = self.location.current_position().await?;
        tracing::info!("Got location: {}, {}", position.latitude, position.longitude);

        let response = self.provider.fetch_forecast(&position).await?;
        let (location_name, raw_days) = response.into_parts();
        let days = self.formatter.format_all(&raw_days, today);

        Ok(Forecast {
            location_name,
            days,
        })
    }

    /// Like [`fetch`](Self::fetch) but folded into the terminal screen state.
    pub async fn load(&self, today: NaiveDate) -> ForecastState {
        match self.fetch(today).await {
            Ok(forecast) => ForecastState::Loaded(forecast),
            Err(e) => {
                tracing::error!("Forecast fetch failed: {}", e);
                ForecastState::Failed(e.screen_message(self.formatter.locale()))
            }
        }
    }
}
