//! Weather backend: one async fetch per screen mount.
//! The request runs on the runtime; the result comes back over a channel.

use std::sync::Arc;

use chrono::NaiveDate;
use clima_weather::{Forecast, ForecastFetcher, LocationSource, WeatherError};
use tokio::sync::mpsc::UnboundedSender;

/// Messages sent from async operations back to the screen
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of fetching the forecast
    FetchDone(Result<Forecast, WeatherError>),
}

/// Request the forecast asynchronously.
/// Sends `FetchDone` on the channel when complete.
pub fn request_fetch<L>(
    tx: &UnboundedSender<WeatherServiceMessage>,
    fetcher: Arc<ForecastFetcher<L>>,
    today: NaiveDate,
) where
    L: LocationSource + Send + Sync + 'static,
{
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = fetcher.fetch(today).await;
        if tx.send(WeatherServiceMessage::FetchDone(result)).is_err() {
            tracing::debug!("Forecast screen gone before fetch finished");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use clima_weather::{ConfiguredLocation, Formatter, Locale, WeatherProvider};

    #[tokio::test]
    async fn test_denied_permission_reported_over_channel() {
        let provider = WeatherProvider::with_base_url("key", "http://127.0.0.1:9", Locale::Es).unwrap();
        let fetcher = Arc::new(ForecastFetcher::new(
            ConfiguredLocation::new(false, None),
            provider,
            Formatter::new(Locale::Es),
        ));
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        request_fetch(&tx, fetcher, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        match rx.recv().await {
            Some(WeatherServiceMessage::FetchDone(Err(WeatherError::PermissionDenied))) => {}
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
