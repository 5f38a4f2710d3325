pub mod app;
pub mod config;
pub mod error;
pub mod screen;

pub use app::App;
pub use config::{
    Config, LocationConfig, StoreConfig, TipsConfig, ValidationResult, WeatherConfig,
};
pub use error::{AppError, ConfigError, NetworkError, ReqwestErrorExt, StoreError, WeatherError};
pub use screen::{Screen, ScreenDescriptor};

use anyhow::Result;

/// Initialize logging.
///
/// Logs go to stderr so screen output on stdout stays clean. `RUST_LOG`
/// overrides the default `info` filter.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("Clima core initialized");
    Ok(())
}
