//! Weather forecast for Clima
//!
//! Fetches a five-day forecast for the device location from a
//! weatherapi.com-compatible service and reshapes it into display rows.

pub mod fetch;
pub mod format;
pub mod locale;
pub mod location;
pub mod provider;
pub mod translate;
pub mod types;

pub use fetch::{ForecastFetcher, ForecastState};
pub use format::Formatter;
pub use locale::Locale;
pub use location::{ConfiguredLocation, LocationSource, PermissionStatus};
pub use provider::WeatherProvider;
pub use translate::TranslationTable;
pub use types::*;
