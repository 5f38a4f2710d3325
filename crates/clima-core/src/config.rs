use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Environment variable that overrides `weather.api_key`.
pub const API_KEY_ENV: &str = "CLIMA_WEATHER_API_KEY";

/// Languages the screens can render in.
pub const SUPPORTED_LANGS: &[&str] = &["es", "en"];

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Forecast endpoint settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Device location settings
    #[serde(default)]
    pub location: LocationConfig,

    /// Tip calculator settings
    #[serde(default)]
    pub tips: TipsConfig,

    /// Product viewer settings
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// weatherapi.com key. Never committed; set here or via `CLIMA_WEATHER_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the forecast service
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Response and display language ("es" or "en")
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_weather_base_url() -> String {
    "http://api.weatherapi.com".to_string()
}

fn default_lang() -> String {
    "es".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            lang: default_lang(),
        }
    }
}

/// Stand-in for the device location service.
///
/// `enabled = false` behaves like a user who refused the permission prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

fn default_true() -> bool {
    true
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            latitude: None,
            longitude: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipsConfig {
    /// Percentages offered as one-tap buttons
    #[serde(default = "default_preset_rates")]
    pub preset_rates: Vec<f64>,
}

fn default_preset_rates() -> Vec<f64> {
    vec![10.0, 15.0, 20.0]
}

impl Default for TipsConfig {
    fn default() -> Self {
        Self {
            preset_rates: default_preset_rates(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the product catalogue
    #[serde(default = "default_store_base_url")]
    pub base_url: String,

    /// Product shown by the store screen
    #[serde(default = "default_product_id")]
    pub product_id: u32,
}

fn default_store_base_url() -> String {
    "https://fakestoreapi.com".to_string()
}

fn default_product_id() -> u32 {
    1
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_store_base_url(),
            product_id: default_product_id(),
        }
    }
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clima")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            weather: WeatherConfig::default(),
            location: LocationConfig::default(),
            tips: TipsConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, writing defaults there if the file is missing.
    ///
    /// The API key environment override is applied after reading.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str::<Config>(&contents).context("Failed to parse config file")?
        } else {
            tracing::info!("No config at {}, writing defaults", path.display());
            let config = Self::default();
            config.save_to(path)?;
            config
        };

        config.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(p) => Self::load_from(p)?,
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Replace the configured API key with `value` when it is set and non-empty.
    pub fn apply_api_key_override(&mut self, value: Option<String>) {
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            tracing::debug!("Using weather API key from {}", API_KEY_ENV);
            self.weather.api_key = Some(key);
        }
    }

    /// The weather API key, or `MissingSetting` when none is configured.
    pub fn weather_api_key(&self) -> Result<&str, ConfigError> {
        self.weather
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingSetting("weather.api_key".to_string()))
    }

    /// Configured coordinates, when both halves are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.location.latitude.zip(self.location.longitude)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.base_url, "weather.base_url", &mut result);
        self.validate_url(&self.store.base_url, "store.base_url", &mut result);

        if !SUPPORTED_LANGS.contains(&self.weather.lang.as_str()) {
            result.add_error(
                "weather.lang",
                format!(
                    "Unsupported language '{}', expected one of: {}",
                    self.weather.lang,
                    SUPPORTED_LANGS.join(", ")
                ),
            );
        }

        // Only the weather screen needs the key
        if self.weather_api_key().is_err() {
            result.add_warning(
                "weather.api_key",
                format!("No API key configured; set it in the config file or {}", API_KEY_ENV),
            );
        }

        if let Some(lat) = self.location.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                result.add_error("location.latitude", "Latitude must be within -90..=90");
            }
        }
        if let Some(lon) = self.location.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                result.add_error("location.longitude", "Longitude must be within -180..=180");
            }
        }
        if self.location.enabled && self.coordinates().is_none() {
            result.add_warning(
                "location",
                "Location enabled but latitude/longitude not both set",
            );
        }

        if self.tips.preset_rates.is_empty() {
            result.add_warning("tips.preset_rates", "No preset tip rates configured");
        }
        if self
            .tips
            .preset_rates
            .iter()
            .any(|r| !r.is_finite() || *r <= 0.0)
        {
            result.add_error("tips.preset_rates", "Tip rates must be positive numbers");
        }

        if self.store.product_id == 0 {
            result.add_error("store.product_id", "Product id must be greater than 0");
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.port() == Some(0) {
                    result.add_error(field_name, "Port cannot be 0");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("clima");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        // Default config should be valid (only warnings, no errors)
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
    }

    #[test]
    fn test_missing_api_key_is_warning() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "weather.api_key"));
        assert!(matches!(
            config.weather_api_key(),
            Err(ConfigError::MissingSetting(_))
        ));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = Config::default();
        config.store.base_url = "ftp://localhost:8080".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_invalid_url() {
        let mut config = Config::default();
        config.weather.base_url = "not-a-url".to_string();
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "weather.base_url"));
    }

    #[test]
    fn test_unsupported_lang() {
        let mut config = Config::default();
        config.weather.lang = "fr".to_string();
        assert!(!config.validate().is_valid());
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let mut config = Config::default();
        config.location.latitude = Some(91.0);
        config.location.longitude = Some(0.0);
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "location.latitude"));
    }

    #[test]
    fn test_non_positive_preset_rate() {
        let mut config = Config::default();
        config.tips.preset_rates = vec![10.0, 0.0];
        assert!(!config.validate().is_valid());
    }

    #[test]
    fn test_api_key_override() {
        let mut config = Config::default();
        config.weather.api_key = Some("from-file".to_string());

        config.apply_api_key_override(Some("  ".to_string()));
        assert_eq!(config.weather_api_key().unwrap(), "from-file");

        config.apply_api_key_override(Some("from-env".to_string()));
        assert_eq!(config.weather_api_key().unwrap(), "from-env");
    }

    #[test]
    fn test_coordinates_need_both_halves() {
        let mut config = Config::default();
        config.location.latitude = Some(-34.6);
        assert_eq!(config.coordinates(), None);
        config.location.longitude = Some(-58.4);
        assert_eq!(config.coordinates(), Some((-34.6, -58.4)));
    }

    #[test]
    fn test_load_from_writes_defaults_then_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let first = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(first.store.product_id, 1);

        std::fs::write(
            &path,
            "[store]\nproduct_id = 7\n\n[location]\nlatitude = 40.4\nlongitude = -3.7\n",
        )
        .unwrap();
        let second = Config::load_from(&path).unwrap();
        assert_eq!(second.store.product_id, 7);
        assert_eq!(second.store.base_url, "https://fakestoreapi.com");
        assert_eq!(second.coordinates(), Some((40.4, -3.7)));
        assert_eq!(second.tips.preset_rates, vec![10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_load_from_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store\nproduct_id = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }
}
