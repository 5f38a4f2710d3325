//! Device location: permission prompt plus a one-shot coordinate read.

use std::future::Future;

use crate::types::{Location, LocationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Where the fetcher gets coordinates from.
pub trait LocationSource {
    /// Ask for foreground location access.
    fn request_permission(
        &self,
    ) -> impl Future<Output = Result<PermissionStatus, LocationError>> + Send;

    /// Read the current position once.
    fn current_position(&self) -> impl Future<Output = Result<Location, LocationError>> + Send;
}

/// Location backed by configuration, for hosts without a location service.
///
/// A disabled source answers the permission prompt with `Denied`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfiguredLocation {
    enabled: bool,
    coordinates: Option<(f64, f64)>,
}

impl ConfiguredLocation {
    pub fn new(enabled: bool, coordinates: Option<(f64, f64)>) -> Self {
        Self {
            enabled,
            coordinates,
        }
    }
}

impl LocationSource for ConfiguredLocation {
    async fn request_permission(&self) -> Result<PermissionStatus, LocationError> {
        if self.enabled {
            Ok(PermissionStatus::Granted)
        } else {
            Ok(PermissionStatus::Denied)
        }
    }

    async fn current_position(&self) -> Result<Location, LocationError> {
        if !self.enabled {
            return Err(LocationError::PermissionDenied);
        }
        let (latitude, longitude) = self
            .coordinates
            .ok_or(LocationError::ServiceUnavailable)?;
        tracing::debug!("Using configured location {}, {}", latitude, longitude);
        Ok(Location::new(latitude, longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_location_denies_permission() {
        let source = ConfiguredLocation::new(false, Some((1.0, 2.0)));
        assert_eq!(
            source.request_permission().await.unwrap(),
            PermissionStatus::Denied
        );
        assert!(matches!(
            source.current_position().await,
            Err(LocationError::PermissionDenied)
        ));
    }

    #[tokio::test]
    async fn test_missing_coordinates_unavailable() {
        let source = ConfiguredLocation::new(true, None);
        assert_eq!(
            source.request_permission().await.unwrap(),
            PermissionStatus::Granted
        );
        assert!(matches!(
            source.current_position().await,
            Err(LocationError::ServiceUnavailable)
        ));
    }

    #[tokio::test]
    async fn test_configured_position() {
        let source = ConfiguredLocation::new(true, Some((-34.61, -58.38)));
        let loc = source.current_position().await.unwrap();
        assert_eq!(loc, Location::new(-34.61, -58.38));
    }
}
