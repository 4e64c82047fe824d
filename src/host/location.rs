use std::time::Duration;

use async_trait::async_trait;

use crate::error::LocationError;
use crate::utils::geo::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Device geolocation as provided by the host environment
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Whether the host can provide a location at all
    fn is_supported(&self) -> bool {
        true
    }

    async fn current_location(
        &self,
        options: LocationOptions,
    ) -> Result<Coordinate, LocationError>;
}

/// Ask the service for a position, turning a service that never answers
/// within `options.timeout` into a [`LocationError::Timeout`].
pub async fn acquire_location(
    service: &dyn LocationService,
    options: LocationOptions,
) -> Result<Coordinate, LocationError> {
    match tokio::time::timeout(options.timeout, service.current_location(options)).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_ms = options.timeout.as_millis() as u64, "Location request timed out");
            Err(LocationError::Timeout(options.timeout))
        }
    }
}

/// A device that reports a fixed position after a short delay
pub struct FixedLocation {
    pub coordinate: Coordinate,
    pub delay: Duration,
}

#[async_trait]
impl LocationService for FixedLocation {
    async fn current_location(
        &self,
        options: LocationOptions,
    ) -> Result<Coordinate, LocationError> {
        tracing::debug!(high_accuracy = options.high_accuracy, "Reading device location");
        tokio::time::sleep(self.delay).await;
        Ok(self.coordinate)
    }
}

/// A device where the user refused the permission prompt
pub struct DeniedLocation;

#[async_trait]
impl LocationService for DeniedLocation {
    async fn current_location(
        &self,
        _options: LocationOptions,
    ) -> Result<Coordinate, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

/// A device without any location capability
pub struct UnsupportedLocation;

#[async_trait]
impl LocationService for UnsupportedLocation {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_location(
        &self,
        _options: LocationOptions,
    ) -> Result<Coordinate, LocationError> {
        Err(LocationError::Unsupported)
    }
}
