pub mod images;
pub mod location;

use std::sync::Arc;

use crate::config::{Config, DeviceLocation};
use location::{DeniedLocation, FixedLocation, LocationService, UnsupportedLocation};

/// Build the location service described by the configuration
pub fn location_service(config: &Config) -> Arc<dyn LocationService> {
    match config.device_location {
        DeviceLocation::Fixed(coordinate) => Arc::new(FixedLocation {
            coordinate,
            delay: config.location_delay,
        }),
        DeviceLocation::Denied => Arc::new(DeniedLocation),
        DeviceLocation::Unsupported => Arc::new(UnsupportedLocation),
    }
}
