use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting values outside [-90,90] / [-180,180]
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "latitude {} out of range",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "longitude {} out of range",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// Calculate distance between two coordinates using Haversine formula
/// Returns distance in kilometers
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Check if a point is within the given radius of a center
pub fn is_within_radius(point: Coordinate, center: Coordinate, max_radius_km: f64) -> bool {
    haversine_distance(point, center) <= max_radius_km
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_haversine_sofia_camila() {
        let sofia = coord(-34.9085, -68.8272);
        let camila = coord(-34.9150, -68.8500);

        let distance = haversine_distance(sofia, camila);
        assert!((distance - 2.20).abs() < 0.1, "got {distance}");
    }

    #[test]
    fn test_haversine_jakarta_bandung() {
        let jakarta = coord(-6.2088, 106.8456);
        let bandung = coord(-6.9175, 107.6191);

        let distance = haversine_distance(jakarta, bandung);
        // Should be approximately 120-130 km
        assert!(distance > 100.0 && distance < 150.0);
    }

    #[test]
    fn test_same_point_is_zero() {
        for p in [
            coord(0.0, 0.0),
            coord(-34.9085, -68.8272),
            coord(90.0, 180.0),
            coord(-90.0, -180.0),
        ] {
            assert_eq!(haversine_distance(p, p), 0.0);
        }
    }

    #[test]
    fn test_symmetric_and_non_negative() {
        let points = [
            coord(-34.9085, -68.8272),
            coord(51.5074, -0.1278),
            coord(48.8566, 2.3522),
            coord(0.0, 179.9),
            coord(0.0, -179.9),
            coord(-89.5, 10.0),
        ];

        for a in points {
            for b in points {
                let ab = haversine_distance(a, b);
                let ba = haversine_distance(b, a);
                assert!(ab >= 0.0);
                assert!((ab - ba).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_antimeridian_is_short() {
        let distance = haversine_distance(coord(0.0, 179.9), coord(0.0, -179.9));
        assert!(distance < 25.0, "got {distance}");
    }

    #[test]
    fn test_within_radius() {
        let center = coord(-6.2088, 106.8456); // Jakarta
        let nearby = coord(-6.21, 106.85);

        assert!(is_within_radius(nearby, center, 10.0));

        let far = coord(-6.9175, 107.6191); // Bandung
        assert!(!is_within_radius(far, center, 10.0));
    }

    #[test]
    fn test_coordinate_range_validation() {
        assert!(Coordinate::new(-34.9, -68.8).is_ok());
        assert!(Coordinate::new(90.0, -180.0).is_ok());
        assert!(matches!(
            Coordinate::new(90.1, 0.0),
            Err(AppError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            Coordinate::new(0.0, 180.5),
            Err(AppError::InvalidCoordinate(_))
        ));
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }
}
