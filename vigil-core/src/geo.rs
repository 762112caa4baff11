//! Geographic Coordinates and Great-Circle Distance
//!
//! This module provides the coordinate value type used throughout Vigil and
//! the haversine distance function that all proximity calculations go through.
//! Distance is computed on a sphere of Earth's mean radius, which is accurate
//! to well under 1% at alert-radius scale (hundreds of meters) and does not
//! degrade at high latitudes the way equirectangular approximations do.

use serde::{Deserialize, Serialize};

/// Earth's mean radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Coordinate validation errors
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// Latitude outside [-90, 90] or not finite
    #[error("invalid latitude {0}: must be finite and within [-90, 90]")]
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180] or not finite
    #[error("invalid longitude {0}: must be finite and within [-180, 180]")]
    InvalidLongitude(f64),
}

/// A geographic position in decimal degrees.
///
/// Immutable value type; equality is by coordinate value. Construct with
/// [`GeoPoint::new`] to get range and finiteness validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a validated geographic point.
    ///
    /// # Errors
    /// Returns [`GeoError`] if either coordinate is NaN, infinite, or outside
    /// its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }
        Ok(GeoPoint {
            latitude,
            longitude,
        })
    }

    /// Great-circle distance in meters to another point.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self, other)
    }
}

/// Great-circle surface distance in meters between two points.
///
/// Uses the haversine formula on a sphere of [`EARTH_RADIUS_METERS`]:
/// `a = sin²(Δφ/2) + cos(φ1)·cos(φ2)·sin²(Δλ/2)`,
/// `c = 2·atan2(√a, √(1−a))`, `distance = R·c`.
///
/// Pure and deterministic; safe to call concurrently.
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_identity() {
        let a = point(40.7128, -74.0060);
        assert_eq!(haversine_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let a = point(40.7128, -74.0060);
        let b = point(37.7749, -122.4194);
        let ab = haversine_distance(&a, &b);
        let ba = haversine_distance(&b, &a);
        assert!((ab - ba).abs() / ab < 1e-6);
    }

    #[test]
    fn test_known_value_new_york_san_francisco() {
        // New York to San Francisco is roughly 4,129 km great-circle
        let ny = point(40.7128, -74.0060);
        let sf = point(37.7749, -122.4194);
        let d = haversine_distance(&ny, &sf);
        assert!((d - 4_129_000.0).abs() / 4_129_000.0 < 0.01, "got {}", d);
    }

    #[test]
    fn test_short_distance_scale() {
        // Two points ~80m apart in San Francisco
        let a = point(37.7749, -122.4194);
        let b = point(37.7755, -122.4200);
        let d = haversine_distance(&a, &b);
        assert!(d > 50.0 && d < 120.0, "got {}", d);
    }

    #[test]
    fn test_non_negative_and_finite() {
        let a = point(-90.0, -180.0);
        let b = point(90.0, 180.0);
        let d = haversine_distance(&a, &b);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    #[test]
    fn test_distance_to_matches_free_function() {
        let a = point(40.7128, -74.0060);
        let b = point(40.7135, -74.0046);
        assert_eq!(a.distance_to(&b), haversine_distance(&a, &b));
    }

    #[test]
    fn test_rejects_out_of_range_latitude() {
        assert_eq!(
            GeoPoint::new(90.1, 0.0),
            Err(GeoError::InvalidLatitude(90.1))
        );
        assert_eq!(
            GeoPoint::new(-91.0, 0.0),
            Err(GeoError::InvalidLatitude(-91.0))
        );
    }

    #[test]
    fn test_rejects_out_of_range_longitude() {
        assert_eq!(
            GeoPoint::new(0.0, 180.5),
            Err(GeoError::InvalidLongitude(180.5))
        );
    }

    #[test]
    fn test_rejects_nan() {
        assert!(matches!(
            GeoPoint::new(f64::NAN, 0.0),
            Err(GeoError::InvalidLatitude(_))
        ));
        assert!(matches!(
            GeoPoint::new(0.0, f64::NAN),
            Err(GeoError::InvalidLongitude(_))
        ));
        assert!(matches!(
            GeoPoint::new(0.0, f64::INFINITY),
            Err(GeoError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(point(40.0, -74.0), point(40.0, -74.0));
        assert_ne!(point(40.0, -74.0), point(40.0, -74.1));
    }
}
