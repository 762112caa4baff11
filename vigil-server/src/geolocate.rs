//! Server-side implementation of the core's location-provider seam.
//!
//! The native server has no geolocation hardware; its position, if any, is
//! a station coordinate supplied on the command line. Clients normally pass
//! their own coordinates per request, so this provider is only consulted as
//! a fallback.

use vigil_core::geo::GeoPoint;
use vigil_core::location::{LocationError, LocationProvider};

/// Location provider backed by an optionally configured station position.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocationProvider {
    position: Option<GeoPoint>,
}

impl FixedLocationProvider {
    /// Create a provider; `None` means no position is ever available.
    pub fn new(position: Option<GeoPoint>) -> Self {
        FixedLocationProvider { position }
    }
}

impl LocationProvider for FixedLocationProvider {
    fn current_position(&mut self) -> Result<GeoPoint, LocationError> {
        self.position.ok_or(LocationError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_position_resolves() {
        let point = GeoPoint::new(40.7128, -74.0060).unwrap();
        let mut provider = FixedLocationProvider::new(Some(point));
        assert_eq!(provider.current_position(), Ok(point));
    }

    #[test]
    fn test_unconfigured_position_is_unavailable() {
        let mut provider = FixedLocationProvider::new(None);
        assert_eq!(
            provider.current_position(),
            Err(LocationError::Unavailable)
        );
    }
}
