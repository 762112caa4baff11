//! Location Provider Seam
//!
//! Acquiring the user's position is a host concern: a browser geolocation
//! API, a GPS receiver, or a configured station position. The core only
//! defines the seam. When no position can be resolved, proximity alerting
//! is simply skipped for that cycle; no default location is ever
//! substituted.

use crate::geo::GeoPoint;

/// Why a position could not be resolved.
///
/// Variants mirror the failure modes of platform geolocation APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// The user denied the location permission
    #[error("location permission denied")]
    PermissionDenied,
    /// The platform could not produce a position
    #[error("position unavailable")]
    Unavailable,
    /// The position request timed out
    #[error("timed out waiting for a position fix")]
    Timeout,
}

/// Source of the user's current position.
///
/// Implemented by the host (server, plugin, test double); the core never
/// performs I/O itself. Callers that receive an `Err` must not invoke the
/// proximity engine for that cycle.
pub trait LocationProvider {
    /// Resolve the current position, or report why none is available.
    fn current_position(&mut self) -> Result<GeoPoint, LocationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticProvider(Result<GeoPoint, LocationError>);

    impl LocationProvider for StaticProvider {
        fn current_position(&mut self) -> Result<GeoPoint, LocationError> {
            self.0
        }
    }

    #[test]
    fn test_provider_resolves_position() {
        let point = GeoPoint::new(40.7128, -74.0060).unwrap();
        let mut provider = StaticProvider(Ok(point));
        assert_eq!(provider.current_position(), Ok(point));
    }

    #[test]
    fn test_provider_reports_unavailable() {
        let mut provider = StaticProvider(Err(LocationError::Unavailable));
        assert_eq!(
            provider.current_position(),
            Err(LocationError::Unavailable)
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", LocationError::PermissionDenied),
            "location permission denied"
        );
        assert_eq!(
            format!("{}", LocationError::Timeout),
            "timed out waiting for a position fix"
        );
    }
}
