//! Proximity alert engine and its input/output types.

use serde::{Deserialize, Serialize};

use crate::geo::{haversine_distance, GeoPoint};

/// Default alert radius in meters
pub const DEFAULT_ALERT_RADIUS_METERS: f64 = 500.0;

/// What kind of record a geotagged item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Community forum discussion
    Discussion,
    /// Resolution status update on an earlier report
    Update,
    /// Hazard report
    Report,
}

/// A record that can trigger a proximity alert.
///
/// `is_active` is derived by the caller from its own domain rules (a
/// discussion flagged hot, an update whose status is not resolved, ...);
/// the engine only reads the flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoTaggedItem {
    /// Unique record id
    pub id: String,
    /// Human-readable title
    pub title: String,
    /// Where the item is located
    pub location: GeoPoint,
    /// Source record kind
    pub kind: ItemKind,
    /// Whether the item is currently relevant for alerting
    pub is_active: bool,
}

/// A single proximity alert.
///
/// Produced fresh on every query and never persisted; recompute whenever
/// the user position or the candidate set changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertResult {
    /// The matching item
    pub item: GeoTaggedItem,
    /// Great-circle distance from the user to the item, meters
    pub distance_meters: f64,
}

/// Alert engine configuration errors
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum AlertError {
    /// Threshold is negative or not finite
    #[error("invalid alert threshold {0}: must be finite and non-negative")]
    InvalidThreshold(f64),
}

/// Stateless proximity alert engine.
///
/// Holds only the alert radius; every query is a pure function of its
/// inputs, so concurrent invocations need no synchronization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityAlertEngine {
    threshold_meters: f64,
}

impl Default for ProximityAlertEngine {
    fn default() -> Self {
        ProximityAlertEngine {
            threshold_meters: DEFAULT_ALERT_RADIUS_METERS,
        }
    }
}

impl ProximityAlertEngine {
    /// Create an engine with the given alert radius in meters.
    ///
    /// A threshold of exactly 0.0 is accepted and always yields an empty
    /// result set, since no item is strictly closer than zero meters.
    ///
    /// # Errors
    /// Returns [`AlertError::InvalidThreshold`] for negative or non-finite
    /// thresholds.
    pub fn new(threshold_meters: f64) -> Result<Self, AlertError> {
        if !threshold_meters.is_finite() || threshold_meters < 0.0 {
            return Err(AlertError::InvalidThreshold(threshold_meters));
        }
        Ok(ProximityAlertEngine { threshold_meters })
    }

    /// The configured alert radius in meters.
    pub fn threshold_meters(&self) -> f64 {
        self.threshold_meters
    }

    /// Compute all proximity alerts for a user position.
    ///
    /// Inactive items are skipped; the rest match when their distance is
    /// strictly less than the threshold (an item exactly on the boundary
    /// does not alert). The complete matching set is returned, sorted
    /// ascending by distance with equal distances keeping their input
    /// order; truncation for display is the caller's concern.
    pub fn alerts(&self, user: &GeoPoint, items: &[GeoTaggedItem]) -> Vec<AlertResult> {
        let mut results: Vec<AlertResult> = items
            .iter()
            .filter(|item| item.is_active)
            .filter_map(|item| {
                let distance_meters = haversine_distance(user, &item.location);
                if distance_meters < self.threshold_meters {
                    Some(AlertResult {
                        item: item.clone(),
                        distance_meters,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable sort keeps equal distances in input order.
        results.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));

        results
    }
}
