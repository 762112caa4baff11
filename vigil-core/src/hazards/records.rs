//! Hazard, discussion, and status-update record types.

use serde::{Deserialize, Serialize};

use crate::alerts::{GeoTaggedItem, ItemKind};
use crate::geo::GeoPoint;

/// Lowest valid severity
pub const MIN_SEVERITY: u8 = 1;
/// Highest valid severity
pub const MAX_SEVERITY: u8 = 5;

/// Hazard record validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HazardError {
    /// Severity outside 1..=5
    #[error("invalid severity {0}: must be within 1..=5")]
    InvalidSeverity(u8),
}

/// Hazard report category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardCategory {
    RoadDamage,
    Electrical,
    Water,
    Structural,
    Debris,
    Lighting,
    Signage,
    Vegetation,
    Other,
}

/// Resolution status of a report or update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardStatus {
    Pending,
    InProgress,
    Resolved,
}

impl Default for HazardStatus {
    fn default() -> Self {
        HazardStatus::Pending
    }
}

/// Forum discussion category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscussionCategory {
    Traffic,
    Parks,
    Lighting,
    Flooding,
    Community,
}

/// A community-submitted hazard report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardReport {
    /// Unique report id
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: HazardCategory,
    /// Severity 1 (minor) to 5 (critical)
    pub severity: u8,
    pub status: HazardStatus,
    /// Community upvotes
    pub votes: u32,
    /// Comment count
    pub comments: u32,
    /// Street-level description of the location
    pub address: String,
    /// Geographic position
    pub location: GeoPoint,
    pub reported_by: String,
    /// ISO 8601 timestamp
    pub reported_at: String,
}

impl HazardReport {
    /// Validate a report's severity range.
    ///
    /// # Errors
    /// Returns [`HazardError::InvalidSeverity`] when severity is outside 1..=5.
    pub fn validate(&self) -> Result<(), HazardError> {
        if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&self.severity) {
            return Err(HazardError::InvalidSeverity(self.severity));
        }
        Ok(())
    }

    /// Whether this report should trigger proximity alerts.
    ///
    /// A report stays alert-worthy until it is resolved. Severity does not
    /// factor in; it only drives display emphasis.
    pub fn is_alert_worthy(&self) -> bool {
        self.status != HazardStatus::Resolved
    }

    /// Flatten into the alert engine's input record.
    pub fn to_geo_item(&self) -> GeoTaggedItem {
        GeoTaggedItem {
            id: self.id.clone(),
            title: self.title.clone(),
            location: self.location,
            kind: ItemKind::Report,
            is_active: self.is_alert_worthy(),
        }
    }
}

/// A community forum discussion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    /// Unique discussion id
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: DiscussionCategory,
    pub votes: u32,
    pub comments: u32,
    /// ISO 8601 timestamp
    pub created_at: String,
    /// Trending flag set by community voting
    pub is_hot: bool,
    /// Geographic position the discussion concerns
    pub location: GeoPoint,
}

impl Discussion {
    /// Whether this discussion should trigger proximity alerts.
    pub fn is_alert_worthy(&self) -> bool {
        self.is_hot
    }

    /// Flatten into the alert engine's input record.
    pub fn to_geo_item(&self) -> GeoTaggedItem {
        GeoTaggedItem {
            id: self.id.clone(),
            title: self.title.clone(),
            location: self.location,
            kind: ItemKind::Discussion,
            is_active: self.is_alert_worthy(),
        }
    }
}

/// A resolution status update on an earlier report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    /// Unique update id
    pub id: String,
    pub title: String,
    pub content: String,
    pub status: HazardStatus,
    /// ISO 8601 timestamp
    pub updated_at: String,
    /// Id of the report this update refers to
    pub original_report_id: String,
    /// Geographic position of the original hazard
    pub location: GeoPoint,
}

impl StatusUpdate {
    /// Whether this update should trigger proximity alerts.
    pub fn is_alert_worthy(&self) -> bool {
        self.status != HazardStatus::Resolved
    }

    /// Flatten into the alert engine's input record.
    pub fn to_geo_item(&self) -> GeoTaggedItem {
        GeoTaggedItem {
            id: self.id.clone(),
            title: self.title.clone(),
            location: self.location,
            kind: ItemKind::Update,
            is_active: self.is_alert_worthy(),
        }
    }
}
