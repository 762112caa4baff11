//! Map Renderer Seam
//!
//! The proximity core stays independent of any particular mapping
//! technology: hosts inject a renderer behind this small interface instead
//! of the core reaching for a globally attached mapping SDK. Marker styling
//! is derived here from hazard category and severity so every host renders
//! the same legend.

use serde::Serialize;

use crate::geo::GeoPoint;
use crate::hazards::HazardCategory;

/// Severity at or above which a marker is emphasized
pub const EMPHASIS_SEVERITY: u8 = 4;

/// Handle to a marker added to a renderer
pub type MarkerId = u32;

/// Visual style for a hazard marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Legend color name for the marker
    pub color: &'static str,
    /// High-severity emphasis (larger marker, warning badge)
    pub emphasized: bool,
}

impl MarkerStyle {
    /// Style for a hazard of the given category and severity.
    pub fn for_hazard(category: HazardCategory, severity: u8) -> MarkerStyle {
        let color = match category {
            HazardCategory::RoadDamage => "amber",
            HazardCategory::Electrical => "red",
            HazardCategory::Water => "blue",
            HazardCategory::Structural => "purple",
            HazardCategory::Debris => "green",
            HazardCategory::Lighting => "yellow",
            HazardCategory::Signage => "orange",
            HazardCategory::Vegetation => "emerald",
            HazardCategory::Other => "gray",
        };
        MarkerStyle {
            color,
            emphasized: severity >= EMPHASIS_SEVERITY,
        }
    }
}

/// Injected map-rendering collaborator.
///
/// Hosts implement this against their mapping technology of choice; the
/// core and the alerting pipeline never touch a map SDK directly.
pub trait MapRenderer {
    /// Prepare the map view centered on `center` at the given zoom level.
    fn initialize(&mut self, center: GeoPoint, zoom: u8);

    /// Place a marker, returning a handle for later reference.
    fn add_marker(&mut self, point: GeoPoint, style: MarkerStyle) -> MarkerId;

    /// Remove all markers previously added.
    fn clear_markers(&mut self);
}
