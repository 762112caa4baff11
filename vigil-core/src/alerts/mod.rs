//! Proximity Alerting
//!
//! This module provides proximity alert detection for geotagged items.
//! An alert fires when an active item lies strictly within the configured
//! radius of the user's position.
//!
//! # Features
//!
//! - Great-circle (haversine) distance, meters
//! - Activity flag evaluated by the caller, never interpreted here
//! - Deterministic ordering: ascending distance, ties keep input order
//!
//! # Example
//!
//! ```rust,ignore
//! use vigil_core::alerts::{ProximityAlertEngine, GeoTaggedItem, ItemKind};
//! use vigil_core::geo::GeoPoint;
//!
//! let engine = ProximityAlertEngine::default(); // 500 m radius
//!
//! let user = GeoPoint::new(40.7128, -74.0060)?;
//! let alerts = engine.alerts(&user, &items);
//!
//! for alert in &alerts {
//!     println!("{} is {:.0} m away", alert.item.title, alert.distance_meters);
//! }
//! ```

mod engine;

pub use engine::*;
