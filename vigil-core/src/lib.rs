//! Vigil Core - Platform-Independent Proximity Alerting
//!
//! This crate contains the computational heart of the Vigil civic
//! hazard-reporting platform: great-circle distance math, the proximity
//! alert engine, and the domain records that feed it. It is designed to be
//! platform-independent (no I/O, no async, no platform-specific code) so
//! it can be used from the native server, WASM plugins, and tests alike.
//!
//! # Architecture
//!
//! - **geo**: coordinate value type and haversine distance
//! - **alerts**: the proximity alert engine
//! - **hazards**: reports, discussions, status updates, and their
//!   alert-worthiness rules
//! - **location**: the location-provider seam implemented by hosts
//! - **map**: the map-renderer seam and marker styling
//!
//! # Usage
//!
//! ```rust,ignore
//! use vigil_core::alerts::ProximityAlertEngine;
//! use vigil_core::geo::GeoPoint;
//! use vigil_core::location::LocationProvider;
//!
//! let engine = ProximityAlertEngine::default();
//!
//! // Skip the cycle entirely when no position resolves
//! if let Ok(user) = provider.current_position() {
//!     let items: Vec<_> = reports.iter().map(|r| r.to_geo_item()).collect();
//!     let alerts = engine.alerts(&user, &items);
//! }
//! ```

pub mod alerts;
pub mod geo;
pub mod hazards;
pub mod location;
pub mod map;

pub use alerts::{
    AlertError, AlertResult, GeoTaggedItem, ItemKind, ProximityAlertEngine,
    DEFAULT_ALERT_RADIUS_METERS,
};
pub use geo::{haversine_distance, GeoError, GeoPoint, EARTH_RADIUS_METERS};
pub use hazards::{
    Discussion, DiscussionCategory, HazardCategory, HazardError, HazardReport, HazardStatus,
    StatusUpdate,
};
pub use location::{LocationError, LocationProvider};
pub use map::{MapRenderer, MarkerId, MarkerStyle};
