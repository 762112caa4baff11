//! Vigil Server
//!
//! Native REST server for the Vigil civic hazard-reporting platform.
//! All proximity math and domain rules live in `vigil-core`; this crate
//! adds the runtime: an in-memory store, the axum API surface, and the
//! server-side implementation of the core's location-provider seam.

pub mod geolocate;
pub mod store;
pub mod web;
