//! Civic Hazard Domain Records
//!
//! This module defines the record types of the hazard-reporting platform:
//! reports, forum discussions, and resolution status updates. Each record
//! knows its own alert-worthiness rule and can flatten itself into a
//! [`GeoTaggedItem`](crate::alerts::GeoTaggedItem) for the proximity engine,
//! which keeps all status interpretation out of the engine itself.
//!
//! # Activity rules
//!
//! | Record | Alert-worthy when |
//! |--------------|----------------------------|
//! | Report | status is not `Resolved` |
//! | Discussion | flagged hot |
//! | StatusUpdate | status is not `Resolved` |

mod records;

pub use records::*;
