//! In-Memory Hazard Store
//!
//! Holds the hazard reports, forum discussions, and status updates served
//! by the REST API. The store is seeded with demonstration records and
//! guarded by an async RwLock so handlers can query it concurrently.

use log::{debug, info};
use serde::Deserialize;
use tokio::sync::RwLock;

use vigil_core::geo::GeoPoint;
use vigil_core::hazards::{
    Discussion, DiscussionCategory, HazardCategory, HazardError, HazardReport, HazardStatus,
    StatusUpdate,
};
use vigil_core::GeoTaggedItem;

/// Query filter for listing hazard reports.
///
/// All fields are optional; an empty filter matches every report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportFilter {
    /// Restrict to one category
    pub category: Option<HazardCategory>,
    /// Restrict to one status
    pub status: Option<HazardStatus>,
    /// Inclusive lower severity bound
    pub min_severity: Option<u8>,
    /// Inclusive upper severity bound
    pub max_severity: Option<u8>,
    /// Case-insensitive substring match over title and address
    #[serde(rename = "q")]
    pub query: Option<String>,
}

impl ReportFilter {
    /// Whether a report passes this filter.
    pub fn matches(&self, report: &HazardReport) -> bool {
        if let Some(category) = self.category {
            if report.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if report.status != status {
                return false;
            }
        }
        if let Some(min) = self.min_severity {
            if report.severity < min {
                return false;
            }
        }
        if let Some(max) = self.max_severity {
            if report.severity > max {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let haystack = format!(
                "{} {}",
                report.title.to_lowercase(),
                report.address.to_lowercase()
            );
            if !haystack.contains(&needle) {
                return false;
            }
        }
        true
    }
}

/// A report submission before the store assigns id, status, and timestamp.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub category: HazardCategory,
    pub severity: u8,
    pub address: String,
    pub location: GeoPoint,
    pub reported_by: String,
}

struct StoreInner {
    reports: Vec<HazardReport>,
    discussions: Vec<Discussion>,
    updates: Vec<StatusUpdate>,
    next_report_id: u32,
}

/// In-memory store of hazard records.
pub struct HazardStore {
    inner: RwLock<StoreInner>,
}

impl HazardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        HazardStore {
            inner: RwLock::new(StoreInner {
                reports: Vec::new(),
                discussions: Vec::new(),
                updates: Vec::new(),
                next_report_id: 1,
            }),
        }
    }

    /// Create a store seeded with demonstration records.
    pub fn with_demo_data() -> Self {
        let reports = demo_reports();
        let discussions = demo_discussions();
        let updates = demo_updates();
        info!(
            "seeded demo data: {} reports, {} discussions, {} updates",
            reports.len(),
            discussions.len(),
            updates.len()
        );
        let next_report_id = reports.len() as u32 + 1;
        HazardStore {
            inner: RwLock::new(StoreInner {
                reports,
                discussions,
                updates,
                next_report_id,
            }),
        }
    }

    /// List reports matching the filter, in store order.
    pub async fn reports(&self, filter: &ReportFilter) -> Vec<HazardReport> {
        let inner = self.inner.read().await;
        inner
            .reports
            .iter()
            .filter(|report| filter.matches(report))
            .cloned()
            .collect()
    }

    /// Look up a single report by id.
    pub async fn report(&self, id: &str) -> Option<HazardReport> {
        let inner = self.inner.read().await;
        inner.reports.iter().find(|report| report.id == id).cloned()
    }

    /// Store a new report, assigning id, pending status, and timestamp.
    ///
    /// # Errors
    /// Returns [`HazardError::InvalidSeverity`] when the submission's
    /// severity is outside 1..=5.
    pub async fn add_report(&self, new: NewReport) -> Result<HazardReport, HazardError> {
        let mut inner = self.inner.write().await;
        let report = HazardReport {
            id: inner.next_report_id.to_string(),
            title: new.title,
            description: new.description,
            category: new.category,
            severity: new.severity,
            status: HazardStatus::Pending,
            votes: 0,
            comments: 0,
            address: new.address,
            location: new.location,
            reported_by: new.reported_by,
            reported_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        };
        report.validate()?;

        inner.next_report_id += 1;
        inner.reports.push(report.clone());
        debug!("stored report {} ({})", report.id, report.title);
        Ok(report)
    }

    /// All forum discussions.
    pub async fn discussions(&self) -> Vec<Discussion> {
        self.inner.read().await.discussions.clone()
    }

    /// All resolution status updates.
    pub async fn updates(&self) -> Vec<StatusUpdate> {
        self.inner.read().await.updates.clone()
    }

    /// Record counts as (reports, discussions, updates).
    pub async fn counts(&self) -> (usize, usize, usize) {
        let inner = self.inner.read().await;
        (
            inner.reports.len(),
            inner.discussions.len(),
            inner.updates.len(),
        )
    }

    /// Flatten every record into the alert engine's input, in store order:
    /// reports, then discussions, then updates. Activity rules are applied
    /// by each record itself.
    pub async fn geo_items(&self) -> Vec<GeoTaggedItem> {
        let inner = self.inner.read().await;
        let mut items = Vec::with_capacity(
            inner.reports.len() + inner.discussions.len() + inner.updates.len(),
        );
        items.extend(inner.reports.iter().map(HazardReport::to_geo_item));
        items.extend(inner.discussions.iter().map(Discussion::to_geo_item));
        items.extend(inner.updates.iter().map(StatusUpdate::to_geo_item));
        items
    }
}

impl Default for HazardStore {
    fn default() -> Self {
        HazardStore::new()
    }
}

fn demo_reports() -> Vec<HazardReport> {
    let rows: Vec<(
        &str,
        &str,
        &str,
        HazardCategory,
        u8,
        HazardStatus,
        u32,
        u32,
        &str,
        f64,
        f64,
        &str,
        &str,
    )> = vec![
        (
            "1",
            "Large pothole on Main Street",
            "Deep pothole that could damage vehicles or cause accidents",
            HazardCategory::RoadDamage,
            4,
            HazardStatus::Pending,
            15,
            3,
            "Main Street & 5th Avenue",
            40.7128,
            -74.0060,
            "John D.",
            "2023-11-15T10:30:00Z",
        ),
        (
            "2",
            "Fallen tree blocking sidewalk",
            "Tree has fallen after the storm and is completely blocking the pedestrian path",
            HazardCategory::Debris,
            3,
            HazardStatus::InProgress,
            8,
            2,
            "Oak Avenue near Central Park",
            40.7135,
            -74.0046,
            "Sarah M.",
            "2023-11-16T14:45:00Z",
        ),
        (
            "3",
            "Broken street light",
            "Street light has been out for several days, creating a dark area at night",
            HazardCategory::Lighting,
            2,
            HazardStatus::Pending,
            5,
            1,
            "Pine Street & 10th Avenue",
            40.7142,
            -74.0052,
            "Michael T.",
            "2023-11-17T18:20:00Z",
        ),
        (
            "4",
            "Exposed electrical wires",
            "Electrical box on the corner has exposed wires that could be dangerous",
            HazardCategory::Electrical,
            5,
            HazardStatus::Pending,
            23,
            7,
            "Elm Street & 3rd Avenue",
            40.7139,
            -74.0062,
            "Lisa K.",
            "2023-11-18T09:15:00Z",
        ),
        (
            "5",
            "Water main leak",
            "Water pooling on the street from what appears to be a water main leak",
            HazardCategory::Water,
            4,
            HazardStatus::InProgress,
            12,
            4,
            "Maple Avenue & 7th Street",
            40.7145,
            -74.0070,
            "Robert J.",
            "2023-11-19T11:30:00Z",
        ),
    ];

    rows.into_iter()
        .map(
            |(id, title, description, category, severity, status, votes, comments, address, lat, lon, by, at)| {
                HazardReport {
                    id: id.to_string(),
                    title: title.to_string(),
                    description: description.to_string(),
                    category,
                    severity,
                    status,
                    votes,
                    comments,
                    address: address.to_string(),
                    location: GeoPoint {
                        latitude: lat,
                        longitude: lon,
                    },
                    reported_by: by.to_string(),
                    reported_at: at.to_string(),
                }
            },
        )
        .collect()
}

fn demo_discussions() -> Vec<Discussion> {
    vec![
        Discussion {
            id: "d1".to_string(),
            title: "Dangerous intersection needs traffic light".to_string(),
            content: "The intersection of Oak and Main has had 3 accidents this month."
                .to_string(),
            author: "Jennifer Wilson".to_string(),
            category: DiscussionCategory::Traffic,
            votes: 42,
            comments: 15,
            created_at: "2023-11-10T14:30:00Z".to_string(),
            is_hot: true,
            location: GeoPoint {
                latitude: 40.7131,
                longitude: -74.0058,
            },
        },
        Discussion {
            id: "d2".to_string(),
            title: "Playground equipment in Central Park is damaged".to_string(),
            content: "Several pieces of playground equipment are broken and have sharp edges."
                .to_string(),
            author: "Marcus Johnson".to_string(),
            category: DiscussionCategory::Parks,
            votes: 28,
            comments: 7,
            created_at: "2023-11-12T09:15:00Z".to_string(),
            is_hot: false,
            location: GeoPoint {
                latitude: 40.7134,
                longitude: -74.0049,
            },
        },
        Discussion {
            id: "d3".to_string(),
            title: "Street lights out on Elm Street for over a week".to_string(),
            content: "The entire block of Elm Street has had no street lighting for over a week."
                .to_string(),
            author: "Sarah Thompson".to_string(),
            category: DiscussionCategory::Lighting,
            votes: 35,
            comments: 12,
            created_at: "2023-11-14T18:45:00Z".to_string(),
            is_hot: true,
            location: GeoPoint {
                latitude: 40.7150,
                longitude: -74.0080,
            },
        },
        Discussion {
            id: "d4".to_string(),
            title: "Flooding on River Road after heavy rain".to_string(),
            content: "River Road near the bridge consistently floods after heavy rain.".to_string(),
            author: "David Chen".to_string(),
            category: DiscussionCategory::Flooding,
            votes: 19,
            comments: 8,
            created_at: "2023-11-15T11:20:00Z".to_string(),
            is_hot: false,
            location: GeoPoint {
                latitude: 40.7100,
                longitude: -74.0100,
            },
        },
        Discussion {
            id: "d5".to_string(),
            title: "Proposal for community clean-up day".to_string(),
            content: "Proposing a community clean-up day for the riverside park area.".to_string(),
            author: "Lisa Rodriguez".to_string(),
            category: DiscussionCategory::Community,
            votes: 31,
            comments: 22,
            created_at: "2023-11-16T15:10:00Z".to_string(),
            is_hot: true,
            location: GeoPoint {
                latitude: 40.7110,
                longitude: -74.0095,
            },
        },
    ]
}

fn demo_updates() -> Vec<StatusUpdate> {
    vec![
        StatusUpdate {
            id: "u1".to_string(),
            title: "Pothole on Main Street repaired".to_string(),
            content: "The city has filled the large pothole on Main Street.".to_string(),
            status: HazardStatus::Resolved,
            updated_at: "2023-11-17T10:30:00Z".to_string(),
            original_report_id: "123".to_string(),
            location: GeoPoint {
                latitude: 40.7128,
                longitude: -74.0060,
            },
        },
        StatusUpdate {
            id: "u2".to_string(),
            title: "Broken swing at Westside Park".to_string(),
            content: "Parks department has scheduled repairs for next Tuesday.".to_string(),
            status: HazardStatus::InProgress,
            updated_at: "2023-11-16T14:45:00Z".to_string(),
            original_report_id: "124".to_string(),
            location: GeoPoint {
                latitude: 40.7138,
                longitude: -74.0055,
            },
        },
        StatusUpdate {
            id: "u3".to_string(),
            title: "Fallen tree removed from Cedar Lane".to_string(),
            content: "Public works has removed the fallen tree blocking Cedar Lane.".to_string(),
            status: HazardStatus::Resolved,
            updated_at: "2023-11-15T09:20:00Z".to_string(),
            original_report_id: "125".to_string(),
            location: GeoPoint {
                latitude: 40.7125,
                longitude: -74.0066,
            },
        },
    ]
}
