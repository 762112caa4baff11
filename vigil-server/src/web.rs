//! REST API
//!
//! Axum router and handlers for the hazard platform:
//!
//! | Method | Path | Purpose |
//! |--------|----------------------|--------------------------------------|
//! | GET | /v1/hazards | list reports, filterable |
//! | POST | /v1/hazards | submit a report |
//! | GET | /v1/hazards/{id} | single report |
//! | GET | /v1/discussions | forum discussions |
//! | GET | /v1/updates | resolution status updates |
//! | GET | /v1/alerts/nearby | proximity alerts around a position |
//!
//! The nearby endpoint takes the requester's coordinates as query
//! parameters; when they are omitted the server falls back to its
//! configured station position, and with neither it answers 503.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;

use vigil_core::alerts::{AlertError, AlertResult, ProximityAlertEngine};
use vigil_core::geo::{GeoError, GeoPoint};
use vigil_core::hazards::{Discussion, HazardError, HazardReport, StatusUpdate};
use vigil_core::location::{LocationError, LocationProvider};

use crate::geolocate::FixedLocationProvider;
use crate::store::{HazardStore, NewReport, ReportFilter};

/// Shared state behind every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HazardStore>,
    pub engine: ProximityAlertEngine,
    pub station: Option<GeoPoint>,
}

/// API error taxonomy, mapped onto HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("hazard not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    InvalidCoordinate(#[from] GeoError),
    #[error(transparent)]
    InvalidThreshold(#[from] AlertError),
    #[error(transparent)]
    InvalidReport(#[from] HazardError),
    #[error("latitude and longitude must be supplied together")]
    IncompleteCoordinates,
    #[error(transparent)]
    LocationUnavailable(#[from] LocationError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::LocationUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InvalidCoordinate(_)
            | ApiError::InvalidThreshold(_)
            | ApiError::InvalidReport(_)
            | ApiError::IncompleteCoordinates => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("request failed: {}", self);
        } else {
            debug!("request rejected: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Query parameters for the nearby-alerts endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbyParams {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Alert radius in meters; defaults to the server's configured radius
    pub radius: Option<f64>,
    /// Truncate the response to the closest N alerts
    pub limit: Option<usize>,
}

/// Response body for the nearby-alerts endpoint.
///
/// `total` always counts the complete matching set so clients can render
/// a "+N more" indicator when `alerts` was truncated by `limit`.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyResponse {
    pub total: usize,
    pub alerts: Vec<AlertResult>,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/hazards", get(list_hazards).post(create_hazard))
        .route("/v1/hazards/{id}", get(get_hazard))
        .route("/v1/discussions", get(list_discussions))
        .route("/v1/updates", get(list_updates))
        .route("/v1/alerts/nearby", get(nearby_alerts))
        .with_state(state)
}

async fn list_hazards(
    State(state): State<AppState>,
    Query(filter): Query<ReportFilter>,
) -> Json<Vec<HazardReport>> {
    Json(state.store.reports(&filter).await)
}

async fn get_hazard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HazardReport>, ApiError> {
    state
        .store
        .report(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

async fn create_hazard(
    State(state): State<AppState>,
    Json(new): Json<NewReport>,
) -> Result<(StatusCode, Json<HazardReport>), ApiError> {
    GeoPoint::new(new.location.latitude, new.location.longitude)?;
    let report = state.store.add_report(new).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

async fn list_discussions(State(state): State<AppState>) -> Json<Vec<Discussion>> {
    Json(state.store.discussions().await)
}

async fn list_updates(State(state): State<AppState>) -> Json<Vec<StatusUpdate>> {
    Json(state.store.updates().await)
}

async fn nearby_alerts(
    State(state): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<NearbyResponse>, ApiError> {
    let user = resolve_position(&params, state.station)?;

    let engine = match params.radius {
        Some(radius) => ProximityAlertEngine::new(radius)?,
        None => state.engine,
    };

    let items = state.store.geo_items().await;
    let mut alerts = engine.alerts(&user, &items);
    let total = alerts.len();
    if let Some(limit) = params.limit {
        alerts.truncate(limit);
    }
    debug!(
        "nearby query at ({}, {}): {} of {} alerts returned",
        user.latitude,
        user.longitude,
        alerts.len(),
        total
    );

    Ok(Json(NearbyResponse { total, alerts }))
}

/// Resolve the position a nearby query runs against: request coordinates
/// first, station fallback second. Alerting never proceeds without one.
fn resolve_position(
    params: &NearbyParams,
    station: Option<GeoPoint>,
) -> Result<GeoPoint, ApiError> {
    match (params.latitude, params.longitude) {
        (Some(latitude), Some(longitude)) => Ok(GeoPoint::new(latitude, longitude)?),
        (None, None) => {
            let mut provider = FixedLocationProvider::new(station);
            Ok(provider.current_position()?)
        }
        _ => Err(ApiError::IncompleteCoordinates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::hazards::{HazardCategory, HazardStatus};

    fn demo_state(station: Option<GeoPoint>) -> AppState {
        AppState {
            store: Arc::new(HazardStore::with_demo_data()),
            engine: ProximityAlertEngine::default(),
            station,
        }
    }

    fn params(
        latitude: Option<f64>,
        longitude: Option<f64>,
        radius: Option<f64>,
        limit: Option<usize>,
    ) -> NearbyParams {
        NearbyParams {
            latitude,
            longitude,
            radius,
            limit,
        }
    }

    #[tokio::test]
    async fn test_nearby_alerts_sorted_within_radius() {
        let state = demo_state(None);
        let Json(body) = nearby_alerts(
            State(state),
            Query(params(Some(40.7128), Some(-74.0060), None, None)),
        )
        .await
        .unwrap();

        assert_eq!(body.total, body.alerts.len());
        assert!(!body.alerts.is_empty());
        // Closest first; the demo report at the query position leads
        assert_eq!(body.alerts[0].item.id, "1");
        assert_eq!(body.alerts[0].distance_meters, 0.0);
        for pair in body.alerts.windows(2) {
            assert!(pair[0].distance_meters <= pair[1].distance_meters);
        }
        for alert in &body.alerts {
            assert!(alert.distance_meters < 500.0);
            assert!(alert.item.is_active);
        }
    }

    #[tokio::test]
    async fn test_nearby_alerts_tight_radius() {
        let state = demo_state(None);
        let Json(body) = nearby_alerts(
            State(state),
            Query(params(Some(40.7128), Some(-74.0060), Some(50.0), None)),
        )
        .await
        .unwrap();

        // Only the co-located report and the hot discussion ~37 m away
        let ids: Vec<&str> = body.alerts.iter().map(|a| a.item.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "d1"]);
    }

    #[tokio::test]
    async fn test_nearby_alerts_limit_reports_total() {
        let state = demo_state(None);
        let Json(body) = nearby_alerts(
            State(state),
            Query(params(Some(40.7128), Some(-74.0060), None, Some(3))),
        )
        .await
        .unwrap();

        assert_eq!(body.alerts.len(), 3);
        assert!(body.total > 3);
    }

    #[tokio::test]
    async fn test_nearby_alerts_station_fallback() {
        let station = GeoPoint::new(40.7128, -74.0060).unwrap();
        let state = demo_state(Some(station));
        let result = nearby_alerts(State(state), Query(params(None, None, None, None))).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_nearby_alerts_location_unavailable() {
        let state = demo_state(None);
        let err = nearby_alerts(State(state), Query(params(None, None, None, None)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::LocationUnavailable(_)));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_nearby_alerts_incomplete_coordinates() {
        let state = demo_state(None);
        let err = nearby_alerts(
            State(state),
            Query(params(Some(40.7128), None, None, None)),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::IncompleteCoordinates));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_nearby_alerts_rejects_bad_input() {
        let state = demo_state(None);
        let err = nearby_alerts(
            State(state.clone()),
            Query(params(Some(95.0), Some(-74.0), None, None)),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidCoordinate(_)));

        let err = nearby_alerts(
            State(state),
            Query(params(Some(40.7128), Some(-74.0060), Some(-10.0), None)),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidThreshold(_)));
    }

    #[tokio::test]
    async fn test_get_hazard_found_and_missing() {
        let state = demo_state(None);

        let Json(report) = get_hazard(State(state.clone()), Path("4".to_string()))
            .await
            .unwrap();
        assert_eq!(report.category, HazardCategory::Electrical);

        let err = get_hazard(State(state), Path("999".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_hazards_with_filter() {
        let state = demo_state(None);
        let filter = ReportFilter {
            status: Some(HazardStatus::InProgress),
            ..Default::default()
        };
        let Json(reports) = list_hazards(State(state), Query(filter)).await;
        assert_eq!(reports.len(), 2);
    }

    #[tokio::test]
    async fn test_create_hazard_round_trip() {
        let state = demo_state(None);
        let new = NewReport {
            title: "Collapsed drain cover".to_string(),
            description: "Open drain on the crosswalk".to_string(),
            category: HazardCategory::RoadDamage,
            severity: 4,
            address: "9th Street & Grand".to_string(),
            location: GeoPoint::new(40.7133, -74.0059).unwrap(),
            reported_by: "Pat L.".to_string(),
        };

        let (status, Json(report)) = create_hazard(State(state.clone()), Json(new))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(report.id, "6");

        // The fresh report is pending, so it alerts immediately
        let Json(body) = nearby_alerts(
            State(state),
            Query(params(Some(40.7133), Some(-74.0059), Some(20.0), None)),
        )
        .await
        .unwrap();
        assert!(body.alerts.iter().any(|a| a.item.id == "6"));
    }

    #[tokio::test]
    async fn test_create_hazard_rejects_bad_coordinates() {
        let state = demo_state(None);
        let new = NewReport {
            title: "Bad".to_string(),
            description: "Bad".to_string(),
            category: HazardCategory::Other,
            severity: 3,
            address: "Nowhere".to_string(),
            location: GeoPoint {
                latitude: 120.0,
                longitude: 0.0,
            },
            reported_by: "Nobody".to_string(),
        };
        let err = create_hazard(State(state), Json(new)).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidCoordinate(_)));
    }
}
