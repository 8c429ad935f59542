use crate::feed::{FeedReader, FeedSnapshot};
use crate::telemetry::{
    critical_vitals, DashboardSummary, DeviceSummary, IoTDevice, Patient, PatientStatus, Vital,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for the telemetry API
pub struct TelemetryAppState {
    pub feed: FeedReader,
}

/// Query parameters for patient listing
#[derive(Deserialize)]
pub struct PatientQueryParams {
    /// Filter by status label (critical, warning, stable, recovered)
    pub status: Option<String>,
}

/// Query parameters for device listing
#[derive(Deserialize)]
pub struct DeviceQueryParams {
    /// Filter by owning patient reference
    pub patient_id: Option<String>,
}

/// Patient with its live critical-vital predicate alongside the static label
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientResponse {
    #[serde(flatten)]
    pub patient: Patient,
    pub critical_vitals: Vec<Vital>,
}

impl From<&Patient> for PatientResponse {
    fn from(patient: &Patient) -> Self {
        Self {
            critical_vitals: critical_vitals(&patient.vitals),
            patient: patient.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    #[serde(flatten)]
    pub device: IoTDevice,
    pub out_of_range: bool,
}

impl From<&IoTDevice> for DeviceResponse {
    fn from(device: &IoTDevice) -> Self {
        Self {
            out_of_range: device.is_reading_out_of_range(),
            device: device.clone(),
        }
    }
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create telemetry API router
pub fn create_telemetry_router(state: Arc<TelemetryAppState>) -> Router {
    Router::new()
        .route("/api/patients", get(list_patients))
        .route("/api/patients/:id", get(get_patient))
        .route("/api/devices", get(list_devices))
        .route("/api/devices/summary", get(device_summary))
        .route("/api/devices/:id", get(get_device))
        .route("/api/dashboard/summary", get(dashboard_summary))
        .route("/api/feed", get(feed_snapshot))
        .with_state(state)
}

/// GET /api/patients - List patients from the latest snapshot
///
/// Query parameters:
/// - `status`: only patients carrying this label (e.g. ?status=critical)
async fn list_patients(
    State(state): State<Arc<TelemetryAppState>>,
    Query(params): Query<PatientQueryParams>,
) -> Result<Json<Vec<PatientResponse>>, TelemetryError> {
    let status = match params.status {
        Some(ref raw) => Some(
            PatientStatus::parse(raw)
                .ok_or_else(|| TelemetryError::InvalidStatus(raw.clone()))?,
        ),
        None => None,
    };

    let snapshot = state.feed.snapshot();
    let response = snapshot
        .patients
        .iter()
        .filter(|p| status.map_or(true, |s| p.status == s))
        .map(PatientResponse::from)
        .collect();

    Ok(Json(response))
}

/// GET /api/patients/:id - Get one patient
async fn get_patient(
    State(state): State<Arc<TelemetryAppState>>,
    Path(id): Path<String>,
) -> Result<Json<PatientResponse>, TelemetryError> {
    let snapshot = state.feed.snapshot();
    let patient = snapshot
        .patient(&id)
        .ok_or(TelemetryError::PatientNotFound)?;

    Ok(Json(PatientResponse::from(patient)))
}

/// GET /api/devices - List devices, optionally for one patient
async fn list_devices(
    State(state): State<Arc<TelemetryAppState>>,
    Query(params): Query<DeviceQueryParams>,
) -> Json<Vec<DeviceResponse>> {
    let snapshot = state.feed.snapshot();
    let response = match params.patient_id {
        Some(ref patient_id) => snapshot
            .devices_for_patient(patient_id)
            .map(DeviceResponse::from)
            .collect(),
        None => snapshot.devices.iter().map(DeviceResponse::from).collect(),
    };

    Json(response)
}

/// GET /api/devices/:id - Get one device
async fn get_device(
    State(state): State<Arc<TelemetryAppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeviceResponse>, TelemetryError> {
    let snapshot = state.feed.snapshot();
    let device = snapshot.device(&id).ok_or(TelemetryError::DeviceNotFound)?;

    Ok(Json(DeviceResponse::from(device)))
}

/// GET /api/dashboard/summary - Patient counters, computed on read
async fn dashboard_summary(State(state): State<Arc<TelemetryAppState>>) -> Json<DashboardSummary> {
    Json(state.feed.snapshot().dashboard_summary())
}

/// GET /api/devices/summary - Device counters, computed on read
async fn device_summary(State(state): State<Arc<TelemetryAppState>>) -> Json<DeviceSummary> {
    Json(state.feed.snapshot().device_summary())
}

/// GET /api/feed - Full snapshot with tick counters
async fn feed_snapshot(State(state): State<Arc<TelemetryAppState>>) -> Json<FeedSnapshot> {
    let snapshot = state.feed.snapshot();
    Json(FeedSnapshot::clone(&snapshot))
}

/// Telemetry error types
#[derive(Debug)]
enum TelemetryError {
    PatientNotFound,
    DeviceNotFound,
    InvalidStatus(String),
}

impl IntoResponse for TelemetryError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            TelemetryError::PatientNotFound => {
                (StatusCode::NOT_FOUND, "Patient not found".to_string())
            }
            TelemetryError::DeviceNotFound => {
                (StatusCode::NOT_FOUND, "Device not found".to_string())
            }
            TelemetryError::InvalidStatus(raw) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid status '{}'", raw),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedConfig, LiveFeed};
    use crate::telemetry::{DriftConfig, TelemetryGenerator};

    // Default intervals: no tick lands during these tests
    fn create_test_feed() -> LiveFeed {
        let generator = TelemetryGenerator::new(DriftConfig::default(), Some(1));
        LiveFeed::spawn(generator, &FeedConfig::default())
    }

    fn app_state(feed: &LiveFeed) -> Arc<TelemetryAppState> {
        Arc::new(TelemetryAppState {
            feed: feed.reader(),
        })
    }

    #[tokio::test]
    async fn test_list_patients_no_filter() {
        let feed = create_test_feed();
        let params = PatientQueryParams { status: None };

        let result = list_patients(State(app_state(&feed)), Query(params))
            .await
            .unwrap();

        assert_eq!(result.0.len(), 3);
    }

    #[tokio::test]
    async fn test_list_patients_status_filter() {
        let feed = create_test_feed();
        let params = PatientQueryParams {
            status: Some("Critical".to_string()),
        };

        let result = list_patients(State(app_state(&feed)), Query(params))
            .await
            .unwrap();

        assert_eq!(result.0.len(), 1);
        assert_eq!(result.0[0].patient.name, "Priya Patel");
        assert_eq!(result.0[0].critical_vitals.len(), 3);
    }

    #[tokio::test]
    async fn test_list_patients_invalid_status() {
        let feed = create_test_feed();
        let params = PatientQueryParams {
            status: Some("zombie".to_string()),
        };

        let result = list_patients(State(app_state(&feed)), Query(params)).await;
        assert!(matches!(result, Err(TelemetryError::InvalidStatus(_))));
    }

    #[tokio::test]
    async fn test_list_devices_patient_filter() {
        let feed = create_test_feed();
        let params = DeviceQueryParams {
            patient_id: Some("pat001".to_string()),
        };

        let result = list_devices(State(app_state(&feed)), Query(params)).await;

        assert_eq!(result.0.len(), 2);
        assert!(result.0.iter().all(|d| d.device.patient_id == "pat001"));
    }

    #[tokio::test]
    async fn test_get_device_out_of_range_flag() {
        let feed = create_test_feed();

        // dev002 reads 101.2 °F against a 97-99 band
        let result = get_device(State(app_state(&feed)), Path("dev002".to_string()))
            .await
            .unwrap();
        assert!(result.0.out_of_range);

        let result = get_device(State(app_state(&feed)), Path("dev001".to_string()))
            .await
            .unwrap();
        assert!(!result.0.out_of_range);
    }

    #[tokio::test]
    async fn test_get_missing_entities() {
        let feed = create_test_feed();

        let patient = get_patient(State(app_state(&feed)), Path("42".to_string())).await;
        assert!(matches!(patient, Err(TelemetryError::PatientNotFound)));

        let device = get_device(State(app_state(&feed)), Path("dev999".to_string())).await;
        assert!(matches!(device, Err(TelemetryError::DeviceNotFound)));
    }

    #[tokio::test]
    async fn test_summaries() {
        let feed = create_test_feed();

        let dashboard = dashboard_summary(State(app_state(&feed))).await;
        assert_eq!(dashboard.0.total_patients, 3);
        assert_eq!(dashboard.0.critical_alerts, 1);
        assert_eq!(dashboard.0.active_monitoring, 3);

        let devices = device_summary(State(app_state(&feed))).await;
        assert_eq!(devices.0.connected, 2);
        assert_eq!(devices.0.total, 4);
        assert_eq!(devices.0.active_alerts, 2);
        assert_eq!(devices.0.data_points_per_hour, 1247);
    }
}
