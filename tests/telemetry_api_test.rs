// Integration tests for the telemetry routes, driven through the full router

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use maharakshak::api::{create_router, AppState};
use maharakshak::feed::{FeedConfig, LiveFeed};
use maharakshak::telemetry::{DriftConfig, TelemetryGenerator};
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

fn spawn_feed(config: &FeedConfig) -> LiveFeed {
    let generator = TelemetryGenerator::new(DriftConfig::default(), Some(7));
    LiveFeed::spawn(generator, config)
}

fn create_test_app(feed: &LiveFeed) -> Router {
    create_router(AppState {
        feed: feed.reader(),
        cors_permissive: true,
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    // Rejections from extractors carry plain-text bodies
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let feed = spawn_feed(&FeedConfig::default());
    let (status, body) = get(create_test_app(&feed), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

/// Before the first tick the API serves the seed records.
#[tokio::test]
async fn test_patients_before_first_tick() {
    let feed = spawn_feed(&FeedConfig::default());
    let (status, body) = get(create_test_app(&feed), "/api/patients").await;

    assert_eq!(status, StatusCode::OK);
    let patients = body.as_array().unwrap();
    assert_eq!(patients.len(), 3);
    assert_eq!(patients[0]["name"], "Rajesh Sharma");
    assert_eq!(patients[0]["lastUpdate"], "2 mins ago");
    assert_eq!(patients[0]["vitals"]["bloodPressure"]["systolic"], 140);
    assert_eq!(patients[1]["status"], "critical");
    assert_eq!(
        patients[1]["criticalVitals"],
        serde_json::json!(["temperature", "heart_rate", "oxygen_saturation"])
    );
}

#[tokio::test]
async fn test_patient_status_filter() {
    let feed = spawn_feed(&FeedConfig::default());

    let (status, body) = get(create_test_app(&feed), "/api/patients?status=stable").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "3");

    let (status, body) = get(create_test_app(&feed), "/api/patients?status=recovered").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = get(create_test_app(&feed), "/api/patients?status=unknown").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("unknown"));
}

#[tokio::test]
async fn test_get_patient_by_id() {
    let feed = spawn_feed(&FeedConfig::default());

    let (status, body) = get(create_test_app(&feed), "/api/patients/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Priya Patel");
    assert_eq!(body["phone"], "+91 9876543211");

    let (status, body) = get(create_test_app(&feed), "/api/patients/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Patient not found");
}

#[tokio::test]
async fn test_devices_and_filter() {
    let feed = spawn_feed(&FeedConfig::default());

    let (status, body) = get(create_test_app(&feed), "/api/devices").await;
    assert_eq!(status, StatusCode::OK);
    let devices = body.as_array().unwrap();
    assert_eq!(devices.len(), 4);
    assert_eq!(devices[2]["deviceType"], "pulse_oximeter");
    assert_eq!(devices[2]["outOfRange"], true);
    assert_eq!(devices[3]["status"], "offline");
    assert_eq!(devices[3]["batteryLevel"], 0.0);

    let (_, body) = get(create_test_app(&feed), "/api/devices?patient_id=pat002").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "dev003");
}

#[tokio::test]
async fn test_get_device_by_id() {
    let feed = spawn_feed(&FeedConfig::default());

    let (status, body) = get(create_test_app(&feed), "/api/devices/dev002").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lastReading"]["unit"], "°F");
    assert_eq!(body["thresholds"]["min"], 97.0);

    let (status, body) = get(create_test_app(&feed), "/api/devices/dev404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Device not found");
}

/// The static summary route wins over the `:id` capture.
#[tokio::test]
async fn test_summaries() {
    let feed = spawn_feed(&FeedConfig::default());

    let (status, body) = get(create_test_app(&feed), "/api/dashboard/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalPatients"], 3);
    assert_eq!(body["criticalAlerts"], 1);
    assert_eq!(body["activeMonitoring"], 3);

    let (status, body) = get(create_test_app(&feed), "/api/devices/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connected"], 2);
    assert_eq!(body["total"], 4);
    assert_eq!(body["activeAlerts"], 2);
    assert_eq!(body["dataPointsPerHour"], 1247);
}

/// Readings served after ticks carry the "Just now" label and respect clamps.
#[tokio::test]
async fn test_feed_reflects_ticks() {
    let config = FeedConfig {
        patient_interval_ms: 10,
        device_interval_ms: 10,
        rng_seed: Some(7),
        update_buffer: 64,
    };
    let mut feed = spawn_feed(&config);
    tokio::time::sleep(Duration::from_millis(100)).await;

    let (status, body) = get(create_test_app(&feed), "/api/feed").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["patientTicks"].as_u64().unwrap() > 0);
    assert!(body["deviceTicks"].as_u64().unwrap() > 0);

    for patient in body["patients"].as_array().unwrap() {
        assert_eq!(patient["lastUpdate"], "Just now");
        let spo2 = patient["vitals"]["oxygenSaturation"].as_f64().unwrap();
        assert!((85.0..=100.0).contains(&spo2));
    }
    for device in body["devices"].as_array().unwrap() {
        let battery = device["batteryLevel"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&battery));
    }

    feed.shutdown().await;
    let (_, stopped) = get(create_test_app(&feed), "/api/feed").await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    let (_, later) = get(create_test_app(&feed), "/api/feed").await;
    assert_eq!(stopped["patientTicks"], later["patientTicks"]);
    assert_eq!(stopped["deviceTicks"], later["deviceTicks"]);
}

/// A plain GET without upgrade headers is refused by the WebSocket route.
#[tokio::test]
async fn test_ws_requires_upgrade() {
    let feed = spawn_feed(&FeedConfig::default());
    let (status, _) = get(create_test_app(&feed), "/api/ws").await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_cors_header_when_permissive() {
    let feed = spawn_feed(&FeedConfig::default());
    let response = create_test_app(&feed)
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
