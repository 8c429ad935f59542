// Integration tests for GET /api/content, /api/charts and /api/map

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use maharakshak::api::create_content_router;
use serde_json::Value;
use tower::ServiceExt;

fn create_test_app() -> Router {
    create_content_router()
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = create_test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_english_page() {
    let (status, body) = get("/api/content/en").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "en");
    assert_eq!(body["toggleLabel"], "मराठी");
    assert_eq!(body["header"]["emergency"], "Emergency: 104");
    assert_eq!(body["hero"]["slogan"], "तुमचं आरोग्य, आमचं कर्तव्य!");
    assert_eq!(body["features"]["features"].as_array().unwrap().len(), 6);
    assert_eq!(body["dashboard"]["status"]["critical"], "Critical");
}

#[tokio::test]
async fn test_marathi_page() {
    let (status, body) = get("/api/content/MR").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "mr");
    assert_eq!(body["toggleLabel"], "ENG");
    assert_eq!(body["header"]["login"], "आरोग्य कर्मचारी लॉगिन");
    assert_eq!(body["reporting"]["districts"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_unknown_language() {
    let (status, body) = get("/api/content/hi").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("'hi'"));
}

#[tokio::test]
async fn test_single_section() {
    let (status, body) = get("/api/content/en/guidelines").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["helplineNumbers"][0]["number"], "1075");

    let (status, body) = get("/api/content/mr/government-data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["portalList"][2]["name"], "आरोग्य सेतू");
}

#[tokio::test]
async fn test_section_errors() {
    let (status, _) = get("/api/content/en/sidebar").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Language is checked before the section name
    let (status, _) = get("/api/content/fr/sidebar").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_charts() {
    let (status, body) = get("/api/charts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["daily"].as_array().unwrap().len(), 5);
    assert_eq!(body["daily"][3]["cases"], 41);
    assert_eq!(body["districts"][0]["color"], "#FF6B6B");
    assert_eq!(body["totalCases"], 154);
}

#[tokio::test]
async fn test_map() {
    let (status, body) = get("/api/map").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["zoom"], 7);
    assert_eq!(body["markers"].as_array().unwrap().len(), 5);
    assert_eq!(body["markers"][1]["color"], "orange");
    assert_eq!(body["markers"][1]["radius"], 13);
    assert_eq!(body["containmentZones"][0]["color"], "red");
}
