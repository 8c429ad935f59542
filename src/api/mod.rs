// HTTP and WebSocket APIs

pub mod content;
pub mod telemetry;
pub mod websocket;

pub use content::create_content_router;
pub use telemetry::{create_telemetry_router, TelemetryAppState};
pub use websocket::{create_ws_router, ws_handler, WsAppState};

use crate::feed::FeedReader;
use axum::{http::Method, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Everything the routers need from the running service
#[derive(Clone)]
pub struct AppState {
    pub feed: FeedReader,
    /// Allow any origin on every route
    pub cors_permissive: bool,
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Merge every router into the full application
pub fn create_router(state: AppState) -> Router {
    let telemetry_state = Arc::new(TelemetryAppState {
        feed: state.feed.clone(),
    });
    let ws_state = Arc::new(WsAppState { feed: state.feed });

    let app = Router::new()
        .route("/health", get(health))
        .merge(create_telemetry_router(telemetry_state))
        .merge(create_content_router())
        .merge(create_ws_router(ws_state));

    if state.cors_permissive {
        app.layer(
            CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_origin(Any),
        )
    } else {
        app
    }
}
