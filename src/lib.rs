// Configuration (TOML file + env overrides)
pub mod config;

// Patients, devices, drift and derived counts
pub mod telemetry;

// Scheduled tick task and snapshots
pub mod feed;

// Bilingual page text and literal datasets
pub mod content;

// HTTP and WebSocket APIs
pub mod api;

// Subscription management
pub mod subscription;
