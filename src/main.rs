use anyhow::{Context, Result};
use maharakshak::api::{create_router, AppState};
use maharakshak::config;
use maharakshak::feed::LiveFeed;
use maharakshak::telemetry::TelemetryGenerator;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maharakshak=info".into()),
        )
        .init();

    info!("MahaRakshak starting...");

    let config = config::from_env().context("Invalid configuration")?;
    info!(
        bind = %config.server.bind_addr(),
        patient_interval_ms = config.feed.patient_interval_ms,
        device_interval_ms = config.feed.device_interval_ms,
        rng_seed = ?config.feed.rng_seed,
        "Configuration loaded"
    );

    // Start the mock telemetry feed
    let generator = TelemetryGenerator::new(config.drift.clone(), config.feed.rng_seed);
    let mut feed = LiveFeed::spawn(generator, &config.feed);

    // Start HTTP API server
    let router = create_router(AppState {
        feed: feed.reader(),
        cors_permissive: config.server.cors_permissive,
    });
    let listener = tokio::net::TcpListener::bind(config.server.bind_addr())
        .await
        .context("Failed to bind API port")?;
    info!(addr = %config.server.bind_addr(), "API listening");

    let server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!(error = %e, "API server error");
        }
    });

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl_c signal")?;
    info!("Shutdown signal received");

    // Graceful shutdown
    server_handle.abort();
    feed.shutdown().await;
    info!("MahaRakshak stopped");

    Ok(())
}
