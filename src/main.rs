use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use log::{info, warn};
use std::sync::Arc;
use tokio::net::TcpListener;

use waste_sorter::config::Config;
use waste_sorter::routes;
use waste_sorter::state::AppState;

/// Waste Sorter - backend service for a smart waste segregation station.
///
/// This service accepts camera snapshots from the station dashboard, has them
/// annotated by an external vision API, maps the labels onto the three bins
/// the sorter hardware knows about, and drives the rest of the station:
/// a sorting command to the sorter, simulated sensor telemetry for the
/// dashboard, and a classification record for the logging server.
///
/// # Endpoints
///
/// * `POST /process-image` - Classify an uploaded image and drive the sorter
/// * `GET /sensor-simulation` - Simulated reading for the last classification
/// * `POST /reset-bins` - Zero the mock fill counters and reset state
///
/// # Environment Variables
///
/// Required:
/// * `DEVICE_ADDR` - Host of the sorter hardware (e.g. "192.168.137.16")
///
/// Optional (with defaults):
/// * `VISION_API_KEY` - Annotation API key (unset: classification answers 500)
/// * `VISION_API_URL` - Annotation endpoint (default: Vision `images:annotate`)
/// * `LOG_SERVER_URL` - Logging server base URL (default: "http://localhost:3001")
/// * `BIND_PORT` - Listen port (default: "5000")
///
/// # Usage
///
/// ```bash
/// export DEVICE_ADDR="192.168.137.16"
/// export VISION_API_KEY="..."
/// ./waste-sorter
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to output to stdout, using RUST_LOG env var or info level by default
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stdout)
        .filter_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|level| level.parse().ok())
                .unwrap_or(log::LevelFilter::Info),
        )
        .init();

    // Load configuration from environment variables
    let config = Config::load().expect(
        "Failed to load configuration. Please ensure all required environment variables are set.",
    );

    info!("Waste Sorter starting...");
    info!("Using sorter device at: {}", config.device_addr);
    info!("Using logging server at: {}", config.log_server_url);

    if config.vision_api_key.is_none() {
        warn!("VISION_API_KEY is not set; classification requests will be rejected");
    }

    let state = Arc::new(AppState::from_config(&config));

    let router = Router::new()
        .route("/process-image", post(routes::process_image))
        .route("/sensor-simulation", get(routes::sensor_simulation))
        .route("/reset-bins", post(routes::reset_bins))
        .with_state(state);

    let listener =
        TcpListener::bind((std::net::Ipv4Addr::UNSPECIFIED, config.bind_port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
