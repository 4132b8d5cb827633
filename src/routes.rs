use std::sync::Arc;

use axum::{Json, extract::State};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::classifier::{self, Classification};
use crate::error::RequestError;
use crate::log_relay::LogEntry;
use crate::state::AppState;
use crate::vision;

#[derive(Debug, Deserialize)]
pub struct ProcessImageRequest {
    /// Data-URL encoded image (`data:image/...;base64,<data>`).
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProcessImageResponse {
    pub waste_type: char,
    pub raw_labels: Vec<String>,
    pub simulated_moisture: u32,
    pub simulated_gas: u32,
    pub simulated_metal: bool,
    pub detected_object: String,
}

#[derive(Debug, Serialize)]
pub struct SensorSimulationResponse {
    pub moisture: u32,
    pub gas: u32,
    /// "Y" or "N", as the dashboard expects.
    pub metal: &'static str,
    pub object_name: String,
    pub fill_m: u32,
    pub fill_b: u32,
    pub fill_n: u32,
}

#[derive(Debug, Serialize)]
pub struct ResetBinsResponse {
    pub status: String,
}

/// `POST /process-image`: classify an uploaded image and drive the sorter.
///
/// Runs the full classification flow: decode the payload, annotate, map the
/// labels to a waste category, record the result in the shared slot, command
/// the sorter, fabricate telemetry, and relay a log record. Device and
/// logging failures are logged and swallowed; the response reflects the
/// classification regardless.
pub async fn process_image(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProcessImageRequest>,
) -> Result<Json<ProcessImageResponse>, RequestError> {
    let vision_client = state
        .vision
        .as_ref()
        .ok_or(RequestError::VisionUnavailable)?;

    let data_url = payload.image.ok_or(RequestError::MissingImage)?;

    let image_bytes = vision::decode_image_payload(&data_url).map_err(|e| {
        RequestError::ImageDecodeFailed {
            reason: e.to_string(),
        }
    })?;

    let annotation = vision_client.annotate(&image_bytes).await.map_err(|e| {
        RequestError::AnnotationFailed {
            reason: e.to_string(),
        }
    })?;

    let mut all_labels = annotation.labels.clone();
    all_labels.push(annotation.best_guess.clone());

    let category = classifier::classify_labels(&all_labels);

    info!(
        "Classified '{}' as '{}' from {} label(s)",
        annotation.best_guess,
        category.code(),
        all_labels.len()
    );

    {
        let mut last = state.last_classification.lock().await;
        *last = Classification {
            category,
            object_name: annotation.best_guess.clone(),
        };
    }

    // Best-effort: an unreachable sorter must not fail the request.
    match state.device.send_sort_command(category.code()).await {
        Ok(()) => info!(
            "Sent command '{}' to sorter at {}",
            category.code(),
            state.device.device_addr()
        ),
        Err(e) => warn!("Could not reach sorter: {}", e),
    }

    let reading = state
        .simulator
        .lock()
        .await
        .sample(category, &annotation.best_guess);

    // Best-effort: a failed log relay is invisible to the client.
    let entry = LogEntry::new(category, &reading);
    match state.log_relay.send_log_entry(&entry).await {
        Ok(()) => info!("Sent log entry for bin '{}'", entry.bin_id),
        Err(e) => error!("Could not send log entry: {}", e),
    }

    Ok(Json(ProcessImageResponse {
        waste_type: category.code(),
        raw_labels: all_labels,
        simulated_moisture: reading.moisture,
        simulated_gas: reading.gas,
        simulated_metal: reading.metal_detected,
        detected_object: reading.object_name,
    }))
}

/// `GET /sensor-simulation`: fabricate a reading for the last classification.
pub async fn sensor_simulation(
    State(state): State<Arc<AppState>>,
) -> Json<SensorSimulationResponse> {
    let last = state.last_classification.lock().await.clone();

    let reading = state
        .simulator
        .lock()
        .await
        .sample(last.category, &last.object_name);

    let fills = *state.fill_levels.lock().await;

    Json(SensorSimulationResponse {
        moisture: reading.moisture,
        gas: reading.gas,
        metal: if reading.metal_detected { "Y" } else { "N" },
        object_name: reading.object_name,
        fill_m: fills.fill_m,
        fill_b: fills.fill_b,
        fill_n: fills.fill_n,
    })
}

/// `POST /reset-bins`: zero the mock fill counters and reset the slot.
pub async fn reset_bins(State(state): State<Arc<AppState>>) -> Json<ResetBinsResponse> {
    state.fill_levels.lock().await.reset();
    *state.last_classification.lock().await = Classification::reset_marker();

    info!("Bin fill levels zeroed and classification state reset");

    Json(ResetBinsResponse {
        status: "Bins successfully reset to 0% fill.".to_string(),
    })
}
