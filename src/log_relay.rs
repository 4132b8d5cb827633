use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::time::Duration;

use crate::classifier::WasteCategory;
use crate::config::constants;
use crate::telemetry::SensorReading;

/// Relay for classification records to the logging server.
///
/// Every classification event is reported once to the logging server's
/// `/api/log-entry` endpoint. Delivery is best-effort with a bounded timeout;
/// a failed POST is logged locally by the caller and never surfaces in the
/// classification response. Nothing is retained locally.
pub struct LogRelay {
    client: reqwest::Client,
    base_url: String,
}

/// One classification record, shaped for the logging server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Event time, UTC, RFC 3339 with a trailing `Z`.
    pub timestamp: String,
    pub bin_id: String,
    pub metal: bool,
    pub moisture: u32,
    pub gas: u32,
    pub detected_object: String,
}

impl LogEntry {
    /// Assemble a record for a classification event, stamped with the
    /// current UTC time.
    pub fn new(category: WasteCategory, reading: &SensorReading) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            bin_id: category.bin_id().to_string(),
            metal: reading.metal_detected,
            moisture: reading.moisture,
            gas: reading.gas,
            detected_object: reading.object_name.clone(),
        }
    }
}

impl LogRelay {
    /// Create a new LogRelay for the logging server at the given base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Logging server base URL (e.g. "http://localhost:3001")
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Post one classification record to the logging server.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails or times out
    /// - The logging server returns an error status
    pub async fn send_log_entry(&self, entry: &LogEntry) -> Result<()> {
        let url = format!("{}/api/log-entry", self.base_url);

        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(constants::DOWNSTREAM_TIMEOUT_SECONDS))
            .json(entry)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Failed to send log entry: HTTP {}",
                response.status()
            ));
        }

        Ok(())
    }
}
