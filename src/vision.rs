use anyhow::Result;
use base64::{Engine as _, engine::general_purpose};
use serde_json::json;
use std::time::Duration;

use crate::config::constants;

/// Client for the external image annotation service.
///
/// Submits an image for label detection and web detection in a single
/// request and extracts the textual labels the classifier works on. Requests
/// carry a bounded timeout; a failed annotation fails the classification
/// request it belongs to, with no retry.
pub struct VisionClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

/// Textual output of one annotation request.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// All label detection descriptions, in service order.
    pub labels: Vec<String>,

    /// The top best-guess label from web detection, or a fixed fallback
    /// when the service returned none.
    pub best_guess: String,
}

impl VisionClient {
    /// Create a new VisionClient for the given endpoint and API key.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Annotation endpoint URL (e.g. the Vision `images:annotate` URL)
    /// * `api_key` - API key appended as the `key` query parameter
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Annotate an image and extract its textual labels.
    ///
    /// Requests label detection and web detection for the image and collects
    /// all label descriptions plus the first best-guess label.
    ///
    /// # Arguments
    ///
    /// * `image_bytes` - Raw image data (JPEG, PNG, etc.)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails or times out
    /// - The annotation service returns an error status
    /// - The response body is not valid JSON
    pub async fn annotate(&self, image_bytes: &[u8]) -> Result<Annotation> {
        let content = general_purpose::STANDARD.encode(image_bytes);

        let body = json!({
            "requests": [{
                "image": { "content": content },
                "features": [
                    {
                        "type": "LABEL_DETECTION",
                        "maxResults": constants::LABEL_DETECTION_MAX_RESULTS
                    },
                    { "type": "WEB_DETECTION" }
                ]
            }]
        });

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .timeout(Duration::from_secs(constants::ANNOTATION_TIMEOUT_SECONDS))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Annotation request failed: HTTP {}",
                response.status()
            ));
        }

        let payload: serde_json::Value = response.json().await?;
        let annotation = &payload["responses"][0];

        let labels = annotation["labelAnnotations"]
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry["description"].as_str().map(ToOwned::to_owned))
                    .collect()
            })
            .unwrap_or_default();

        let best_guess = annotation["webDetection"]["bestGuessLabels"][0]["label"]
            .as_str()
            .unwrap_or(constants::UNKNOWN_OBJECT_NAME)
            .to_string();

        Ok(Annotation { labels, best_guess })
    }
}

/// Decode an uploaded image from its data-URL form.
///
/// Clients send images as `data:image/...;base64,<data>`. Everything through
/// the first comma is discarded, the remainder is base64-decoded, and the
/// decoded bytes must carry a recognizable image signature.
///
/// # Errors
///
/// Returns an error if:
/// - The payload has no data-URL separator
/// - The base64 data is malformed
/// - The decoded bytes are not a recognizable image format
pub fn decode_image_payload(data_url: &str) -> Result<Vec<u8>> {
    let encoded = data_url
        .split_once(',')
        .map(|(_, rest)| rest)
        .ok_or_else(|| anyhow::anyhow!("Missing base64 separator in image payload"))?;

    let image_bytes = general_purpose::STANDARD.decode(encoded)?;

    image::guess_format(&image_bytes)?;

    Ok(image_bytes)
}
