use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

/// Request-level error types for the waste sorter service.
///
/// These cover the ways a classification request can fail on the live path:
/// bad client input, an annotation client that never initialized, and a
/// failed annotation call. Downstream device and logging failures never
/// become responses, so they are not represented here.
#[derive(Debug)]
pub enum RequestError {
    /// The request body carried no image field.
    MissingImage,

    /// The image payload could not be decoded into image bytes.
    ImageDecodeFailed { reason: String },

    /// The annotation client was never initialized (no API key at startup).
    VisionUnavailable,

    /// The annotation service call failed.
    AnnotationFailed { reason: String },
}

impl RequestError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MissingImage | RequestError::ImageDecodeFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            RequestError::VisionUnavailable | RequestError::AnnotationFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MissingImage => write!(f, "No image data provided"),
            RequestError::ImageDecodeFailed { reason } => {
                write!(f, "Image decoding failed: {}", reason)
            }
            RequestError::VisionUnavailable => {
                write!(f, "Vision client failed to initialize")
            }
            RequestError::AnnotationFailed { reason } => {
                write!(f, "Image annotation failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
