//! Waste Sorter - backend service for a smart waste segregation station.
//!
//! This library provides the components behind the station's HTTP API: an
//! uploaded image is annotated by an external vision service, the resulting
//! labels are mapped to one of three waste categories, a sorting command is
//! sent to the sorter hardware, simulated sensor telemetry is produced for
//! the dashboard, and a structured record of the event is relayed to the
//! logging server.
//!
//! # Core Components
//!
//! * [`config`] - Environment-variable configuration and application constants
//! * [`classifier`] - Waste categories and keyword-priority classification
//! * [`vision`] - Image annotation client and payload decoding
//! * [`device`] - Best-effort sorting commands to the sorter hardware
//! * [`telemetry`] - Seedable simulated sensor readings
//! * [`log_relay`] - Classification records for the logging server
//! * [`state`] - Shared per-process state behind the endpoints
//! * [`routes`] - The HTTP endpoint handlers
//! * [`error`] - Request error taxonomy and status mapping

pub mod classifier;
pub mod config;
pub mod device;
pub mod error;
pub mod log_relay;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod vision;

// Re-export commonly used types for convenience
pub use classifier::{Classification, WasteCategory, classify_labels};
pub use config::Config;
pub use device::DeviceNotifier;
pub use error::RequestError;
pub use log_relay::{LogEntry, LogRelay};
pub use state::{AppState, FillLevels};
pub use telemetry::{SensorReading, TelemetrySimulator};
pub use vision::{Annotation, VisionClient, decode_image_payload};
