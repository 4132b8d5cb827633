use tokio::sync::Mutex;

use crate::classifier::Classification;
use crate::config::{Config, constants};
use crate::device::DeviceNotifier;
use crate::log_relay::LogRelay;
use crate::telemetry::TelemetrySimulator;
use crate::vision::VisionClient;

/// Mock fill levels for the three bins, in percent.
///
/// These are inert stand-ins for capacity sensors that were never installed:
/// nothing increments them, and the reset operation zeroes them. They ride
/// along on every sensor simulation response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillLevels {
    pub fill_m: u32,
    pub fill_b: u32,
    pub fill_n: u32,
}

impl FillLevels {
    /// Zero all three counters.
    pub fn reset(&mut self) {
        self.fill_m = 0;
        self.fill_b = 0;
        self.fill_n = 0;
    }
}

impl Default for FillLevels {
    fn default() -> Self {
        let (fill_m, fill_b, fill_n) = constants::INITIAL_FILL_LEVELS;
        Self {
            fill_m,
            fill_b,
            fill_n,
        }
    }
}

/// Shared application state behind the HTTP handlers.
///
/// Holds the outbound service clients plus the mutable slots the endpoints
/// read and write: the telemetry source, the most recent classification, and
/// the mock fill levels. The slots are mutex-guarded so concurrent requests
/// observe consistent values; guards are never held across outbound awaits.
pub struct AppState {
    /// Annotation client, absent when no API key was configured. Every
    /// classification request fails with an initialization error while this
    /// is `None`.
    pub vision: Option<VisionClient>,
    pub device: DeviceNotifier,
    pub log_relay: LogRelay,
    pub simulator: Mutex<TelemetrySimulator>,
    pub last_classification: Mutex<Classification>,
    pub fill_levels: Mutex<FillLevels>,
}

impl AppState {
    /// Build the full service state from configuration.
    pub fn from_config(config: &Config) -> Self {
        let vision = config
            .vision_api_key
            .clone()
            .map(|key| VisionClient::new(config.vision_api_url.clone(), key));

        Self {
            vision,
            device: DeviceNotifier::new(config.device_addr.clone()),
            log_relay: LogRelay::new(config.log_server_url.clone()),
            simulator: Mutex::new(TelemetrySimulator::new()),
            last_classification: Mutex::new(Classification::default()),
            fill_levels: Mutex::new(FillLevels::default()),
        }
    }
}
