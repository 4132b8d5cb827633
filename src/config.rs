/// Configuration for the waste sorter service loaded from environment variables.
///
/// This struct defines all the configurable parameters for the sorting station,
/// including the annotation API credentials and the addresses of the downstream
/// services. All values are loaded from environment variables to support
/// containerized deployments.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the image annotation service.
    ///
    /// When unset the service still starts, but every classification request
    /// is answered with an initialization error.
    /// Environment variable: `VISION_API_KEY`
    pub vision_api_key: Option<String>,

    /// Endpoint of the image annotation service.
    ///
    /// Environment variable: `VISION_API_URL`
    pub vision_api_url: String,

    /// Host of the sorter hardware (e.g. "192.168.137.16").
    ///
    /// The sorter exposes a small HTTP server that accepts single-letter
    /// sorting commands.
    /// Environment variable: `DEVICE_ADDR`
    pub device_addr: String,

    /// Base URL of the logging server that collects classification records.
    ///
    /// Environment variable: `LOG_SERVER_URL`
    pub log_server_url: String,

    /// TCP port the service listens on.
    ///
    /// Environment variable: `BIND_PORT`
    pub bind_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are not set or cannot be parsed:
    /// - `VISION_API_KEY`: Annotation API key (optional)
    /// - `VISION_API_URL`: Annotation endpoint (default: Google Vision `images:annotate`)
    /// - `DEVICE_ADDR`: Sorter hardware host (required)
    /// - `LOG_SERVER_URL`: Logging server base URL (default: "http://localhost:3001")
    /// - `BIND_PORT`: Listen port (default: "5000")
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let vision_api_key = std::env::var("VISION_API_KEY").ok();

        let vision_api_url = std::env::var("VISION_API_URL")
            .unwrap_or_else(|_| "https://vision.googleapis.com/v1/images:annotate".to_string());

        let device_addr = std::env::var("DEVICE_ADDR")
            .map_err(|_| "DEVICE_ADDR environment variable is required")?;

        let log_server_url = std::env::var("LOG_SERVER_URL")
            .unwrap_or_else(|_| "http://localhost:3001".to_string());

        let bind_port = std::env::var("BIND_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid BIND_PORT: {}", e))?;

        Ok(Config {
            vision_api_key,
            vision_api_url,
            device_addr,
            log_server_url,
            bind_port,
        })
    }
}

/// Application constants used throughout the system.
pub mod constants {
    /// Timeout for outbound requests to the sorter hardware and the logging
    /// server, in seconds.
    pub const DOWNSTREAM_TIMEOUT_SECONDS: u64 = 45;

    /// Timeout for annotation API requests, in seconds.
    pub const ANNOTATION_TIMEOUT_SECONDS: u64 = 45;

    /// Maximum number of labels requested from label detection.
    pub const LABEL_DETECTION_MAX_RESULTS: u32 = 10;

    /// Object name reported before anything has been classified.
    pub const DEFAULT_OBJECT_NAME: &str = "Plastic Bottle";

    /// Object name installed by the bin reset operation.
    pub const RESET_OBJECT_NAME: &str = "System Reset";

    /// Fallback object name when web detection returns no best guess.
    pub const UNKNOWN_OBJECT_NAME: &str = "Unknown Waste";

    /// Initial mock fill levels for the metal / biodegradable /
    /// non-biodegradable bins, in percent.
    pub const INITIAL_FILL_LEVELS: (u32, u32, u32) = (5, 10, 8);
}
