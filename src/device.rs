use anyhow::Result;
use std::time::Duration;

use crate::config::constants;

/// Notifier for the sorter hardware.
///
/// The sorter runs a small HTTP server on the local network and accepts
/// single-letter sorting commands as a query parameter. Commands are
/// best-effort: the caller logs a failed delivery and carries on, so an
/// unreachable device never fails the classification request that produced
/// the command. There is no retry and no queuing of missed commands.
pub struct DeviceNotifier {
    client: reqwest::Client,
    device_addr: String,
}

impl DeviceNotifier {
    /// Create a new DeviceNotifier for the sorter at the given host.
    ///
    /// # Arguments
    ///
    /// * `device_addr` - Host of the sorter hardware (e.g. "192.168.137.16")
    pub fn new(device_addr: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            device_addr,
        }
    }

    /// Send a sorting command to the device.
    ///
    /// Issues a GET to the device's `/sort` endpoint with the category code
    /// as the `type` query parameter, bounded by a fixed timeout.
    ///
    /// # Arguments
    ///
    /// * `code` - Single-letter category code (`M`, `B` or `N`)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails or times out
    /// - The device returns an error status
    pub async fn send_sort_command(&self, code: char) -> Result<()> {
        let url = format!("http://{}/sort?type={}", self.device_addr, code);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(constants::DOWNSTREAM_TIMEOUT_SECONDS))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Failed to send command '{}' to sorter: HTTP {}",
                code,
                response.status()
            ));
        }

        Ok(())
    }

    /// Get the configured device host.
    pub fn device_addr(&self) -> &str {
        &self.device_addr
    }
}
