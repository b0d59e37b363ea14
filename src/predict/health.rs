//! Connectivity check against the prediction service's health route.

use serde::Deserialize;

use crate::config::EndpointConfig;
use crate::http_client;

const MAX_RESPONSE_BYTES: usize = 16 * 1024;

/// Failures while probing the health route.
#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    /// The request could not be transmitted.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("Server error: HTTP {0}")]
    Status(u16),
    /// The response did not report a healthy service.
    #[error("Invalid health response: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct HealthWire {
    status: String,
}

/// Query `{base_url}/health` and require `status == "ok"`.
///
/// Blocking call intended for a worker thread.
pub fn check_health(endpoint: &EndpointConfig) -> Result<(), HealthError> {
    let url = endpoint.health_url();
    let response = match http_client::agent().get(&url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => return Err(HealthError::Status(code)),
        Err(ureq::Error::Transport(err)) => {
            return Err(HealthError::Transport(err.to_string()));
        }
    };

    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
        .map_err(|err| HealthError::Invalid(err.to_string()))?;
    parse_health_body(&bytes)
}

fn parse_health_body(bytes: &[u8]) -> Result<(), HealthError> {
    let parsed: HealthWire =
        serde_json::from_slice(bytes).map_err(|err| HealthError::Invalid(err.to_string()))?;
    if parsed.status == "ok" {
        Ok(())
    } else {
        Err(HealthError::Invalid(format!(
            "Unexpected status '{}'",
            parsed.status
        )))
    }
}
