//! HTTP client for the sensor data API.

use std::fmt;
use std::time::Duration;

use crate::backend::services::air_quality::RawSensorRecord;
use crate::backend::utils::config::RuntimeConfig;

/// Upper bound on a single request. A hung request must not outlive the
/// refresh period.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

const USER_AGENT: &str = concat!("AireView/", env!("CARGO_PKG_VERSION"));

/// Failure modes of a sensor fetch.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure: DNS, connect, timeout.
    Request(String),
    /// The endpoint answered with a non-success status.
    Status(u16),
    /// The response body was not a valid sensor record array.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(message) => write!(f, "Request failed: {message}"),
            Self::Status(code) => write!(f, "Sensor API responded with status {code}"),
            Self::Decode(message) => write!(f, "Invalid sensor data: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// A source of raw sensor records.
///
/// The production implementation is [`SensorClient`]; tests substitute
/// scripted feeds.
#[allow(async_fn_in_trait)]
pub trait SensorFeed {
    async fn fetch_sensor_data(&self) -> Result<Vec<RawSensorRecord>, ApiError>;
}

/// Client for the remote sensor API.
#[derive(Clone)]
pub struct SensorClient {
    http: reqwest::Client,
    base_url: String,
}

impl SensorClient {
    pub fn new(config: &RuntimeConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: config.api_url.clone(),
        }
    }

    /// Full URL of the sensor data endpoint.
    pub fn sensor_data_url(&self) -> String {
        format!("{}/sensor-data", self.base_url.trim_end_matches('/'))
    }
}

impl SensorFeed for SensorClient {
    async fn fetch_sensor_data(&self) -> Result<Vec<RawSensorRecord>, ApiError> {
        let url = self.sensor_data_url();
        log::debug!("Requesting sensor data from {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> SensorClient {
        SensorClient::new(&RuntimeConfig {
            api_url: base.to_string(),
            map_url: String::new(),
        })
    }

    #[test]
    fn sensor_data_url_is_base_plus_endpoint() {
        assert_eq!(client_for("http://x").sensor_data_url(), "http://x/sensor-data");
    }

    #[test]
    fn trailing_slash_in_base_does_not_double() {
        assert_eq!(
            client_for("http://sensors.example/").sensor_data_url(),
            "http://sensors.example/sensor-data"
        );
    }

    #[test]
    fn status_errors_carry_the_code() {
        assert_eq!(
            ApiError::Status(503).to_string(),
            "Sensor API responded with status 503"
        );
    }
}
