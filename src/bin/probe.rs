//! Headless probe: fetches the sensor data once and prints the readings.
//! Useful for checking an endpoint without starting the window.

use aireview::backend::services::{AirQualityStore, SensorClient};
use aireview::backend::utils::config::{API_URL_VAR, RuntimeConfig};
use anyhow::{Context, Result, bail};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = RuntimeConfig::from_env();
    if config.api_url.is_empty() {
        bail!("{API_URL_VAR} is not set");
    }

    let client = SensorClient::new(&config);
    let mut store = AirQualityStore::default();

    store
        .fetch(&client)
        .await
        .context("fetching sensor data")?;

    for reading in store.localities() {
        println!(
            "{:<24} AQI {:>6.1}  humidity {:>8}  temperature {:>8}",
            reading.name, reading.aqi, reading.humidity, reading.temperature
        );
    }
    println!("Overall air quality: {}", store.overall_air_quality());

    Ok(())
}
