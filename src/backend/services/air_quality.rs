//! Locality readings, the AQI severity scale, and the reading store.

use std::fmt;

use chrono::{DateTime, Local};
use serde::Deserialize;
use serde_json::Value;

use crate::backend::services::sensor_api::{ApiError, SensorFeed};

/// Shown when no locality carries a numeric AQI value.
pub const NO_DATA_LABEL: &str = "No data";

/// Raw record as served by `GET /sensor-data`.
///
/// Numeric fields arrive as numbers or strings depending on the sensor
/// backend; `average_aqi` uses the string sentinel `"-"` for localities
/// without a current measurement.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSensorRecord {
    pub locality_name: String,
    #[serde(default)]
    pub average_aqi: Value,
    #[serde(default)]
    pub average_humidity: Value,
    #[serde(default)]
    pub average_temperature: Value,
}

/// A locality with a valid, displayable reading.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalityReading {
    pub name: String,
    pub aqi: f64,
    pub humidity: String,
    pub temperature: String,
}

impl LocalityReading {
    /// Converts a raw record, dropping it when the AQI is the `"-"`
    /// sentinel or otherwise non-numeric.
    pub fn from_raw(record: RawSensorRecord) -> Option<Self> {
        let aqi = numeric_value(&record.average_aqi)?;
        Some(Self {
            name: record.locality_name,
            aqi,
            humidity: format!("{}%", scalar_text(&record.average_humidity)),
            temperature: format!("{}°C", scalar_text(&record.average_temperature)),
        })
    }
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => "-".to_string(),
    }
}

/// Maps raw records to readings, dropping the invalid ones.
pub fn collect_readings(records: Vec<RawSensorRecord>) -> Vec<LocalityReading> {
    records
        .into_iter()
        .filter_map(LocalityReading::from_raw)
        .collect()
}

/// Severity bands of the AQI scale. Band upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiBand {
    Good,
    Moderate,
    SensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiBand {
    pub fn classify(aqi: f64) -> Self {
        if aqi <= 50.0 {
            Self::Good
        } else if aqi <= 100.0 {
            Self::Moderate
        } else if aqi <= 150.0 {
            Self::SensitiveGroups
        } else if aqi <= 200.0 {
            Self::Unhealthy
        } else if aqi <= 300.0 {
            Self::VeryUnhealthy
        } else {
            Self::Hazardous
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::SensitiveGroups => "Unhealthy for sensitive groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AqiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Band of the mean AQI across the readings, or `None` with no readings.
pub fn overall_band(readings: &[LocalityReading]) -> Option<AqiBand> {
    if readings.is_empty() {
        return None;
    }
    let total: f64 = readings.iter().map(|reading| reading.aqi).sum();
    Some(AqiBand::classify(total / readings.len() as f64))
}

/// In-memory store of the latest locality readings.
///
/// Owned by a single consumer: the UI wraps one in a signal, the probe
/// binary holds one on the stack. Readings are replaced wholesale by a
/// successful fetch and survive failed ones.
#[derive(Debug, Default)]
pub struct AirQualityStore {
    localities: Vec<LocalityReading>,
    last_updated: Option<DateTime<Local>>,
    last_error: Option<String>,
}

impl AirQualityStore {
    pub fn localities(&self) -> &[LocalityReading] {
        &self.localities
    }

    pub fn is_populated(&self) -> bool {
        !self.localities.is_empty()
    }

    /// Time of the last successful fetch.
    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    /// Most recent fetch error, cleared by the next successful fetch.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Label for the mean AQI of the stored readings.
    pub fn overall_air_quality(&self) -> &'static str {
        overall_band(&self.localities).map_or(NO_DATA_LABEL, AqiBand::label)
    }

    /// Replaces the stored readings wholesale.
    pub fn apply(&mut self, records: Vec<RawSensorRecord>) -> usize {
        let readings = collect_readings(records);
        log::debug!("Stored {} locality readings", readings.len());
        self.localities = readings;
        self.last_updated = Some(Local::now());
        self.last_error = None;
        self.localities.len()
    }

    /// Records a failed fetch. The stored readings stay as they were.
    pub fn record_failure(&mut self, err: &ApiError) {
        log::warn!("Failed to fetch sensor data: {err}");
        self.last_error = Some(err.to_string());
    }

    /// Fetches once; a no-op once the store holds readings.
    pub async fn fetch<F: SensorFeed>(&mut self, feed: &F) -> Result<usize, ApiError> {
        if self.is_populated() {
            return Ok(self.localities.len());
        }
        self.refresh(feed).await
    }

    /// Unconditionally refetches and replaces the stored readings.
    pub async fn refresh<F: SensorFeed>(&mut self, feed: &F) -> Result<usize, ApiError> {
        match feed.fetch_sensor_data().await {
            Ok(records) => Ok(self.apply(records)),
            Err(err) => {
                self.record_failure(&err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    fn record(name: &str, aqi: Value) -> RawSensorRecord {
        RawSensorRecord {
            locality_name: name.to_string(),
            average_aqi: aqi,
            average_humidity: json!(48),
            average_temperature: json!(21.5),
        }
    }

    fn reading(name: &str, aqi: f64) -> LocalityReading {
        LocalityReading {
            name: name.to_string(),
            aqi,
            humidity: "48%".to_string(),
            temperature: "21.5°C".to_string(),
        }
    }

    /// Feed that pops pre-scripted outcomes and counts its calls.
    struct ScriptedFeed {
        calls: RefCell<usize>,
        outcomes: RefCell<Vec<Result<Vec<RawSensorRecord>, ApiError>>>,
    }

    impl ScriptedFeed {
        fn new(outcomes: Vec<Result<Vec<RawSensorRecord>, ApiError>>) -> Self {
            Self {
                calls: RefCell::new(0),
                outcomes: RefCell::new(outcomes),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.borrow()
        }
    }

    impl SensorFeed for ScriptedFeed {
        async fn fetch_sensor_data(&self) -> Result<Vec<RawSensorRecord>, ApiError> {
            *self.calls.borrow_mut() += 1;
            self.outcomes.borrow_mut().remove(0)
        }
    }

    #[test]
    fn non_numeric_aqi_records_are_dropped() {
        let readings = collect_readings(vec![
            record("Centro", json!(72)),
            record("Norte", json!("-")),
            record("Sur", json!(null)),
            record("Este", json!("offline")),
            record("Oeste", json!("34")),
        ]);

        let names: Vec<&str> = readings.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Centro", "Oeste"]);
        assert_eq!(readings[1].aqi, 34.0);
    }

    #[test]
    fn readings_carry_suffixed_humidity_and_temperature() {
        let readings = collect_readings(vec![record("Centro", json!(72))]);
        assert_eq!(readings[0].humidity, "48%");
        assert_eq!(readings[0].temperature, "21.5°C");
    }

    #[test]
    fn overall_label_on_empty_store_is_no_data() {
        let store = AirQualityStore::default();
        assert_eq!(store.overall_air_quality(), NO_DATA_LABEL);
    }

    #[test]
    fn mean_of_forty_and_sixty_is_good() {
        let readings = [reading("A", 40.0), reading("B", 60.0)];
        assert_eq!(overall_band(&readings), Some(AqiBand::Good));
    }

    #[test]
    fn band_upper_bounds_are_inclusive() {
        assert_eq!(AqiBand::classify(50.0), AqiBand::Good);
        assert_eq!(AqiBand::classify(50.1), AqiBand::Moderate);
        assert_eq!(AqiBand::classify(100.0), AqiBand::Moderate);
        assert_eq!(AqiBand::classify(150.0), AqiBand::SensitiveGroups);
        assert_eq!(AqiBand::classify(200.0), AqiBand::Unhealthy);
        assert_eq!(AqiBand::classify(300.0), AqiBand::VeryUnhealthy);
        assert_eq!(AqiBand::classify(300.5), AqiBand::Hazardous);
    }

    #[tokio::test]
    async fn fetch_is_idempotent_once_populated() {
        let feed = ScriptedFeed::new(vec![
            Ok(vec![record("Centro", json!(72))]),
            Ok(vec![record("Norte", json!(10))]),
        ]);
        let mut store = AirQualityStore::default();

        assert_eq!(store.fetch(&feed).await.unwrap(), 1);
        assert_eq!(store.fetch(&feed).await.unwrap(), 1);
        assert_eq!(feed.calls(), 1);
        assert_eq!(store.localities()[0].name, "Centro");
    }

    #[tokio::test]
    async fn fetch_retries_while_the_store_stays_empty() {
        // An empty result array leaves the store unpopulated, so the
        // guard does not engage.
        let feed = ScriptedFeed::new(vec![Ok(vec![]), Ok(vec![record("Centro", json!(72))])]);
        let mut store = AirQualityStore::default();

        assert_eq!(store.fetch(&feed).await.unwrap(), 0);
        assert_eq!(store.fetch(&feed).await.unwrap(), 1);
        assert_eq!(feed.calls(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_preserves_readings_and_records_the_error() {
        let feed = ScriptedFeed::new(vec![
            Ok(vec![record("Centro", json!(72))]),
            Err(ApiError::Status(500)),
        ]);
        let mut store = AirQualityStore::default();

        store.fetch(&feed).await.unwrap();
        let before = store.localities().to_vec();

        assert!(store.refresh(&feed).await.is_err());
        assert_eq!(store.localities(), before.as_slice());
        assert!(store.last_error().unwrap().contains("500"));
    }

    #[tokio::test]
    async fn successful_refresh_clears_a_previous_error() {
        let feed = ScriptedFeed::new(vec![
            Err(ApiError::Status(502)),
            Ok(vec![record("Centro", json!(72))]),
        ]);
        let mut store = AirQualityStore::default();

        assert!(store.fetch(&feed).await.is_err());
        assert!(store.last_error().is_some());

        store.refresh(&feed).await.unwrap();
        assert!(store.last_error().is_none());
        assert!(store.last_updated().is_some());
    }
}
