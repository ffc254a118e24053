//! Core services.

pub mod air_quality;
pub mod sensor_api;

pub use air_quality::{AirQualityStore, AqiBand, LocalityReading, RawSensorRecord};
pub use sensor_api::{ApiError, SensorClient, SensorFeed};
