//! Reactive air-quality store shared through component context.
//!
//! The plain [`AirQualityStore`] holds the data; this module wraps it in
//! signals, adds the periodic refresh task, and keeps overlapping
//! requests from racing each other.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use tokio::time::sleep;

use crate::backend::services::air_quality::{AirQualityStore, LocalityReading};
use crate::backend::services::sensor_api::{ApiError, SensorClient, SensorFeed};
use crate::backend::utils::config::RuntimeConfig;

/// Period between automatic refreshes.
pub const UPDATE_PERIOD: Duration = Duration::from_secs(30);

/// Handle to a running auto-update task.
#[derive(Clone, Copy)]
pub struct AutoUpdateHandle {
    task: Task,
}

impl AutoUpdateHandle {
    /// Stops the periodic refresh. Stored readings stay as they are.
    pub fn stop(self) {
        self.task.cancel();
    }
}

struct ClearInFlight(Signal<bool>);

impl Drop for ClearInFlight {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Shared store handle injected at the application root.
#[derive(Clone, Copy)]
pub struct AirQuality {
    store: Signal<AirQualityStore>,
    client: Signal<SensorClient>,
    in_flight: Signal<bool>,
}

/// Creates the store and injects it into context. Called once from the
/// application root.
pub fn use_air_quality_provider(config: &RuntimeConfig) -> AirQuality {
    let client = use_signal({
        let config = config.clone();
        move || SensorClient::new(&config)
    });
    let store = use_signal(AirQualityStore::default);
    let in_flight = use_signal(|| false);

    use_context_provider(|| AirQuality {
        store,
        client,
        in_flight,
    })
}

/// Accessor for pages below the root.
pub fn use_air_quality() -> AirQuality {
    use_context()
}

impl AirQuality {
    /// Guarded fetch: a no-op once readings are present.
    pub async fn fetch(&mut self) -> Result<usize, ApiError> {
        if self.store.peek().is_populated() {
            let count = self.store.peek().localities().len();
            return Ok(count);
        }
        self.refresh().await
    }

    /// Unconditional refresh. A tick that would overlap a still-running
    /// request is skipped rather than queued.
    pub async fn refresh(&mut self) -> Result<usize, ApiError> {
        if *self.in_flight.peek() {
            log::debug!("Skipping refresh, previous request still in flight");
            let count = self.store.peek().localities().len();
            return Ok(count);
        }

        self.in_flight.set(true);
        // Reset on drop so a cancelled task cannot leave the flag stuck
        let _clear = ClearInFlight(self.in_flight);
        let client = self.client.peek().clone();
        let outcome = client.fetch_sensor_data().await;
        drop(_clear);

        let mut store = self.store.write();
        match outcome {
            Ok(records) => Ok(store.apply(records)),
            Err(err) => {
                store.record_failure(&err);
                Err(err)
            }
        }
    }

    /// Starts the periodic refresh: one immediate fetch, then a refetch
    /// every [`UPDATE_PERIOD`] until the handle is stopped.
    pub fn start_auto_update(&self) -> AutoUpdateHandle {
        let mut this = *self;
        let task = spawn(async move {
            let _ = this.fetch().await;
            loop {
                sleep(UPDATE_PERIOD).await;
                let _ = this.refresh().await;
            }
        });

        AutoUpdateHandle { task }
    }

    pub fn localities(&self) -> Vec<LocalityReading> {
        self.store.read().localities().to_vec()
    }

    pub fn overall_air_quality(&self) -> &'static str {
        self.store.read().overall_air_quality()
    }

    /// Wall-clock time of the last successful fetch, for the header line.
    pub fn last_updated_text(&self) -> Option<String> {
        self.store
            .read()
            .last_updated()
            .map(|time| time.format("%H:%M:%S").to_string())
    }

    pub fn last_error(&self) -> Option<String> {
        self.store.read().last_error().map(str::to_string)
    }
}
