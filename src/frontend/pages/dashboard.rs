//! Readings dashboard.
//!
//! Starts the periodic refresh when the page mounts and stops it when
//! the page is left; the pause button drives the same handle.

use crate::frontend::services::air_quality::{AutoUpdateHandle, use_air_quality};
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let air = use_air_quality();
    let mut handle = use_signal(|| None::<AutoUpdateHandle>);

    use_effect(move || {
        if handle.peek().is_none() {
            handle.set(Some(air.start_auto_update()));
        }
    });

    use_drop(move || {
        if let Some(task) = *handle.peek() {
            task.stop();
        }
    });

    let localities = air.localities();
    let overall = air.overall_air_quality();
    let updated = air.last_updated_text();
    let error = air.last_error();
    let paused = handle.read().is_none();

    rsx! {
        section {
            class: "dashboard",
            header {
                class: "dashboard-header",
                style: "display: flex; align-items: baseline; gap: 16px; flex-wrap: wrap;",
                h1 { "Air quality" }
                span { class: "overall-label", "Overall: {overall}" }
                if let Some(updated) = updated {
                    span { class: "updated-at", "Updated at {updated}" }
                }
                button {
                    class: "pause-button",
                    onclick: move |_| {
                        let current = *handle.peek();
                        if let Some(task) = current {
                            task.stop();
                            handle.set(None);
                        } else {
                            handle.set(Some(air.start_auto_update()));
                        }
                    },
                    if paused { "Resume updates" } else { "Pause updates" }
                }
            }
            if let Some(error) = error {
                div {
                    class: "fetch-error",
                    style: "color: #c0392b; margin: 8px 0;",
                    "Could not refresh the readings: {error}"
                }
            }
            if localities.is_empty() {
                p { class: "empty-hint", "No readings yet." }
            } else {
                table {
                    class: "readings",
                    style: "border-collapse: collapse; margin-top: 16px;",
                    thead {
                        tr {
                            th { "Locality" }
                            th { "AQI" }
                            th { "Humidity" }
                            th { "Temperature" }
                        }
                    }
                    tbody {
                        for (index, reading) in localities.iter().enumerate() {
                            tr {
                                key: "{index}",
                                td { "{reading.name}" }
                                td { "{reading.aqi}" }
                                td { "{reading.humidity}" }
                                td { "{reading.temperature}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
