//! Public information page about the AQI scale.

use crate::backend::services::air_quality::AqiBand;
use dioxus::prelude::*;

const SCALE: &[(&str, AqiBand)] = &[
    ("0 – 50", AqiBand::Good),
    ("51 – 100", AqiBand::Moderate),
    ("101 – 150", AqiBand::SensitiveGroups),
    ("151 – 200", AqiBand::Unhealthy),
    ("201 – 300", AqiBand::VeryUnhealthy),
    ("301+", AqiBand::Hazardous),
];

#[component]
pub fn Information() -> Element {
    rsx! {
        section {
            class: "information",
            h1 { "About the air quality index" }
            p {
                "Each monitored locality reports an Air Quality Index (AQI), "
                "a numeric severity score aggregated from its sensors. The "
                "dashboard averages the current readings and describes the "
                "result on the following scale."
            }
            table {
                class: "aqi-scale",
                style: "border-collapse: collapse; margin-top: 16px;",
                thead {
                    tr {
                        th { "Mean AQI" }
                        th { "Severity" }
                    }
                }
                tbody {
                    for (index, (range, band)) in SCALE.iter().enumerate() {
                        tr {
                            key: "{index}",
                            td { "{range}" }
                            td { "{band}" }
                        }
                    }
                }
            }
        }
    }
}
