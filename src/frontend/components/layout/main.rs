//! Application shell around the routed pages.

use crate::frontend::app::Route;
use crate::frontend::components::layout::Navigation;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;

#[component]
pub fn Layout() -> Element {
    rsx! {
        div {
            class: "app-shell",
            style: "display: flex; flex-direction: column; min-height: 100vh;",
            Navigation {}
            main {
                class: "page-content",
                style: "flex: 1; padding: 24px;",
                Outlet::<Route> {}
            }
        }
    }
}
