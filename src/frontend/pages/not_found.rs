//! Fallback page for unknown paths.

use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = navigator();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section {
            class: "not-found",
            style: "margin-top: 10vh; text-align: center;",
            h1 { "Page not found" }
            p { "There is nothing at {path}." }
            button {
                onclick: move |_| { nav.replace("/"); },
                "Back to the start"
            }
        }
    }
}
