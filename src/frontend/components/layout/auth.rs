//! Centered container for the sign-in and registration pages.

use dioxus::prelude::*;

#[component]
pub fn AuthLayout(children: Element) -> Element {
    rsx! {
        div {
            class: "auth-container",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px; min-height: 60vh;",
            {children}
        }
    }
}
