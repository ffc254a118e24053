//! Public landing page.

use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn Home() -> Element {
    let nav = navigator();
    let auth = use_context::<AuthState>();

    rsx! {
        section {
            class: "landing",
            style: "display: flex; flex-direction: column; align-items: center; gap: 16px; margin-top: 10vh; text-align: center;",
            h1 { "AireView" }
            p { "Live air-quality readings for the monitored localities." }
            div {
                class: "landing-actions",
                style: "display: flex; gap: 12px;",
                if (auth.is_authenticated)() {
                    button {
                        onclick: move |_| { nav.push("/dashboard"); },
                        "Open the dashboard"
                    }
                } else {
                    button {
                        onclick: move |_| { nav.push("/auth"); },
                        "Sign in"
                    }
                    button {
                        onclick: move |_| { nav.push("/auth/register"); },
                        "Create an account"
                    }
                }
            }
        }
    }
}
