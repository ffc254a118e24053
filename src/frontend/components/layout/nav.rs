//! Top navigation bar.

use crate::backend::utils::config::RuntimeConfig;
use crate::frontend::app::Route;
use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

#[component]
pub fn Navigation() -> Element {
    let nav = navigator();
    let auth = use_context::<AuthState>();
    let config = use_context::<RuntimeConfig>();
    let route = use_route::<Route>();

    let signed_in = (auth.is_authenticated)();
    let on_dashboard = matches!(route, Route::Dashboard {});

    rsx! {
        nav {
            class: "navigation",
            style: "display: flex; align-items: center; gap: 16px; padding: 12px 24px; border-bottom: 1px solid #444;",
            span {
                class: "brand",
                style: "font-weight: bold; margin-right: auto; cursor: pointer;",
                onclick: move |_| { nav.push("/"); },
                "AireView"
            }
            if signed_in {
                ul {
                    class: "nav-items",
                    style: "display: flex; gap: 16px; list-style: none; margin: 0;",
                    li {
                        class: if on_dashboard { "nav-item active" } else { "nav-item" },
                        onclick: move |_| { nav.push("/dashboard"); },
                        "Dashboard"
                    }
                    li {
                        class: "nav-item",
                        onclick: move |_| {
                            let map_url = config.map_url.clone();
                            if map_url.is_empty() {
                                log::warn!("No map URL configured");
                            } else if let Err(e) = webbrowser::open(&map_url) {
                                log::warn!("Failed to open the map: {e}");
                            }
                        },
                        "Map"
                    }
                    li {
                        class: "nav-item",
                        onclick: move |_| {
                            let mut auth = auth;
                            spawn(async move {
                                auth.logout().await;
                                nav.replace("/");
                            });
                        },
                        "Sign out"
                    }
                }
            } else {
                ul {
                    class: "nav-items",
                    style: "display: flex; gap: 16px; list-style: none; margin: 0;",
                    li {
                        class: "nav-item",
                        onclick: move |_| { nav.push("/information/prueba"); },
                        "About the index"
                    }
                    li {
                        class: "nav-item",
                        onclick: move |_| { nav.push("/auth"); },
                        "Sign in"
                    }
                }
            }
        }
    }
}
