//! Sign-in page.

use crate::frontend::components::layout::AuthLayout;
use crate::frontend::services::context::AuthState;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;

#[component]
pub fn Auth() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    // Already signed in: go straight to the dashboard
    use_effect(move || {
        if (auth.is_authenticated)() {
            nav.replace("/dashboard");
        }
    });

    let submit = use_callback(move |_: ()| {
        let username_value = username.read().clone();
        let password_value = password.read().clone();
        let mut auth = auth;

        spawn(async move {
            match auth.login(username_value, password_value).await {
                Ok(()) => {
                    nav.push("/dashboard");
                }
                Err(message) => error.set(Some(message)),
            }
        });
    });

    rsx! {
        AuthLayout {
            h1 { class: "auth-title", "Sign in" }
            input {
                class: "auth-input",
                r#type: "text",
                placeholder: "Username",
                value: "{username()}",
                oninput: move |e| {
                    username.set(e.value());
                    error.set(None);
                },
            }
            input {
                class: "auth-input",
                r#type: "password",
                placeholder: "Password",
                value: "{password()}",
                oninput: move |e| {
                    password.set(e.value());
                    error.set(None);
                },
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        submit.call(());
                    }
                },
            }
            button {
                class: "auth-submit",
                onclick: move |_| submit.call(()),
                "Sign in"
            }
            if let Some(message) = error() {
                div { class: "error-message", "{message}" }
            }
            button {
                class: "auth-link",
                onclick: move |_| { nav.push("/auth/register"); },
                "Create an account"
            }
        }
    }
}
