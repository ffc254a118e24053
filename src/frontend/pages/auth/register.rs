//! Registration page.

use crate::frontend::components::layout::AuthLayout;
use crate::frontend::services::context::AuthState;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = use_callback(move |_: ()| {
        let username_value = username.read().clone();
        let password_value = password.read().clone();
        let confirm_value = confirm.read().clone();
        let mut auth = auth;

        spawn(async move {
            match auth
                .register(username_value, password_value, confirm_value)
                .await
            {
                Ok(()) => {
                    nav.push("/dashboard");
                }
                Err(message) => error.set(Some(message)),
            }
        });
    });

    rsx! {
        AuthLayout {
            h1 { class: "auth-title", "Create an account" }
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
            }
            input {
                class: "auth-input",
                r#type: "password",
                placeholder: "Repeat the password",
                value: "{confirm()}",
                oninput: move |e| {
                    confirm.set(e.value());
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
                "Register"
            }
            if let Some(message) = error() {
                div { class: "error-message", "{message}" }
            }
            button {
                class: "auth-link",
                onclick: move |_| { nav.push("/auth"); },
                "Back to sign in"
            }
        }
    }
}
