//! Authentication context and state management.

use dioxus::prelude::*;

use crate::frontend::services::session::SessionToken;

#[derive(Clone, Copy)]
pub struct AuthState {
    pub is_authenticated: Signal<bool>,
}

impl AuthState {
    /// Restores a previously saved session, if one is stored.
    pub async fn restore(&mut self) {
        if SessionToken::load().await.is_some() {
            self.is_authenticated.set(true);
        }
    }

    /// Signs in and stores a session token.
    pub async fn login(&mut self, username: String, password: String) -> Result<(), String> {
        let username = username.trim().to_string();
        if username.is_empty() || password.is_empty() {
            return Err("Enter a username and a password".to_string());
        }

        self.store_session(&username).await
    }

    /// Registers a new account and stores a session token.
    pub async fn register(
        &mut self,
        username: String,
        password: String,
        confirm: String,
    ) -> Result<(), String> {
        let username = username.trim().to_string();
        if username.is_empty() || password.is_empty() {
            return Err("Enter a username and a password".to_string());
        }
        if password != confirm {
            return Err("Passwords do not match".to_string());
        }

        self.store_session(&username).await
    }

    /// Signs out and deletes the stored token.
    pub async fn logout(&mut self) {
        self.is_authenticated.set(false);
        SessionToken::delete().await;
    }

    async fn store_session(&mut self, username: &str) -> Result<(), String> {
        let token = SessionToken::issue(username);
        token
            .save()
            .await
            .map_err(|e| format!("Failed to store the session token: {e}"))?;

        self.is_authenticated.set(true);
        log::info!("Session opened for {username}");

        Ok(())
    }
}
