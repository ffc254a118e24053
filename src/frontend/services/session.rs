//! Session token persistence.
//!
//! The token is an opaque string; its presence in the application data
//! directory is what marks a session as signed in. The sensor API never
//! verifies it.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

use crate::backend::utils::paths::get_app_dir;

const TOKEN_FILE: &str = "session_token.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
    pub created_at: DateTime<Local>,
}

impl SessionToken {
    /// Issues a fresh local token for the given account name.
    pub fn issue(username: &str) -> Self {
        let created_at = Local::now();
        let token = format!("{username}:{}", created_at.timestamp_millis());
        Self { token, created_at }
    }

    /// Where the token lives on disk, or `None` when no application data
    /// directory can be resolved. Without storage every session reads as
    /// signed out.
    fn storage_path() -> Option<PathBuf> {
        get_app_dir().ok().map(|dir| dir.join(TOKEN_FILE))
    }

    /// Saves the token to disk.
    pub async fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let Some(path) = Self::storage_path() else {
            return Err("No application data directory available".into());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;

        Ok(())
    }

    /// Loads the stored token, if any. Absent or unreadable storage both
    /// read as "no session".
    pub async fn load() -> Option<Self> {
        let path = Self::storage_path()?;

        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path).await {
            Ok(json) => serde_json::from_str(&json).ok(),
            Err(_) => None,
        }
    }

    /// Deletes the stored token.
    pub async fn delete() {
        if let Some(path) = Self::storage_path()
            && path.exists()
        {
            let _ = fs::remove_file(path).await;
        }
    }
}
