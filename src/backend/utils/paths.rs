//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the application data directory.
const APP_DIR: &str = "AireView";

/// Get the base application data directory (`AireView`).
#[inline]
pub fn get_app_dir() -> Result<PathBuf> {
    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA").ok().map(PathBuf::from),
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support")),
        _ => std::env::var("HOME").ok().map(PathBuf::from),
    };

    base_dir
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| anyhow::anyhow!("Could not determine the application data directory"))
}
