//! Runtime configuration sourced from the process environment.

use std::env;

/// Environment variable holding the base URL of the sensor API.
pub const API_URL_VAR: &str = "AIREVIEW_API_URL";

/// Environment variable holding the external map URL.
pub const MAP_URL_VAR: &str = "AIREVIEW_MAP_URL";

/// URLs the application is wired to at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_url: String,
    pub map_url: String,
}

impl RuntimeConfig {
    /// Reads the configuration from the environment. Missing variables
    /// default to empty strings; an empty API URL makes every fetch fail
    /// instead of aborting startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: lookup(API_URL_VAR).unwrap_or_default(),
            map_url: lookup(MAP_URL_VAR).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_default_to_empty() {
        let config = RuntimeConfig::from_lookup(|_| None);
        assert_eq!(config, RuntimeConfig::default());
        assert!(config.api_url.is_empty());
    }

    #[test]
    fn reads_both_urls_from_the_environment() {
        let config = RuntimeConfig::from_lookup(|name| match name {
            API_URL_VAR => Some("http://sensors.example".to_string()),
            MAP_URL_VAR => Some("http://map.example".to_string()),
            _ => None,
        });
        assert_eq!(config.api_url, "http://sensors.example");
        assert_eq!(config.map_url, "http://map.example");
    }
}
