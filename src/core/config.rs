//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::settings::{DEFAULT_SITE_NAME, EffectSettings, SiteSettings};

/// Default `tracing` filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a boolean (true/false/1/0/yes/no/on/off), got {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Site name shown in the page title
    /// Example: PlantGift
    pub site_name: String,

    /// `tracing` filter used when `RUST_LOG` is not set
    /// Example: info,plantgift=debug
    pub log_filter: String,

    /// Serve responses with br/gzip compression
    pub compression: bool,

    /// Forms post here instead of simulating delivery
    /// Example: https://api.plantgift.example/forms
    pub submit_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let compression = match lookup("PLANTGIFT_COMPRESSION") {
            Some(value) => parse_bool("PLANTGIFT_COMPRESSION", &value)?,
            None => true,
        };

        Ok(Self {
            site_name: lookup("PLANTGIFT_SITE_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            log_filter: lookup("PLANTGIFT_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            compression,
            submit_endpoint: lookup("PLANTGIFT_SUBMIT_ENDPOINT")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        })
    }

    /// Settings handed to the rendered page
    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            site_name: self.site_name.clone(),
            effects: EffectSettings {
                submit_endpoint: self.submit_endpoint.clone(),
                ..EffectSettings::default()
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
            submit_endpoint: None,
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.compression);
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup(&[
            ("PLANTGIFT_SITE_NAME", "Green Gifts"),
            ("PLANTGIFT_LOG", "debug"),
            ("PLANTGIFT_COMPRESSION", "off"),
        ]))
        .unwrap();

        assert_eq!(config.site_name, "Green Gifts");
        assert_eq!(config.log_filter, "debug");
        assert!(!config.compression);
    }

    #[test]
    fn test_site_settings_carry_name_and_endpoint() {
        let config = Config::from_lookup(lookup(&[
            ("PLANTGIFT_SITE_NAME", "Green Gifts"),
            ("PLANTGIFT_SUBMIT_ENDPOINT", " https://api.example.org/forms/ "),
        ]))
        .unwrap();

        let site = config.site_settings();
        assert_eq!(site.site_name, "Green Gifts");
        assert_eq!(
            site.effects.submit_endpoint.as_deref(),
            Some("https://api.example.org/forms")
        );
        assert!(site.effects.animations);
    }

    #[test]
    fn test_blank_endpoint_keeps_simulated_delivery() {
        let config = Config::from_lookup(lookup(&[("PLANTGIFT_SUBMIT_ENDPOINT", "  ")])).unwrap();
        assert_eq!(config.submit_endpoint, None);
        assert_eq!(config.site_settings().effects.submit_endpoint, None);
    }

    #[test]
    fn test_blank_site_name_falls_back() {
        let config = Config::from_lookup(lookup(&[("PLANTGIFT_SITE_NAME", "  ")])).unwrap();
        assert_eq!(config.site_name, DEFAULT_SITE_NAME);
    }

    #[test]
    fn test_invalid_bool_is_an_error() {
        let err = Config::from_lookup(lookup(&[("PLANTGIFT_COMPRESSION", "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                key: "PLANTGIFT_COMPRESSION",
                value: "maybe".to_string()
            }
        );
        assert!(err.to_string().contains("PLANTGIFT_COMPRESSION"));
    }

    #[test]
    fn test_bool_spellings() {
        for (raw, expected) in [("TRUE", true), (" yes ", true), ("0", false), ("Off", false)] {
            assert_eq!(parse_bool("K", raw), Ok(expected));
        }
    }
}
