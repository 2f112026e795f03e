//! Site name and the tunable timings of the client-side effects

use serde::{Deserialize, Serialize};

use super::animation::{INITIAL_LEAF_COUNT, LEAF_REFRESH_INTERVAL_MS};
use super::notification::DEFAULT_NOTIFICATION_MS;
use super::rate_limit::{DEFAULT_DEBOUNCE_MS, DEFAULT_THROTTLE_MS};
use super::submission::{FAILURE_RATE, SUBMIT_DELAY_MS};

/// Default site name used in the page title
pub const DEFAULT_SITE_NAME: &str = "PlantGift";

/// `<meta name>` carrying the serialized [`SiteSettings`] from the server
/// render to the hydrated client
pub const SETTINGS_META: &str = "plantgift-settings";

/// Offset applied by `SiteHelpers::smooth_scroll_to` for the fixed navbar
pub const HELPER_SCROLL_OFFSET: f64 = 100.0;

/// Default duration of `SiteHelpers::smooth_scroll_to`
pub const HELPER_SCROLL_MS: f64 = 1_000.0;

/// Delay before `page-loaded` is added to `<body>`
pub const PAGE_LOADED_DELAY_MS: u32 = 100;

/// Fake fetch time of the load-more button
pub const LOAD_MORE_DELAY_MS: u32 = 1_500;

/// Client effect settings, provided through context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    /// Run the decorative animation controller
    pub animations: bool,
    /// Run parallax and floating-layer updates on scroll
    pub parallax: bool,
    pub initial_leaf_count: usize,
    pub leaf_refresh_interval_ms: u32,
    pub notification_ms: u32,
    pub scroll_offset: f64,
    pub scroll_duration_ms: f64,
    pub throttle_ms: f64,
    pub email_debounce_ms: f64,
    pub page_loaded_delay_ms: u32,
    pub load_more_delay_ms: u32,
    pub submit_delay_ms: u32,
    pub failure_rate: f64,
    /// Post forms to `{endpoint}/{form}` instead of simulating delivery
    pub submit_endpoint: Option<String>,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            animations: true,
            parallax: true,
            initial_leaf_count: INITIAL_LEAF_COUNT,
            leaf_refresh_interval_ms: LEAF_REFRESH_INTERVAL_MS,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            scroll_offset: HELPER_SCROLL_OFFSET,
            scroll_duration_ms: HELPER_SCROLL_MS,
            throttle_ms: DEFAULT_THROTTLE_MS,
            email_debounce_ms: DEFAULT_DEBOUNCE_MS,
            page_loaded_delay_ms: PAGE_LOADED_DELAY_MS,
            load_more_delay_ms: LOAD_MORE_DELAY_MS,
            submit_delay_ms: SUBMIT_DELAY_MS,
            failure_rate: FAILURE_RATE,
            submit_endpoint: None,
        }
    }
}

impl EffectSettings {
    /// Turn off every decorative effect. Forms and notifications keep their timings.
    pub fn without_motion(self) -> Self {
        Self {
            animations: false,
            parallax: false,
            scroll_duration_ms: 0.0,
            ..self
        }
    }
}

/// Everything the page needs from the server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub site_name: String,
    pub effects: EffectSettings,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            effects: EffectSettings::default(),
        }
    }
}

impl SiteSettings {
    /// Read the settings embedded in the page. Missing or malformed
    /// content falls back to the defaults.
    pub fn from_meta(content: Option<&str>) -> Self {
        content
            .and_then(|json| serde_json::from_str(json).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: EffectSettings =
            serde_json::from_str(r#"{"parallax": false, "notification_ms": 0}"#).unwrap();
        assert!(!settings.parallax);
        assert_eq!(settings.notification_ms, 0);
        assert_eq!(settings.email_debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(settings.submit_delay_ms, 1_500);
    }

    #[test]
    fn test_without_motion_keeps_form_timings() {
        let settings = EffectSettings {
            notification_ms: 2_000,
            ..EffectSettings::default()
        }
        .without_motion();
        assert!(!settings.animations);
        assert!(!settings.parallax);
        assert_eq!(settings.scroll_duration_ms, 0.0);
        assert_eq!(settings.notification_ms, 2_000);
        assert_eq!(settings.failure_rate, FAILURE_RATE);
    }

    #[test]
    fn test_site_settings_survive_the_meta_tag() {
        let site = SiteSettings {
            site_name: "Green Gifts".to_string(),
            effects: EffectSettings {
                submit_endpoint: Some("/api/forms".to_string()),
                ..EffectSettings::default()
            },
        };
        let json = serde_json::to_string(&site).unwrap();
        assert_eq!(SiteSettings::from_meta(Some(&json)), site);
    }

    #[test]
    fn test_missing_or_broken_meta_uses_defaults() {
        assert_eq!(SiteSettings::from_meta(None), SiteSettings::default());
        assert_eq!(SiteSettings::from_meta(Some("{not json")), SiteSettings::default());
        assert_eq!(
            SiteSettings::from_meta(Some(r#"{"site_name": "Leafy"}"#)).effects,
            EffectSettings::default()
        );
    }
}
