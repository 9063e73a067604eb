//! Site configuration.
//!
//! Read once at startup from the inline JSON block
//! `<script type="application/json" id="site-config">` in `index.html`.
//! Every field has a default so the block may be partial or absent.

use crate::error::UiResult;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Widest viewport still treated as a phone.
    pub mobile_max: u32,
    /// Widest viewport still treated as a tablet.
    pub tablet_max: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 768,
            tablet_max: 1024,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyImageConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for LazyImageConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "50px".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    pub currency: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            currency: "EUR".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub breakpoints: Breakpoints,
    pub resize_debounce_ms: u32,
    pub scroll_debounce_ms: u32,
    pub swipe_threshold: f64,
    /// Scroll deltas below this many pixels do not flip the direction.
    pub scroll_threshold: f64,
    pub lazy_image: LazyImageConfig,
    pub analytics: AnalyticsConfig,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            resize_debounce_ms: 150,
            scroll_debounce_ms: 100,
            swipe_threshold: 50.0,
            scroll_threshold: 5.0,
            lazy_image: LazyImageConfig::default(),
            analytics: AnalyticsConfig::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> UiResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load from the inline config block, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("invalid #{}: {}; using defaults", CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

/// Config from the nearest `ContextProvider<SiteConfig>`, or defaults.
#[hook]
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = SiteConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.breakpoints.mobile_max, 768);
        assert_eq!(cfg.breakpoints.tablet_max, 1024);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(
            r#"{"swipe_threshold": 80, "breakpoints": {"mobile_max": 640}, "log_level": "debug"}"#,
        )
        .unwrap();
        assert_eq!(cfg.swipe_threshold, 80.0);
        assert_eq!(cfg.breakpoints.mobile_max, 640);
        assert_eq!(cfg.breakpoints.tablet_max, 1024);
        assert_eq!(cfg.log_level, LevelFilter::Debug);
        assert_eq!(cfg.resize_debounce_ms, 150);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = SiteConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, crate::error::UiError::Json(_)));
    }
}
