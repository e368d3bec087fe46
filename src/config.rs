use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::error::Result;

pub const CONFIG_SCRIPT_ID: &str = "factory-theme-config";
pub const CONFIG_GLOBAL: &str = "factoryThemeConfig";

#[cfg(debug_assertions)]
pub fn default_log_level() -> &'static str {
    "debug"
}

#[cfg(not(debug_assertions))]
pub fn default_log_level() -> &'static str {
    "info"
}

/// How scroll notifications are turned into dispatches to the scroll subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScrollPolicy {
    /// At most one dispatch per animation frame.
    #[default]
    AnimationFrame,
    /// One dispatch per scroll event.
    Immediate,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub selectors: Selectors,
    pub header: HeaderConfig,
    pub scroll_spy: ScrollSpyConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub notifications: NotificationConfig,
    pub forms: FormConfig,
    pub legacy: LegacyConfig,
    pub scroll_policy: ScrollPolicy,
    pub log_level: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            header: HeaderConfig::default(),
            scroll_spy: ScrollSpyConfig::default(),
            reveal: RevealConfig::default(),
            parallax: ParallaxConfig::default(),
            notifications: NotificationConfig::default(),
            forms: FormConfig::default(),
            legacy: LegacyConfig::default(),
            scroll_policy: ScrollPolicy::default(),
            log_level: default_log_level().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub anchor: String,
    pub nav_link: String,
    pub section: String,
    pub scroll_animate: String,
    pub header: String,
    pub menu_toggle: String,
    pub nav_menu: String,
    pub parallax: String,
    pub form: String,
    pub submit_button: String,
    pub lazy_image: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            anchor: "a[href^=\"#\"]".to_string(),
            nav_link: ".factory-nav-link".to_string(),
            section: "section[id]".to_string(),
            scroll_animate: ".factory-scroll-animate".to_string(),
            header: ".factory-header, .header".to_string(),
            menu_toggle: ".factory-menu-toggle".to_string(),
            nav_menu: ".factory-nav-menu".to_string(),
            parallax: ".factory-parallax".to_string(),
            form: ".factory-form".to_string(),
            submit_button: "button[type=\"submit\"]".to_string(),
            lazy_image: "img[data-src]".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Offset past which the header gets the `scrolled` class.
    pub scrolled_after: f64,
    /// Offset past which scrolling down hides the header.
    pub hide_after: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_after: 50.0,
            hide_after: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    /// A section becomes current this many pixels before its top reaches the viewport top.
    pub lookahead: f64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self { lookahead: 100.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub default_speed: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { default_speed: 0.5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub show_delay_ms: u32,
    /// Counted from appending, not from gaining `show`.
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 100,
            display_ms: 5000,
            exit_ms: 300,
        }
    }
}

impl NotificationConfig {
    /// Time from appending a notification to detaching it.
    pub fn lifetime_ms(&self) -> u32 {
        self.display_ms.max(self.show_delay_ms) + self.exit_ms
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Used for forms without a `data-endpoint`. `None` simulates the submission.
    pub endpoint: Option<String>,
    pub simulated_delay_ms: u32,
    pub sending_label: String,
    pub success_message: String,
    pub error_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            simulated_delay_ms: 2000,
            sending_label: "Sending...".to_string(),
            success_message: "Message sent successfully!".to_string(),
            error_message: "Error sending message. Please try again.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegacyConfig {
    pub hidden_selectors: Vec<String>,
    pub removed_selectors: Vec<String>,
    pub global_handles: Vec<String>,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            hidden_selectors: vec![
                ".terminal-boot".to_string(),
                ".terminal-line".to_string(),
                ".terminal-cursor".to_string(),
                ".terminal-prompt".to_string(),
            ],
            removed_selectors: vec!["#matrix-rain".to_string()],
            global_handles: vec!["typist".to_string()],
        }
    }
}

impl ThemeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_js(value: JsValue) -> Result<Self> {
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    /// Reads the page's configuration script, then the global object, then falls back to defaults.
    pub fn load(window: &Window, document: &Document) -> Self {
        if let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) {
            let text = script.text_content().unwrap_or_default();
            match Self::from_json(&text) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring #{}: {}", CONFIG_SCRIPT_ID, e),
            }
        }

        let global = web_sys::js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if !global.is_undefined() && !global.is_null() {
            match Self::from_js(global) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring window.{}: {}", CONFIG_GLOBAL, e),
            }
        }

        Self::default()
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_theme_constants() {
        let config = ThemeConfig::default();
        assert_eq!(config.header.scrolled_after, 50.0);
        assert_eq!(config.header.hide_after, 100.0);
        assert_eq!(config.scroll_spy.lookahead, 100.0);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.parallax.default_speed, 0.5);
        assert_eq!(config.notifications.lifetime_ms(), 5300);
        assert_eq!(config.forms.sending_label, "Sending...");
        assert_eq!(config.scroll_policy, ScrollPolicy::AnimationFrame);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = ThemeConfig::from_json(
            r#"{
                "header": { "hide_after": 240 },
                "selectors": { "header": ".site-header" },
                "scroll_policy": "immediate"
            }"#,
        )
        .unwrap();

        assert_eq!(config.header.hide_after, 240.0);
        assert_eq!(config.header.scrolled_after, 50.0);
        assert_eq!(config.selectors.header, ".site-header");
        assert_eq!(config.selectors.nav_link, ".factory-nav-link");
        assert_eq!(config.scroll_policy, ScrollPolicy::Immediate);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = ThemeConfig::from_json("{ \"header\": 3 }").unwrap_err();
        assert!(matches!(err, crate::error::ThemeError::Config(_)));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = ThemeConfig {
            log_level: "chatty".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);

        let config = ThemeConfig {
            log_level: "warn".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Warn);
    }
}
