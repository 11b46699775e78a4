//! Site runtime configuration.
//!
//! Every structural marker the runtime looks for (selectors, data attributes,
//! CSS classes) and every timing constant lives here, so a page can rename its
//! markup without touching code.

use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, Result};

/// Main configuration structure for the site runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Selectors used to discover controls in the document.
    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Data attributes read from controls and cards.
    #[serde(default)]
    pub attributes: AttributeConfig,

    /// CSS classes toggled by the runtime.
    #[serde(default)]
    pub classes: ClassConfig,

    /// Theme preference settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Animation timings and observer thresholds.
    #[serde(default)]
    pub motion: MotionConfig,

    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// CSS selectors for the page controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub main: String,
    pub year: String,
    pub theme_toggle: String,
    pub filter_button: String,
    pub card: String,
    pub search_input: String,
    pub empty_message: String,
    /// Comma-separated selector list for scroll-revealed sections.
    pub reveal: String,
    pub stat_number: String,
    pub tab_button: String,
    pub tab_panel: String,
}

/// Data attribute names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeConfig {
    /// Category tag on a card.
    pub card_category: String,
    /// Keyword string on a card.
    pub card_keywords: String,
    /// Category key on a filter control.
    pub filter: String,
    /// Target value on a counter.
    pub count: String,
    /// Tab key on a tab button.
    pub tab: String,
    /// Attribute carrying the active theme.
    pub theme: String,
}

/// CSS class names and presentation values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassConfig {
    pub filter_active: String,
    pub main_loaded: String,
    pub card_loaded: String,
    pub revealed: String,
    pub tab_active: String,
    pub tab_panel_active: String,
    /// Prefix joining a tab key to its panel id (`tab-` + key).
    pub tab_panel_prefix: String,
    /// `display` value for visible cards.
    pub card_display: String,
}

/// Theme preference settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key under which the preference is persisted.
    pub storage_key: String,

    /// Element that carries the theme attribute.
    pub apply_to: ThemeScope,
}

/// Element the theme attribute is written to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeScope {
    /// The `<body>` element.
    #[default]
    Body,
    /// The document element (`<html>`).
    Root,
}

/// Animation timings and observer thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Delay before the main area is marked loaded.
    pub main_delay_ms: u32,
    /// Extra delay per card index for the staggered entry.
    pub card_stagger_ms: u32,
    /// Number of frames a counter takes to reach its target.
    pub counter_frames: u32,
    /// Intersection ratio that reveals a section.
    pub reveal_threshold: f64,
    /// Intersection ratio that starts a counter.
    pub counter_threshold: f64,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            main: "main".to_string(),
            year: "#year".to_string(),
            theme_toggle: ".theme-toggle".to_string(),
            filter_button: ".filter-btn".to_string(),
            card: ".card".to_string(),
            search_input: "#searchInput".to_string(),
            empty_message: "#emptyMessage".to_string(),
            reveal: ".reveal, .hero-home, .section, .page-hero".to_string(),
            stat_number: ".stat-number".to_string(),
            tab_button: ".tab-btn".to_string(),
            tab_panel: ".tab-panel".to_string(),
        }
    }
}

impl Default for AttributeConfig {
    fn default() -> Self {
        Self {
            card_category: "data-type".to_string(),
            card_keywords: "data-keywords".to_string(),
            filter: "data-filter".to_string(),
            count: "data-count".to_string(),
            tab: "data-tab".to_string(),
            theme: "data-theme".to_string(),
        }
    }
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            filter_active: "filter-btn-active".to_string(),
            main_loaded: "main-loaded".to_string(),
            card_loaded: "card-loaded".to_string(),
            revealed: "is-visible".to_string(),
            tab_active: "tab-btn-active".to_string(),
            tab_panel_active: "tab-panel-active".to_string(),
            tab_panel_prefix: "tab-".to_string(),
            card_display: "flex".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "duco-theme".to_string(),
            apply_to: ThemeScope::Body,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            main_delay_ms: 150,
            card_stagger_ms: 120,
            counter_frames: 40,
            reveal_threshold: 0.12,
            counter_threshold: 0.6,
        }
    }
}

impl SiteConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Overlay a partial JSON document onto this configuration.
    ///
    /// Keys absent from `json` keep their current values, so a page only has
    /// to state what it renames.
    pub fn merge_json(&self, json: &str) -> Result<Self> {
        let overlay: Value = serde_json::from_str(json)?;
        if !overlay.is_object() {
            return Err(CoreError::config("config override must be a JSON object"));
        }

        let mut base = serde_json::to_value(self)?;
        merge_values(&mut base, overlay);

        let merged: SiteConfig = serde_json::from_value(base)?;
        merged.validate()?;
        Ok(merged)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("selectors.card", &self.selectors.card),
            ("selectors.filter_button", &self.selectors.filter_button),
            ("attributes.card_category", &self.attributes.card_category),
            ("attributes.card_keywords", &self.attributes.card_keywords),
            ("theme.storage_key", &self.theme.storage_key),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::config(format!("{name} cannot be empty")));
            }
        }

        for (name, value) in [
            ("motion.reveal_threshold", self.motion.reveal_threshold),
            ("motion.counter_threshold", self.motion.counter_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CoreError::config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.motion.counter_frames == 0 {
            return Err(CoreError::config("motion.counter_frames must be positive"));
        }

        if tracing::Level::from_str(&self.log_level).is_err() {
            return Err(CoreError::config(format!(
                "unknown log_level: {}",
                self.log_level
            )));
        }

        Ok(())
    }
}

fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge_values(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r##"
log_level = "debug"

[selectors]
card = ".listing-card"
search_input = "#q"

[attributes]
card_category = "data-kind"

[classes]
card_display = "grid"

[theme]
storage_key = "site-theme"
apply_to = "root"

[motion]
main_delay_ms = 50
counter_frames = 20
reveal_threshold = 0.25
"##
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("duco.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = SiteConfig::load(&config_path).expect("load config");

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.selectors.card, ".listing-card");
        assert_eq!(config.selectors.search_input, "#q");
        assert_eq!(config.selectors.filter_button, ".filter-btn");
        assert_eq!(config.attributes.card_category, "data-kind");
        assert_eq!(config.attributes.card_keywords, "data-keywords");
        assert_eq!(config.classes.card_display, "grid");
        assert_eq!(config.theme.storage_key, "site-theme");
        assert_eq!(config.theme.apply_to, ThemeScope::Root);
        assert_eq!(config.motion.main_delay_ms, 50);
        assert_eq!(config.motion.card_stagger_ms, 120);
        assert_eq!(config.motion.counter_frames, 20);
        assert!((config.motion.reveal_threshold - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_defaults() {
        let config = SiteConfig::from_toml_str("").expect("empty config");

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.selectors.empty_message, "#emptyMessage");
        assert_eq!(
            config.selectors.reveal,
            ".reveal, .hero-home, .section, .page-hero"
        );
        assert_eq!(config.classes.filter_active, "filter-btn-active");
        assert_eq!(config.classes.tab_panel_prefix, "tab-");
        assert_eq!(config.theme.storage_key, "duco-theme");
        assert_eq!(config.theme.apply_to, ThemeScope::Body);
        assert_eq!(config.motion.main_delay_ms, 150);
        assert_eq!(config.motion.counter_frames, 40);
        assert!((config.motion.counter_threshold - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_merge_json_overrides_only_given_keys() {
        let base = SiteConfig::default();
        let merged = base
            .merge_json(r#"{"selectors": {"card": ".opportunity"}, "motion": {"card_stagger_ms": 80}}"#)
            .expect("merge");

        assert_eq!(merged.selectors.card, ".opportunity");
        assert_eq!(merged.selectors.search_input, "#searchInput");
        assert_eq!(merged.motion.card_stagger_ms, 80);
        assert_eq!(merged.motion.main_delay_ms, 150);
    }

    #[test]
    fn test_merge_json_rejects_non_object() {
        let result = SiteConfig::default().merge_json("[1, 2]");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_json_rejects_malformed() {
        let result = SiteConfig::default().merge_json("{not json");
        assert!(matches!(result, Err(CoreError::Json(_))));
    }

    #[test]
    fn test_config_validation_threshold() {
        let result = SiteConfig::from_toml_str(
            r#"
[motion]
counter_threshold = 1.5
"#,
        );
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("counter_threshold must be within")
        );
    }

    #[test]
    fn test_config_validation_empty_selector() {
        let result = SiteConfig::from_toml_str(
            r#"
[selectors]
card = "  "
"#,
        );
        assert!(result.unwrap_err().to_string().contains("selectors.card"));
    }

    #[test]
    fn test_config_validation_zero_frames() {
        let result = SiteConfig::from_toml_str(
            r#"
[motion]
counter_frames = 0
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_log_level() {
        let result = SiteConfig::from_toml_str(r#"log_level = "loud""#);
        assert!(result.unwrap_err().to_string().contains("log_level"));
    }

    #[test]
    fn test_config_not_found() {
        let result = SiteConfig::load(Path::new("/nonexistent/duco.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
