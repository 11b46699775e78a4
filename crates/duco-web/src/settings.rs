//! Runtime configuration for the current page.

use duco_core::SiteConfig;
use web_sys::Document;

/// Built-in markup contract.
const DEFAULT_CONFIG: &str = include_str!("../duco.toml");

/// Id of the optional inline JSON override.
pub const CONFIG_ELEMENT_ID: &str = "duco-config";

/// Built-in configuration.
pub fn defaults() -> SiteConfig {
    match SiteConfig::from_toml_str(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("built-in duco.toml is invalid, using compiled defaults: {e}");
            SiteConfig::default()
        }
    }
}

/// Built-in configuration overlaid with the page's inline override, if any.
///
/// A malformed override is logged and ignored.
pub fn load(document: &Document) -> SiteConfig {
    let base = defaults();

    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return base;
    };

    let json = element.text_content().unwrap_or_default();
    if json.trim().is_empty() {
        return base;
    }

    match base.merge_json(&json) {
        Ok(config) => {
            log::debug!("applied page config override");
            config
        }
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_config_matches_defaults() {
        assert_eq!(defaults(), SiteConfig::default());
    }
}
