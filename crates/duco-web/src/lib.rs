//! DUCO Site Runtime
//!
//! Browser-side interactivity for the DUCO static pages, compiled to
//! WebAssembly and attached to server-rendered markup.
//!
//! # Features
//!
//! - **Theme**: light/dark toggle persisted to `localStorage`
//! - **Listing**: category filter buttons and a search box over cards
//! - **Entry animation**: staggered fade-in of the main area and cards
//! - **Reveal**: sections animate in the first time they scroll into view
//! - **Counters**: statistics count up once when visible
//! - **Tabs**: single-select tab panels
//!
//! Each feature looks for its controls and silently stays off when the page
//! does not have them.
//!
//! # Example (HTML)
//!
//! ```html
//! <script type="application/json" id="duco-config">
//!   { "selectors": { "card": ".opportunity" } }
//! </script>
//! <script type="module">
//!   import init from './pkg/duco_web.js';
//!   await init();
//! </script>
//! ```

pub mod dom;
pub mod listing;
pub mod motion;
pub mod observe;
pub mod settings;
pub mod tabs;
pub mod theme;

use std::str::FromStr;

use duco_core::Result;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Initialize the WASM module.
///
/// Sets up the panic hook and console logging, then boots the page once the
/// document has been parsed.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (tests, hot reload) finds the logger already installed.
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = boot() {
        log::error!("site runtime failed to start: {e}");
    }
}

/// Get the version of the site runtime.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Run [`start`] now, or on `DOMContentLoaded` while the document is still
/// loading.
pub fn boot() -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    if document.ready_state() == "loading" {
        let mut pending = Some((window, document.clone()));
        dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some((window, document)) = pending.take() {
                start(&window, &document);
            }
        })?;
    } else {
        start(&window, &document);
    }

    Ok(())
}

/// Load the page configuration and wire every feature.
///
/// A failing feature is logged and does not stop the others.
pub fn start(window: &Window, document: &Document) {
    let config = settings::load(document);
    if let Ok(level) = log::LevelFilter::from_str(&config.log_level) {
        log::set_max_level(level);
    }

    report("year", motion::write_year(document, &config));
    report("theme", theme::wire(window, document, &config).map(drop));
    report("listing", listing::wire(document, &config).map(drop));
    report("entry animation", motion::stagger_entry(document, &config).map(drop));
    report("reveal", observe::reveal_sections(window, document, &config).map(drop));
    report("counters", observe::animate_counters(window, document, &config).map(drop));
    report("tabs", tabs::wire(document, &config).map(drop));

    log::info!("site runtime {} ready", get_version());
}

fn report(feature: &str, result: Result<()>) {
    if let Err(e) = result {
        log::warn!("{feature} disabled: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
