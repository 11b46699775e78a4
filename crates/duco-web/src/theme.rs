//! Theme toggle backed by `localStorage`.

use std::{cell::RefCell, rc::Rc};

use duco_core::{
    CoreError, PreferenceStore, Result, SiteConfig, Theme, ThemeScope, ThemeSwitcher, ThemeTarget,
};
use web_sys::{Document, Element, Storage, Window};

use crate::dom;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Preference store over `window.localStorage`.
///
/// Storage can be missing (private modes, sandboxed frames); reads then find
/// nothing and writes fail softly.
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::info!("localStorage unavailable, theme preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| CoreError::storage("localStorage unavailable"))?;

        storage
            .set_item(key, value)
            .map_err(|e| CoreError::storage(format!("setItem({key}): {}", dom::describe(&e))))
    }
}

/// Writes the theme into an attribute on the body or root element.
#[derive(Debug, Clone)]
pub struct AttributeTheme {
    element: Element,
    attribute: String,
}

impl ThemeTarget for AttributeTheme {
    fn apply(&mut self, theme: Theme) {
        if let Err(e) = self.element.set_attribute(&self.attribute, theme.as_str()) {
            log::warn!("failed to apply theme {theme}: {}", dom::describe(&e));
        }
    }
}

/// Whether the platform asks for a dark color scheme.
pub fn prefers_dark(window: &Window) -> bool {
    window
        .match_media(DARK_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

/// Apply the initial theme and wire the toggle control, if present.
pub fn wire(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Rc<RefCell<ThemeSwitcher<LocalStore, AttributeTheme>>>> {
    let element: Element = match config.theme.apply_to {
        ThemeScope::Body => document.body().map(Into::into),
        ThemeScope::Root => document.document_element(),
    }
    .ok_or_else(|| CoreError::dom("no element to carry the theme attribute"))?;

    let target = AttributeTheme {
        element,
        attribute: config.attributes.theme.clone(),
    };

    let switcher = Rc::new(RefCell::new(ThemeSwitcher::init(
        LocalStore::new(window),
        target,
        config.theme.storage_key.clone(),
        prefers_dark(window),
    )));
    log::debug!("initial theme: {}", switcher.borrow().current());

    if let Some(toggle) = dom::query(document, &config.selectors.theme_toggle)? {
        let handle = switcher.clone();
        dom::listen(&toggle, "click", move |_| {
            let theme = handle.borrow_mut().toggle();
            log::debug!("theme switched to {theme}");
        })?;
    }

    Ok(switcher)
}
