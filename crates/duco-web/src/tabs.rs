//! Tab buttons switching between panels.

use std::{cell::RefCell, rc::Rc};

use duco_core::{Result, SelectorGroup, SiteConfig, TabSwitcher, TabView};
use web_sys::{Document, HtmlElement};

use crate::dom;

#[derive(Debug)]
pub struct DomTabs {
    buttons: Vec<HtmlElement>,
    panels: Vec<HtmlElement>,
    button_class: String,
    panel_class: String,
}

impl TabView for DomTabs {
    fn set_button_active(&mut self, index: usize, active: bool) {
        if let Some(button) = self.buttons.get(index) {
            if let Err(e) = dom::set_class(button, &self.button_class, active) {
                log::warn!("{e}");
            }
        }
    }

    fn set_panel_active(&mut self, index: usize, active: bool) {
        if let Some(panel) = self.panels.get(index) {
            if let Err(e) = dom::set_class(panel, &self.panel_class, active) {
                log::warn!("{e}");
            }
        }
    }
}

/// Wire tab buttons to their panels. Does nothing unless both exist.
pub fn wire(
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<Rc<RefCell<TabSwitcher<DomTabs>>>>> {
    let panels = dom::query_all(document, &config.selectors.tab_panel)?;
    let mut buttons = Vec::new();
    let mut keys = Vec::new();
    for button in dom::query_all(document, &config.selectors.tab_button)? {
        match dom::attribute(&button, &config.attributes.tab) {
            Some(key) => {
                buttons.push(button);
                keys.push(key);
            }
            None => log::warn!("tab button without {} skipped", config.attributes.tab),
        }
    }
    if buttons.is_empty() || panels.is_empty() {
        return Ok(None);
    }

    let panel_ids: Vec<String> = panels.iter().map(|p| p.id()).collect();

    let view = DomTabs {
        buttons: buttons.clone(),
        panels,
        button_class: config.classes.tab_active.clone(),
        panel_class: config.classes.tab_panel_active.clone(),
    };
    let switcher = Rc::new(RefCell::new(TabSwitcher::new(
        SelectorGroup::new(keys),
        panel_ids,
        config.classes.tab_panel_prefix.clone(),
        view,
    )));

    for (index, button) in buttons.iter().enumerate() {
        let switcher = switcher.clone();
        dom::listen(button, "click", move |_| {
            switcher.borrow_mut().select(index);
        })?;
    }

    log::debug!("tabs wired: {} buttons", buttons.len());
    Ok(Some(switcher))
}
