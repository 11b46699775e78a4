//! Single-select tab panels.

use crate::select::SelectorGroup;

/// Presentation side of a tab set.
pub trait TabView {
    fn set_button_active(&mut self, index: usize, active: bool);

    fn set_panel_active(&mut self, index: usize, active: bool);
}

/// Tab buttons and the panels they switch between.
///
/// Selecting button `i` with key `k` activates exactly the panels whose id is
/// `prefix + k`.
#[derive(Debug)]
pub struct TabSwitcher<V> {
    buttons: SelectorGroup,
    panel_ids: Vec<String>,
    prefix: String,
    view: V,
}

impl<V: TabView> TabSwitcher<V> {
    pub fn new(
        buttons: SelectorGroup,
        panel_ids: Vec<String>,
        prefix: impl Into<String>,
        view: V,
    ) -> Self {
        Self {
            buttons,
            panel_ids,
            prefix: prefix.into(),
            view,
        }
    }

    /// Whether there is anything to switch.
    pub fn is_active(&self) -> bool {
        !self.buttons.is_empty() && !self.panel_ids.is_empty()
    }

    /// Panel id a tab key maps to.
    pub fn panel_id_for(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }

    /// Handle a click on tab button `index`. Returns the number of panels
    /// shown, or `None` for an unknown button or one without a key.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if !self.is_active() {
            return None;
        }

        let key = self.buttons.key(index)?;
        if key.is_empty() {
            tracing::warn!(index, "tab button has no key, ignoring");
            return None;
        }
        let wanted = self.panel_id_for(key);

        let selection = self.buttons.select(index)?;
        for i in 0..self.buttons.len() {
            self.view.set_button_active(i, i == selection.current);
        }

        let mut shown = 0;
        for (i, id) in self.panel_ids.iter().enumerate() {
            let active = *id == wanted;
            self.view.set_panel_active(i, active);
            if active {
                shown += 1;
            }
        }

        tracing::debug!(tab = %wanted, shown, "tab selected");
        Some(shown)
    }

    pub fn active(&self) -> Option<usize> {
        self.buttons.active()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
