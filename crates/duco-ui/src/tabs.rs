//! Tab bar and panels.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// A tab button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabItem {
    /// Key linking the button to its panel.
    pub key: String,

    /// Button label.
    pub label: String,
}

impl TabItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// DOM id of the panel this tab controls.
    pub fn panel_id(&self) -> String {
        format!("tab-{}", self.key)
    }
}

/// Row of single-select tab buttons.
#[component]
pub fn TabBar(
    /// Tabs, in display order.
    tabs: Vec<TabItem>,
    /// Key of the selected tab.
    active: RwSignal<String>,
) -> impl IntoView {
    view! {
      <div class="tab-bar" role="tablist">
        <For
          each=move || tabs.clone()
          key=|tab| tab.key.clone()
          children=move |tab| {
            let key = tab.key.clone();
            let selected = Memo::new(move |_| active.get() == key);
            let key = tab.key.clone();
            view! {
              <button
                type="button"
                role="tab"
                class=move || if selected.get() { "tab-btn tab-btn-active" } else { "tab-btn" }
                aria-selected=move || if selected.get() { "true" } else { "false" }
                aria-controls=tab.panel_id()
                on:click=move |_| active.set(key.clone())
              >
                {tab.label.clone()}
              </button>
            }
          }
        />

      </div>
    }
}

/// Panel shown only while its tab is selected.
#[component]
pub fn TabPanel(
    /// Key of the tab that shows this panel.
    #[prop(into)]
    tab: String,
    /// Key of the selected tab.
    active: RwSignal<String>,
    children: Children,
) -> impl IntoView {
    let id = format!("tab-{tab}");
    let selected = Memo::new(move |_| active.get() == tab);

    view! {
      <section
        id=id
        role="tabpanel"
        class=move || if selected.get() { "tab-panel tab-panel-active" } else { "tab-panel" }
      >
        {children()}
      </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_item_creation() {
        let tab = TabItem::new("papers", "Papers");
        assert_eq!(tab.key, "papers");
        assert_eq!(tab.label, "Papers");
    }

    #[test]
    fn test_panel_id() {
        assert_eq!(TabItem::new("projects", "Projects").panel_id(), "tab-projects");
    }

    #[test]
    fn test_tab_item_serialization() {
        let tab = TabItem::new("talks", "Talks");
        let json = serde_json::to_string(&tab).unwrap();
        assert!(json.contains("\"key\":\"talks\""));
        assert!(json.contains("\"label\":\"Talks\""));
    }
}
