//! Listing components: category filter bar, search box and card grid.
//!
//! Visibility is computed by [`duco_core::filter::visibility`], so a
//! client-rendered listing filters exactly like the server-rendered pages.

use std::collections::HashMap;

use duco_core::{ALL_CATEGORIES, Card, filter};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// A listing entry as delivered in page data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingItem {
    /// Stable identifier, used as the render key.
    pub id: String,

    /// Card heading.
    pub title: String,

    /// Short description shown under the title.
    #[serde(default)]
    pub summary: String,

    /// Category tag. Absent means "other".
    #[serde(default)]
    pub category: Option<String>,

    /// Search keywords.
    #[serde(default)]
    pub keywords: Option<String>,

    /// Link to the full entry.
    #[serde(default)]
    pub url: Option<String>,
}

impl ListingItem {
    /// Create an item with a title only.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: String::new(),
            category: None,
            keywords: None,
            url: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// The card the filter engine evaluates; its text is what the card shows.
    pub fn to_card(&self) -> Card {
        let text = if self.summary.is_empty() {
            self.title.clone()
        } else {
            format!("{}\n{}", self.title, self.summary)
        };
        Card::from_attributes(self.category.as_deref(), self.keywords.as_deref(), text)
    }
}

/// Visibility of each item, keyed by item id.
pub fn visibility_by_id(
    items: &[ListingItem],
    category: &str,
    search: &str,
) -> HashMap<String, bool> {
    let cards: Vec<Card> = items.iter().map(ListingItem::to_card).collect();
    items
        .iter()
        .zip(filter::visibility(&cards, category, search))
        .map(|(item, shown)| (item.id.clone(), shown))
        .collect()
}

/// One category filter button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryOption {
    /// Category key matched against item categories.
    pub key: String,

    /// Button label.
    pub label: String,
}

impl CategoryOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// The unrestricted option.
    pub fn all(label: impl Into<String>) -> Self {
        Self::new(ALL_CATEGORIES, label)
    }
}

/// Single-select row of category buttons.
#[component]
pub fn CategoryFilter(
    /// Buttons, in display order.
    options: Vec<CategoryOption>,
    /// Active category key.
    active: RwSignal<String>,
) -> impl IntoView {
    view! {
      <div class="filter-bar" role="group" aria-label="Filter by category">
        <For
          each=move || options.clone()
          key=|option| option.key.clone()
          children=move |option| {
            let key = option.key.clone();
            let is_active = Memo::new(move |_| active.get() == key);
            let key = option.key.clone();
            view! {
              <button
                type="button"
                class=move || {
                  if is_active.get() { "filter-btn filter-btn-active" } else { "filter-btn" }
                }
                aria-pressed=move || if is_active.get() { "true" } else { "false" }
                on:click=move |_| active.set(key.clone())
              >
                {option.label.clone()}
              </button>
            }
          }
        />

      </div>
    }
}

/// Search input feeding the listing on every edit.
#[component]
pub fn ListingSearch(
    /// Placeholder text for the input.
    #[prop(default = "Search opportunities...".to_string())]
    placeholder: String,
    /// Current search term.
    query: RwSignal<String>,
) -> impl IntoView {
    view! {
      <input
        type="search"
        class="listing-search"
        placeholder=placeholder
        prop:value=move || query.get()
        on:input=move |ev| {
          query.set(event_target_value(&ev));
        }
      />
    }
}

/// Filterable card listing with its filter bar, search box and empty state.
#[component]
pub fn Listing(
    /// Entries to list.
    items: Signal<Vec<ListingItem>>,
    /// Category buttons.
    options: Vec<CategoryOption>,
    /// Message shown when nothing matches.
    #[prop(default = "No results match your filters.".to_string())]
    empty_message: String,
) -> impl IntoView {
    let category = RwSignal::new(ALL_CATEGORIES.to_string());
    let query = RwSignal::new(String::new());

    let visible = Memo::new(move |_| {
        items.with(|items| visibility_by_id(items, &category.get(), &query.get()))
    });
    let nothing_shown = Memo::new(move |_| {
        visible.with(|v| !v.is_empty() && v.values().all(|shown| !shown))
    });

    view! {
      <section class="listing">
        <div class="listing-controls">
          <CategoryFilter options=options active=category />
          <ListingSearch query=query />
        </div>

        <div class="listing-grid">
          <For
            each=move || items.get()
            key=|item| item.id.clone()
            children=move |item| {
              let id = item.id.clone();
              let shown = Memo::new(move |_| {
                visible.with(|v| v.get(&id).copied().unwrap_or(false))
              });
              view! { <ListingCard item=item shown=shown.into() /> }
            }
          />

        </div>

        <p class="listing-empty" hidden=move || !nothing_shown.get()>
          {empty_message}
        </p>
      </section>
    }
}

/// A single listing card.
#[component]
fn ListingCard(
    /// The entry to render.
    item: ListingItem,
    /// Whether the card passes the current filters.
    shown: Signal<bool>,
) -> impl IntoView {
    let url = item.url.clone();
    let has_summary = !item.summary.is_empty();
    let summary = item.summary.clone();

    view! {
      <article
        class="card"
        data-type=item.category.clone()
        style:display=move || if shown.get() { "flex" } else { "none" }
      >
        <h3 class="card-title">
          {match url {
            Some(href) => view! { <a href=href>{item.title.clone()}</a> }.into_any(),
            None => view! { <span>{item.title.clone()}</span> }.into_any(),
          }}
        </h3>
        <Show when=move || has_summary>
          <p class="card-summary">{summary.clone()}</p>
        </Show>
      </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duco_core::OTHER_CATEGORY;

    #[test]
    fn test_listing_item_creation() {
        let item = ListingItem::new("policy-lab", "Policy Lab")
            .with_summary("Research assistant role")
            .with_category("research")
            .with_keywords("ai policy");

        assert_eq!(item.id, "policy-lab");
        assert_eq!(item.category.as_deref(), Some("research"));
        assert!(item.url.is_none());
    }

    #[test]
    fn test_to_card_includes_summary_text() {
        let card = ListingItem::new("a", "Policy Lab")
            .with_summary("Research assistant role")
            .to_card();

        assert_eq!(card.category, OTHER_CATEGORY);
        assert!(card.keywords.is_empty());
        assert!(card.text.contains("Policy Lab"));
        assert!(card.text.contains("Research assistant role"));
    }

    #[test]
    fn test_items_filter_like_page_cards() {
        let items = vec![
            ListingItem::new("1", "Policy Fellow")
                .with_category("research")
                .with_keywords("ai policy"),
            ListingItem::new("2", "Investment Intern")
                .with_category("internship")
                .with_keywords("finance"),
        ];
        let cards: Vec<Card> = items.iter().map(ListingItem::to_card).collect();

        assert_eq!(filter::visibility(&cards, ALL_CATEGORIES, "finance"), vec![false, true]);
        assert_eq!(filter::visibility(&cards, "research", "finance"), vec![false, false]);
    }

    #[test]
    fn test_visibility_follows_items_when_reordered() {
        let research = ListingItem::new("a", "Policy Fellow").with_category("research");
        let internship = ListingItem::new("b", "Investment Intern").with_category("internship");

        let forward = visibility_by_id(&[research.clone(), internship.clone()], "research", "");
        let reversed = visibility_by_id(&[internship, research], "research", "");

        assert_eq!(forward, reversed);
        assert_eq!(reversed.get("a"), Some(&true));
        assert_eq!(reversed.get("b"), Some(&false));
    }

    #[test]
    fn test_category_option_all() {
        let option = CategoryOption::all("All");
        assert_eq!(option.key, ALL_CATEGORIES);
        assert_eq!(option.label, "All");
    }

    #[test]
    fn test_listing_item_deserialization() {
        let json = r#"{"id": "x", "title": "Summer Fellowship in Law"}"#;
        let item: ListingItem = serde_json::from_str(json).unwrap();
        assert!(item.category.is_none());
        assert!(item.summary.is_empty());
        assert!(item.to_card().text.to_lowercase().contains("law"));
    }
}
