//! Category filter and search box wiring for card listings.

use std::{cell::RefCell, rc::Rc};

use duco_core::{
    ALL_CATEGORIES, Card, ListingFilter, ListingView, Result, SelectorGroup, SiteConfig,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::dom;

/// Shared handle to a page's listing engine.
pub type Listing = Rc<RefCell<ListingFilter<DomListing>>>;

/// [`ListingView`] over the page's cards, filter controls and empty message.
#[derive(Debug)]
pub struct DomListing {
    cards: Vec<HtmlElement>,
    controls: Vec<HtmlElement>,
    empty_message: Option<HtmlElement>,
    display: String,
    active_class: String,
}

impl ListingView for DomListing {
    fn set_card_visible(&mut self, index: usize, visible: bool) {
        let Some(card) = self.cards.get(index) else {
            return;
        };
        let display = if visible { self.display.as_str() } else { "none" };
        if let Err(e) = card.style().set_property("display", display) {
            log::warn!("failed to set display on card {index}: {}", dom::describe(&e));
        }
    }

    fn set_empty_state(&mut self, shown: bool) {
        if let Some(message) = &self.empty_message {
            message.set_hidden(!shown);
        }
    }

    fn set_active_selector(&mut self, active: Option<usize>) {
        for (index, control) in self.controls.iter().enumerate() {
            if let Err(e) = dom::set_class(control, &self.active_class, Some(index) == active) {
                log::warn!("{e}");
            }
        }
    }
}

/// Read cards and controls from the document and wire their events.
///
/// Returns `None` when the page has neither cards nor filter controls.
pub fn wire(document: &Document, config: &SiteConfig) -> Result<Option<Listing>> {
    let selectors = &config.selectors;
    let attributes = &config.attributes;

    let card_elements = dom::query_all(document, &selectors.card)?;
    let controls = dom::query_all(document, &selectors.filter_button)?;
    if card_elements.is_empty() && controls.is_empty() {
        return Ok(None);
    }

    let cards: Vec<Card> = card_elements
        .iter()
        .map(|el| {
            Card::from_attributes(
                el.get_attribute(&attributes.card_category).as_deref(),
                el.get_attribute(&attributes.card_keywords).as_deref(),
                el.inner_text(),
            )
        })
        .collect();

    let keys: Vec<String> = controls
        .iter()
        .map(|el| {
            dom::attribute(el, &attributes.filter).unwrap_or_else(|| ALL_CATEGORIES.to_string())
        })
        .collect();

    // Markup may pre-mark a control; otherwise the "all" control starts active.
    let initial = controls
        .iter()
        .position(|el| el.class_list().contains(&config.classes.filter_active))
        .or_else(|| keys.iter().position(|k| k == ALL_CATEGORIES));
    let mut group = SelectorGroup::new(keys);
    if let Some(index) = initial {
        group = group.with_active(index);
    }

    let view = DomListing {
        cards: card_elements,
        controls: controls.clone(),
        empty_message: dom::query(document, &selectors.empty_message)?,
        display: config.classes.card_display.clone(),
        active_class: config.classes.filter_active.clone(),
    };

    let listing: Listing = Rc::new(RefCell::new(ListingFilter::new(cards, group, view)));

    for (index, control) in controls.iter().enumerate() {
        let listing = listing.clone();
        dom::listen(control, "click", move |_| {
            listing.borrow_mut().select_control(index);
        })?;
    }

    if let Some(input) = dom::query(document, &selectors.search_input)? {
        if let Ok(input) = input.dyn_into::<HtmlInputElement>() {
            // Browsers may restore a previous value on back navigation.
            let restored = input.value();
            if !restored.is_empty() {
                listing.borrow_mut().set_search(restored);
            }

            let handle = listing.clone();
            let source = input.clone();
            dom::listen(&input, "input", move |_| {
                handle.borrow_mut().set_search(source.value());
            })?;
        } else {
            log::warn!("{} is not an <input>, search disabled", selectors.search_input);
        }
    }

    let outcome = listing.borrow_mut().initialize();
    log::debug!(
        "listing wired: {} of {} cards visible, {} filter controls",
        outcome.visible,
        outcome.total,
        controls.len()
    );

    Ok(Some(listing))
}
