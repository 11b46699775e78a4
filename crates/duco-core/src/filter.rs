//! Listing filter engine.
//!
//! Decides which cards are shown for the active category and search term,
//! and drives a [`ListingView`] with the result. Every recomputation starts
//! from scratch; listings hold tens of cards, so a full pass per keystroke is
//! cheap.

use crate::{
    card::{ALL_CATEGORIES, Card},
    select::SelectorGroup,
};

/// Presentation side of the listing.
///
/// The browser runtime implements this over DOM elements; tests record the
/// calls.
pub trait ListingView {
    /// Show or hide the card at `index`.
    fn set_card_visible(&mut self, index: usize, visible: bool);

    /// Show or hide the empty-state message.
    fn set_empty_state(&mut self, shown: bool);

    /// Mark `active` as the only active category control (`None` clears all).
    fn set_active_selector(&mut self, active: Option<usize>);
}

/// Summary of one recomputation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Number of cards left visible.
    pub visible: usize,

    /// Number of cards evaluated.
    pub total: usize,
}

impl FilterOutcome {
    /// Whether the empty-state message should be shown.
    pub fn shows_empty_state(&self) -> bool {
        self.total > 0 && self.visible == 0
    }
}

/// Lower-case and trim a search term.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Whether `card` passes the category filter and the normalized search term.
pub fn card_matches(card: &Card, category: &str, term: &str) -> bool {
    let category_match = category == ALL_CATEGORIES || card.category == category;
    if !category_match {
        return false;
    }

    term.is_empty()
        || card.keywords.to_lowercase().contains(term)
        || card.text.to_lowercase().contains(term)
}

/// Visibility of every card for a raw (unnormalized) search term.
pub fn visibility(cards: &[Card], category: &str, search: &str) -> Vec<bool> {
    let term = normalize_term(search);
    cards
        .iter()
        .map(|card| card_matches(card, category, &term))
        .collect()
}

/// Category and search state for one listing, bound to its view.
#[derive(Debug)]
pub struct ListingFilter<V> {
    cards: Vec<Card>,
    selectors: SelectorGroup,
    category: String,
    search: String,
    visible: Vec<bool>,
    view: V,
}

impl<V: ListingView> ListingFilter<V> {
    /// Create a filter with an empty search.
    ///
    /// The category follows the group's active control, or `"all"` when none
    /// is active. The view is not touched until [`initialize`](Self::initialize)
    /// or the first recomputation.
    pub fn new(cards: Vec<Card>, selectors: SelectorGroup, view: V) -> Self {
        let visible = vec![true; cards.len()];
        let category = selectors.active_key().unwrap_or(ALL_CATEGORIES).to_string();
        Self {
            cards,
            selectors,
            category,
            search: String::new(),
            visible,
            view,
        }
    }

    /// Bring the view in line with the starting state: mark the active
    /// control, then apply the filters.
    pub fn initialize(&mut self) -> FilterOutcome {
        self.view.set_active_selector(self.selectors.active());
        self.recompute()
    }

    /// Handle a click on the category control at `index`.
    ///
    /// Returns `None` when no such control exists.
    pub fn select_control(&mut self, index: usize) -> Option<FilterOutcome> {
        let selection = self.selectors.select(index)?;
        let key = self
            .selectors
            .key(selection.current)
            .unwrap_or(ALL_CATEGORIES)
            .to_string();

        tracing::debug!(
            previous = ?selection.previous,
            current = selection.current,
            category = %key,
            "category control selected"
        );

        self.view.set_active_selector(Some(selection.current));
        self.category = key;
        Some(self.recompute())
    }

    /// Set the active category.
    ///
    /// The control carrying `category` becomes the only active one. A
    /// category no card carries simply matches nothing.
    pub fn set_category(&mut self, category: impl Into<String>) -> FilterOutcome {
        self.category = category.into();
        let active = self.selectors.select_key(&self.category);
        self.view.set_active_selector(active);
        self.recompute()
    }

    /// Set the search term. Runs on every edit of the search box.
    pub fn set_search(&mut self, term: impl Into<String>) -> FilterOutcome {
        self.search = term.into();
        self.recompute()
    }

    /// Re-evaluate every card and update the view.
    ///
    /// An empty listing is left untouched.
    pub fn recompute(&mut self) -> FilterOutcome {
        if self.cards.is_empty() {
            return FilterOutcome::default();
        }

        self.visible = visibility(&self.cards, &self.category, &self.search);

        let mut shown = 0;
        for (index, &visible) in self.visible.iter().enumerate() {
            self.view.set_card_visible(index, visible);
            if visible {
                shown += 1;
            }
        }

        let outcome = FilterOutcome {
            visible: shown,
            total: self.cards.len(),
        };
        self.view.set_empty_state(outcome.shows_empty_state());

        tracing::debug!(
            category = %self.category,
            search = %self.search,
            visible = outcome.visible,
            total = outcome.total,
            "listing recomputed"
        );

        outcome
    }

    /// Active category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Raw search term as last entered.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Visibility computed by the last recomputation.
    pub fn visibility(&self) -> &[bool] {
        &self.visible
    }

    pub fn selectors(&self) -> &SelectorGroup {
        &self.selectors
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
