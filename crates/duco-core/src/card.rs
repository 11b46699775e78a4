//! Listing cards and the category sentinels.

use serde::{Deserialize, Serialize};

/// Category value that places no restriction on the listing.
pub const ALL_CATEGORIES: &str = "all";

/// Category assigned to cards that carry no category tag.
pub const OTHER_CATEGORY: &str = "other";

/// A listed content item, as seen by the filter engine.
///
/// Cards are read once at setup and never change afterwards; the engine only
/// decides whether each one is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Category tag, compared verbatim against the active filter.
    pub category: String,

    /// Free-text keywords searched before the full text.
    #[serde(default)]
    pub keywords: String,

    /// Full visible text of the card, the fallback search surface.
    #[serde(default)]
    pub text: String,
}

impl Card {
    /// Create a card with an explicit category and keywords.
    pub fn new(
        category: impl Into<String>,
        keywords: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            keywords: keywords.into(),
            text: text.into(),
        }
    }

    /// Build a card from raw markup attributes.
    ///
    /// An absent or empty category becomes [`OTHER_CATEGORY`]; absent keywords
    /// become the empty string.
    pub fn from_attributes(
        category: Option<&str>,
        keywords: Option<&str>,
        text: impl Into<String>,
    ) -> Self {
        let category = match category {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => OTHER_CATEGORY.to_string(),
        };

        Self {
            category,
            keywords: keywords.unwrap_or_default().to_string(),
            text: text.into(),
        }
    }
}
