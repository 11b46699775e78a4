//! DUCO UI Components
//!
//! Leptos components for pages that render their listings client-side.
//! Filtering follows the same rules as the static pages driven by
//! `duco-web`, because both call into `duco-core`.
//!
//! # Components
//!
//! ## Listing
//! - [`Listing`] - Card grid with filter bar, search box and empty state
//! - [`CategoryFilter`] - Single-select category buttons
//! - [`ListingSearch`] - Search input updating on every edit
//!
//! ## Tabs
//! - [`TabBar`] - Single-select tab buttons
//! - [`TabPanel`] - Panel visible while its tab is selected
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use duco_ui::{CategoryOption, Listing, ListingItem};
//!
//! #[component]
//! fn Opportunities() -> impl IntoView {
//!     let items = Signal::derive(|| vec![
//!         ListingItem::new("1", "Policy Fellow").with_category("research"),
//!     ]);
//!     let options = vec![
//!         CategoryOption::all("All"),
//!         CategoryOption::new("research", "Research"),
//!     ];
//!
//!     view! { <Listing items=items options=options /> }
//! }
//! ```

pub mod listing;
pub mod tabs;

pub use listing::{CategoryFilter, CategoryOption, Listing, ListingItem, ListingSearch};
pub use tabs::{TabBar, TabItem, TabPanel};
