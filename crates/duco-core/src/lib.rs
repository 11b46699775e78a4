//! DUCO Core Library
//!
//! Platform-free logic behind the site's interactive pages: configuration,
//! error handling, the listing filter engine, theme preference, and the
//! timing/bookkeeping for entry animations, scroll reveals, counters and tabs.
//!
//! Nothing here touches the browser. The `duco-web` crate implements the
//! [`ListingView`], [`TabView`], [`ThemeTarget`] and [`PreferenceStore`]
//! traits over the live document.

pub mod card;
pub mod config;
pub mod counter;
pub mod error;
pub mod filter;
pub mod reveal;
pub mod select;
pub mod stagger;
pub mod tabs;
pub mod theme;

pub use card::{ALL_CATEGORIES, Card, OTHER_CATEGORY};
pub use config::{SiteConfig, ThemeScope};
pub use counter::{CounterAnimation, Tick};
pub use error::{CoreError, Result};
pub use filter::{FilterOutcome, ListingFilter, ListingView};
pub use reveal::OnceObserver;
pub use select::{Selection, SelectorGroup};
pub use stagger::StaggerSchedule;
pub use tabs::{TabSwitcher, TabView};
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeSwitcher, ThemeTarget};
