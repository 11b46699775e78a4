//! Timed page effects: footer year and the staggered entry animation.

use duco_core::{Result, SiteConfig, StaggerSchedule};
use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::dom;

/// Write the current year into the footer placeholder.
pub fn write_year(document: &Document, config: &SiteConfig) -> Result<()> {
    if let Some(year) = dom::query(document, &config.selectors.year)? {
        let now = js_sys::Date::new_0().get_full_year();
        year.set_text_content(Some(&now.to_string()));
    }
    Ok(())
}

/// Mark the main area loaded after a short delay, then fade cards in one by
/// one.
///
/// Returns the number of cards scheduled, or `None` without a main area.
pub fn stagger_entry(document: &Document, config: &SiteConfig) -> Result<Option<usize>> {
    let Some(main) = dom::query(document, &config.selectors.main)? else {
        return Ok(None);
    };

    let cards = dom::query_all(document, &config.selectors.card)?;
    let count = cards.len();
    let schedule = StaggerSchedule::from(&config.motion);
    let main_class = config.classes.main_loaded.clone();
    let card_class = config.classes.card_loaded.clone();

    Timeout::new(schedule.initial_delay_ms, move || {
        if let Err(e) = dom::set_class(&main, &main_class, true) {
            log::warn!("{e}");
        }

        for (index, delay) in schedule.plan(cards.len()) {
            let card = cards[index].clone();
            let class = card_class.clone();
            Timeout::new(delay, move || {
                if let Err(e) = dom::set_class(&card, &class, true) {
                    log::warn!("{e}");
                }
            })
            .forget();
        }
    })
    .forget();

    Ok(Some(count))
}
