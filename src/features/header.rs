use web_sys::Document;

use crate::config::ThemeConfig;
use crate::engine::header::{HeaderFlags, HeaderTracker};
use crate::runtime::dom;
use crate::runtime::scheduler::ScrollScheduler;

/// Hooks the header state machine to the scroll signal. Returns `false` when the page has no header.
pub fn attach(document: &Document, config: &ThemeConfig, scheduler: &ScrollScheduler) -> bool {
    let Some(header) = dom::query_one(document, &config.selectors.header) else {
        log::debug!("No header matching {:?}", config.selectors.header);
        return false;
    };

    let header_config = config.header;
    let mut tracker: Option<HeaderTracker> = None;
    let mut applied: Option<HeaderFlags> = None;
    scheduler.subscribe(move |offset| {
        let flags = tracker
            .get_or_insert_with(|| HeaderTracker::starting_at(header_config, offset))
            .advance(offset);
        if applied == Some(flags) {
            return;
        }
        dom::set_class(&header, "scrolled", flags.scrolled);
        dom::set_style(&header, "transform", flags.transform());
        applied = Some(flags);
    });
    true
}
