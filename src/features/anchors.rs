use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::ThemeConfig;
use crate::engine::nav;
use crate::features::scroll_spy::ScrollSpy;
use crate::runtime::delegate::{Delegator, Role};

/// Hrefs that point at the page itself rather than a section.
fn is_bare_fragment(href: &str) -> bool {
    href == "#" || href == "#/"
}

/// Smooth-scrolls in-page anchor targets into view.
pub fn attach(
    document: &Document,
    config: &ThemeConfig,
    clicks: &Delegator,
    spy: Option<Rc<RefCell<ScrollSpy>>>,
) {
    clicks.route(Role::Anchor, &config.selectors.anchor);

    let document = document.clone();
    clicks.on(move |event, hits| {
        let Some(anchor) = hits.get(Role::Anchor) else {
            return;
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        if is_bare_fragment(&href) {
            return;
        }
        event.prevent_default();

        let Some(identifier) = nav::target_identifier(&href) else {
            return;
        };
        let Some(target) = document.get_element_by_id(identifier) else {
            log::debug!("No element with id {:?}", identifier);
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);

        if let Some(spy) = &spy {
            let mut spy = spy.borrow_mut();
            if spy.links_to(identifier) {
                spy.activate(Some(identifier));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_fragments_are_left_alone() {
        assert!(is_bare_fragment("#"));
        assert!(is_bare_fragment("#/"));
        assert!(!is_bare_fragment("#about"));
        assert!(!is_bare_fragment("#/about"));
    }
}
