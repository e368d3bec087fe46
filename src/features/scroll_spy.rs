use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::ThemeConfig;
use crate::engine::nav::{self, NavLink};
use crate::engine::sections::{self, Section};
use crate::runtime::dom;
use crate::runtime::scheduler::ScrollScheduler;

/// Keeps the `active` class on the nav link of the section under the viewport top.
pub struct ScrollSpy {
    sections: Vec<HtmlElement>,
    links: Vec<(Element, NavLink)>,
    lookahead: f64,
}

impl ScrollSpy {
    fn snapshot(&self) -> Vec<Section> {
        self.sections
            .iter()
            .map(|element| {
                Section::new(
                    element.id(),
                    element.offset_top() as f64,
                    element.client_height() as f64,
                )
            })
            .collect()
    }

    pub fn on_scroll(&mut self, offset: f64) {
        let sections = self.snapshot();
        let current = sections::locate_current(&sections, offset, self.lookahead)
            .map(|section| section.identifier.clone());
        self.activate(current.as_deref());
    }

    pub fn links_to(&self, identifier: &str) -> bool {
        self.links.iter().any(|(_, link)| link.targets(identifier))
    }

    pub fn activate(&mut self, current: Option<&str>) {
        let mut state: Vec<NavLink> = self.links.iter().map(|(_, link)| link.clone()).collect();
        nav::synchronize(&mut state, current);

        for ((element, link), next) in self.links.iter_mut().zip(state) {
            if next.is_active != link.is_active {
                dom::set_class(element, "active", next.is_active);
            }
            *link = next;
        }
    }
}

pub fn attach(
    document: &Document,
    config: &ThemeConfig,
    scheduler: &ScrollScheduler,
) -> Option<Rc<RefCell<ScrollSpy>>> {
    let sections: Vec<HtmlElement> = dom::query_all(document, &config.selectors.section)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect();
    let links: Vec<(Element, NavLink)> = dom::query_all(document, &config.selectors.nav_link)
        .into_iter()
        .map(|element| {
            let mut link = NavLink::from_href(&element.get_attribute("href").unwrap_or_default());
            link.is_active = element.class_list().contains("active");
            (element, link)
        })
        .collect();

    if sections.is_empty() || links.is_empty() {
        log::debug!(
            "Scroll spy skipped: {} sections, {} nav links",
            sections.len(),
            links.len()
        );
        return None;
    }

    let spy = Rc::new(RefCell::new(ScrollSpy {
        sections,
        links,
        lookahead: config.scroll_spy.lookahead,
    }));
    {
        let spy = Rc::clone(&spy);
        scheduler.subscribe(move |offset| spy.borrow_mut().on_scroll(offset));
    }
    Some(spy)
}
