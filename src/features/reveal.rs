use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::config::ThemeConfig;
use crate::engine::reveal::VisibilityLatch;
use crate::error::Result;
use crate::runtime::dom;
use crate::runtime::observer::{Observer, ObserverOptions};

struct Revealed {
    element: Element,
    latch: VisibilityLatch,
}

impl Revealed {
    fn record(&mut self, is_intersecting: bool) {
        if self.latch.record(is_intersecting) {
            dom::set_class(&self.element, "visible", true);
        }
    }
}

/// Adds `visible` to scroll-animated elements the first time they enter the viewport.
///
/// Without `IntersectionObserver` everything is revealed immediately and no observer is returned.
pub fn attach(window: &Window, document: &Document, config: &ThemeConfig) -> Result<Option<Observer>> {
    let mut elements: Vec<Revealed> = dom::query_all(document, &config.selectors.scroll_animate)
        .into_iter()
        .map(|element| Revealed {
            element,
            latch: VisibilityLatch::new(),
        })
        .collect();

    if elements.is_empty() {
        return Ok(None);
    }

    if !Observer::is_supported(window) {
        log::info!("IntersectionObserver unavailable, revealing {} elements", elements.len());
        for revealed in elements.iter_mut() {
            revealed.record(true);
        }
        return Ok(None);
    }

    let options = ObserverOptions {
        threshold: Some(config.reveal.threshold),
        root_margin: Some(config.reveal.root_margin.clone()),
    };
    let targets: Vec<Element> = elements.iter().map(|r| r.element.clone()).collect();
    let elements = Rc::new(RefCell::new(elements));
    let observer = Observer::new(&options, move |entry, _| {
        let target = entry.target();
        let mut elements = elements.borrow_mut();
        if let Some(revealed) = elements.iter_mut().find(|r| r.element == target) {
            revealed.record(entry.is_intersecting());
        }
    })?;

    for target in &targets {
        observer.observe(target);
    }
    log::debug!("Observing {} scroll-animated elements", targets.len());
    Ok(Some(observer))
}
