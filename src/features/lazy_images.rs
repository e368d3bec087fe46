use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, Window};

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::runtime::dom;
use crate::runtime::observer::{Observer, ObserverOptions};

const DATA_SRC: &str = "data-src";

/// Moves `data-src` into `src`. Returns `false` for elements without a deferred source.
pub fn resolve(element: &Element) -> bool {
    let Some(src) = element.get_attribute(DATA_SRC) else {
        return false;
    };
    match element.dyn_ref::<HtmlImageElement>() {
        Some(image) => image.set_src(&src),
        None => {
            let _ = element.set_attribute("src", &src);
        }
    }
    let _ = element.remove_attribute(DATA_SRC);
    true
}

pub fn attach(window: &Window, document: &Document, config: &ThemeConfig) -> Result<Option<Observer>> {
    let images = dom::query_all(document, &config.selectors.lazy_image);
    if images.is_empty() {
        return Ok(None);
    }

    if !Observer::is_supported(window) {
        let resolved = images.iter().filter(|image| resolve(image)).count();
        log::info!("IntersectionObserver unavailable, loaded {} images eagerly", resolved);
        return Ok(None);
    }

    let observer = Observer::new(&ObserverOptions::default(), |entry, observer| {
        if entry.is_intersecting() {
            let image = entry.target();
            resolve(&image);
            observer.unobserve(&image);
        }
    })?;
    for image in &images {
        observer.observe(image);
    }
    log::debug!("Lazy loading {} images", images.len());
    Ok(Some(observer))
}
