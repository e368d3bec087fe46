use web_sys::{Document, Element};

use crate::config::ThemeConfig;
use crate::engine::parallax;
use crate::runtime::dom;
use crate::runtime::scheduler::ScrollScheduler;

pub fn attach(document: &Document, config: &ThemeConfig, scheduler: &ScrollScheduler) -> bool {
    let default_speed = config.parallax.default_speed;
    let layers: Vec<(Element, f64)> = dom::query_all(document, &config.selectors.parallax)
        .into_iter()
        .map(|element| {
            let speed =
                parallax::parse_speed(element.get_attribute("data-speed").as_deref(), default_speed);
            (element, speed)
        })
        .collect();

    if layers.is_empty() {
        return false;
    }

    log::debug!("Parallax on {} elements", layers.len());
    scheduler.subscribe(move |offset| {
        for (element, speed) in &layers {
            dom::set_style(element, "transform", &parallax::transform_for(offset, *speed));
        }
    });
    true
}
