use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;
use web_sys::{Document, Window};

use crate::config::LegacyConfig;
use crate::runtime::dom;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupReport {
    pub hidden: usize,
    pub removed: usize,
    pub cleared: usize,
}

/// Tears down the terminal and matrix-rain effects of the previous theme.
pub fn cleanup(window: &Window, document: &Document, legacy: &LegacyConfig) -> CleanupReport {
    let mut report = CleanupReport::default();

    for selector in &legacy.hidden_selectors {
        for element in dom::query_all(document, selector) {
            dom::set_style(&element, "display", "none");
            report.hidden += 1;
        }
    }

    for selector in &legacy.removed_selectors {
        for element in dom::query_all(document, selector) {
            element.remove();
            report.removed += 1;
        }
    }

    for name in &legacy.global_handles {
        let key = JsValue::from_str(name);
        let present = Reflect::get(window, &key)
            .map(|value| !value.is_null() && !value.is_undefined())
            .unwrap_or(false);
        if present && Reflect::set(window, &key, &JsValue::NULL).unwrap_or(false) {
            report.cleared += 1;
        }
    }

    if report != CleanupReport::default() {
        log::info!(
            "Legacy effects cleaned up: {} hidden, {} removed, {} globals cleared",
            report.hidden,
            report.removed,
            report.cleared
        );
    }
    report
}
