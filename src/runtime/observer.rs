use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::error::Result;

/// Threshold and root margin handed to the browser; `None` keeps the browser default.
#[derive(Debug, Clone, Default)]
pub struct ObserverOptions {
    pub threshold: Option<f64>,
    pub root_margin: Option<String>,
}

/// An `IntersectionObserver` together with its callback. Disconnects on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// The one feature check the theme makes.
    pub fn is_supported(window: &Window) -> bool {
        Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    }

    pub fn new(
        options: &ObserverOptions,
        mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_entry(&entry, &observer);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        if let Some(threshold) = options.threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
