//! Scroll-driven presentation behavior for the Factory website theme.
//!
//! The crate compiles to a WebAssembly module that enhances server-rendered
//! markup: header show/hide, scroll-spy navigation, reveal-on-scroll, parallax,
//! lazy images, the mobile menu, and form submission feedback.

use log::{error, info, Level};
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Object, Reflect};

pub mod config;
pub mod error;

pub mod engine {
    pub mod header;
    pub mod menu;
    pub mod nav;
    pub mod parallax;
    pub mod reveal;
    pub mod sections;
    pub mod submit;
    pub mod toast;
}

pub mod runtime {
    pub mod delegate;
    pub mod dom;
    pub mod observer;
    pub mod registry;
    pub mod scheduler;
}

pub mod features {
    pub mod anchors;
    pub mod forms;
    pub mod header;
    pub mod lazy_images;
    pub mod legacy;
    pub mod mobile_nav;
    pub mod parallax;
    pub mod reveal;
    pub mod scroll_spy;
}

pub mod components {
    pub mod notification;
}

pub use config::ThemeConfig;
pub use engine::toast::ToastKind;
pub use error::{Result, ThemeError};

const GLOBAL_API: &str = "factoryTheme";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second module instance on the page finds the logger already installed.
    let _ = console_log::init_with_level(Level::Trace);
    log::set_max_level(config::default_log_level().parse().unwrap_or(log::LevelFilter::Info));

    info!("Loading factory theme");
    if let Err(e) = expose_global_api() {
        error!("Could not expose window.{}: {}", GLOBAL_API, e);
    }
    if let Err(e) = runtime::registry::init_when_ready() {
        error!("Factory theme failed to start: {}", e);
    }
}

#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme() -> std::result::Result<(), JsValue> {
    runtime::registry::init().map_err(|e| {
        error!("Factory theme failed to start: {}", e);
        JsValue::from(e)
    })
}

#[wasm_bindgen(js_name = teardownTheme)]
pub fn teardown_theme() -> bool {
    runtime::registry::teardown()
}

/// `kind` is `success`, `error` or `info`; anything else shows as `info`.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) -> std::result::Result<(), JsValue> {
    components::notification::show_notification(
        message,
        ToastKind::parse(kind.as_deref()),
        runtime::registry::notification_config(),
    )
    .map_err(JsValue::from)
}

/// Publishes `window.factoryTheme = { init, teardown, showNotification }` for page scripts.
fn expose_global_api() -> Result<()> {
    let window = runtime::dom::window()?;
    let api = Object::new();

    let init = Closure::<dyn Fn() -> bool>::new(|| init_theme().is_ok());
    Reflect::set(&api, &JsValue::from_str("init"), &init.into_js_value())?;

    let teardown = Closure::<dyn Fn() -> bool>::new(teardown_theme);
    Reflect::set(&api, &JsValue::from_str("teardown"), &teardown.into_js_value())?;

    let notify = Closure::<dyn Fn(JsValue, JsValue)>::new(|message: JsValue, kind: JsValue| {
        let message = message.as_string().unwrap_or_default();
        if let Err(e) = show_notification(&message, kind.as_string()) {
            error!("Could not show notification: {:?}", e);
        }
    });
    Reflect::set(&api, &JsValue::from_str("showNotification"), &notify.into_js_value())?;

    Reflect::set(&window, &JsValue::from_str(GLOBAL_API), &api)?;
    Ok(())
}
