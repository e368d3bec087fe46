use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;
use yew::AppHandle;

use crate::config::NotificationConfig;
use crate::engine::toast::{ToastKind, ToastStage};
use crate::error::{Result, ThemeError};
use crate::runtime::dom;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    /// The notification element itself; the component renders the message into it.
    pub host: Element,
    pub message: AttrValue,
    pub timings: NotificationConfig,
    pub on_detach: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let stage = use_state(|| ToastStage::Entering);

    {
        let stage_setter = stage.setter();
        let host = props.host.clone();
        let timings = props.timings;
        let on_detach = props.on_detach.clone();
        use_effect_with_deps(
            move |current: &ToastStage| {
                let current = *current;
                dom::set_class(&host, "show", current.shows());

                let timeout = Timeout::new(current.delay(&timings), move || match current.next() {
                    Some(next) => stage_setter.set(next),
                    None => on_detach.emit(()),
                });
                move || drop(timeout)
            },
            *stage,
        );
    }

    html! { { props.message.clone() } }
}

/// Appends a notification to `<body>`, shows it, and detaches it once its timings run out.
pub fn show_notification(message: &str, kind: ToastKind, timings: NotificationConfig) -> Result<()> {
    let document = dom::document()?;
    let body = document.body().ok_or(ThemeError::NoBody)?;

    let host = document.create_element("div")?;
    host.set_class_name(&kind.class_name());
    body.append_child(&host)?;

    let handle: Rc<RefCell<Option<AppHandle<Toast>>>> = Rc::default();
    let on_detach = {
        let handle = Rc::clone(&handle);
        let host = host.clone();
        // Runs from the toast's own timer, so unmounting waits for the next task.
        Callback::from(move |_| {
            let handle = Rc::clone(&handle);
            let host = host.clone();
            spawn_local(async move {
                let app = handle.borrow_mut().take();
                if let Some(app) = app {
                    app.destroy();
                }
                host.remove();
            });
        })
    };

    let app = yew::Renderer::<Toast>::with_root_and_props(
        host.clone(),
        ToastProps {
            host,
            message: AttrValue::from(message.to_string()),
            timings,
            on_detach,
        },
    )
    .render();
    *handle.borrow_mut() = Some(app);

    log::debug!("Notification ({}): {}", kind.as_str(), message);
    Ok(())
}
