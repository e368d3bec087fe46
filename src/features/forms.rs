use std::collections::BTreeMap;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::components::notification::show_notification;
use crate::config::ThemeConfig;
use crate::engine::submit::InFlight;
use crate::engine::toast::ToastKind;
use crate::error::{Result, ThemeError};
use crate::runtime::delegate::{Delegator, Role};

/// Shows the sending label on a submit button and puts the button back when dropped.
pub struct ButtonGuard {
    button: HtmlButtonElement,
    original_label: Option<String>,
}

impl ButtonGuard {
    pub fn engage(button: HtmlButtonElement, sending_label: &str) -> Self {
        let original_label = button.text_content();
        button.set_text_content(Some(sending_label));
        button.set_disabled(true);
        Self {
            button,
            original_label,
        }
    }
}

impl Drop for ButtonGuard {
    fn drop(&mut self) {
        self.button.set_text_content(self.original_label.as_deref());
        self.button.set_disabled(false);
    }
}

/// Whether an `<input>` of this type contributes a value to the submitted payload.
fn input_contributes(kind: &str, checked: bool) -> bool {
    match kind {
        "submit" | "button" | "reset" | "image" | "file" => false,
        "checkbox" | "radio" => checked,
        _ => true,
    }
}

fn collect_fields(form: &HtmlFormElement) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    let elements = form.elements();
    for element in (0..elements.length()).filter_map(|i| elements.item(i)) {
        let (name, value) = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            if !input_contributes(&input.type_(), input.checked()) {
                continue;
            }
            (input.name(), input.value())
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            (area.name(), area.value())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            (select.name(), select.value())
        } else {
            continue;
        };
        if !name.is_empty() {
            fields.insert(name, value);
        }
    }
    fields
}

async fn submit(form: &HtmlFormElement, endpoint: Option<&str>, simulated_delay_ms: u32) -> Result<()> {
    let Some(endpoint) = endpoint else {
        TimeoutFuture::new(simulated_delay_ms).await;
        return Ok(());
    };

    let fields = collect_fields(form);
    let response = Request::post(endpoint).json(&fields)?.send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(ThemeError::Status(response.status()))
    }
}

/// Handles submits of theme forms with a per-form in-flight lock.
pub fn attach(config: Rc<ThemeConfig>, submits: &Delegator) {
    submits.route(Role::Form, &config.selectors.form);

    let in_flight: InFlight<HtmlFormElement> = InFlight::new();
    submits.on(move |event, hits| {
        let Some(form) = hits
            .get(Role::Form)
            .and_then(|element| element.dyn_ref::<HtmlFormElement>())
            .cloned()
        else {
            return;
        };
        event.prevent_default();

        let Some(ticket) = in_flight.try_acquire(&form) else {
            log::debug!("Submission already in flight, ignoring submit");
            return;
        };

        let button = form
            .query_selector(&config.selectors.submit_button)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok());
        let guard = button.map(|button| ButtonGuard::engage(button, &config.forms.sending_label));

        let endpoint = form
            .get_attribute("data-endpoint")
            .filter(|endpoint| !endpoint.trim().is_empty())
            .or_else(|| config.forms.endpoint.clone());
        let config = Rc::clone(&config);

        spawn_local(async move {
            let forms = &config.forms;
            let timings = config.notifications;
            let outcome = submit(&form, endpoint.as_deref(), forms.simulated_delay_ms).await;

            let shown = match outcome {
                Ok(()) => {
                    log::info!("Form submitted");
                    form.reset();
                    show_notification(&forms.success_message, ToastKind::Success, timings)
                }
                Err(e) => {
                    log::warn!("Form submission failed: {}", e);
                    show_notification(&forms.error_message, ToastKind::Error, timings)
                }
            };
            if let Err(e) = shown {
                log::error!("Could not show notification: {}", e);
            }

            drop(guard);
            drop(ticket);
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_and_files_are_not_submitted() {
        for kind in ["submit", "button", "reset", "image", "file"] {
            assert!(!input_contributes(kind, true), "{kind}");
        }
    }

    #[test]
    fn unchecked_choices_are_skipped() {
        assert!(!input_contributes("checkbox", false));
        assert!(input_contributes("checkbox", true));
        assert!(!input_contributes("radio", false));
        assert!(input_contributes("radio", true));
    }

    #[test]
    fn text_like_inputs_always_contribute() {
        for kind in ["text", "email", "tel", "hidden", "number"] {
            assert!(input_contributes(kind, false), "{kind}");
        }
    }
}
