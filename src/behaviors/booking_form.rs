use gloo_timers::callback::Timeout;
use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{self, Array};
use web_sys::{Document, Event, FormData, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::bindings::Bindings;
use crate::config;
use crate::dom;
use crate::error::BindError;
use crate::form::FormState;
use crate::notification::{self, Severity};
use crate::validation;

pub fn bind(document: &Document, bindings: &mut Bindings) -> Result<(), BindError> {
    let form: HtmlFormElement = dom::require_by_id(document, config::BOOKING_FORM_ID)?;
    let required = config::REQUIRED_FIELDS
        .iter()
        .map(|id| dom::require_by_id::<HtmlElement>(document, id).map(|element| (*id, element)))
        .collect::<Result<Vec<_>, _>>()?;
    let email: HtmlInputElement = dom::require_by_id(document, config::EMAIL_FIELD_ID)?;
    let phone: HtmlInputElement = dom::require_by_id(document, config::PHONE_FIELD_ID)?;

    {
        let document = document.clone();
        let submitted = form.clone();
        bindings.listen(
            &form,
            format!("#{}", config::BOOKING_FORM_ID),
            "submit",
            move |event: Event| {
                event.prevent_default();
                submit(&document, &submitted, &required);
            },
        )?;
    }

    bind_field_check(bindings, email, validation::is_valid_email, config::INVALID_EMAIL_MESSAGE)?;
    bind_field_check(bindings, phone, validation::is_valid_phone, config::INVALID_PHONE_MESSAGE)?;
    Ok(())
}

fn submit(document: &Document, form: &HtmlFormElement, required: &[(&'static str, HtmlElement)]) {
    let state = match collect(form) {
        Ok(state) => state,
        Err(err) => {
            warn!("could not read booking form: {:?}", err);
            return;
        }
    };
    let live: FormState = required
        .iter()
        .map(|(field, input)| (*field, dom::field_value(input)))
        .collect();
    let choice_selected = dom::query(document, config::CHECKED_CHOICE).is_some();
    let report = validation::validate_booking(&live, choice_selected);

    for (field, input) in required {
        let border = if report.is_blank(field) {
            config::ERROR_COLOR
        } else {
            config::DEFAULT_BORDER_COLOR
        };
        dom::set_style(input, "border-color", border);
    }
    if report.choice_missing {
        flag_choice_labels(document);
    }

    if !report.is_valid() {
        warn!("booking form rejected: {}", report);
        notification::show(config::REQUIRED_FIELDS_MESSAGE, Severity::Error);
        return;
    }

    // Stand-in for sending the booking somewhere.
    match state.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
        Ok(object) => gloo_console::log!("Form submitted:", object),
        Err(err) => warn!("could not convert booking for logging: {}", err),
    }
    info!("booking submitted with {} fields", state.len());
    notification::show(config::BOOKING_SUCCESS_MESSAGE, Severity::Success);
    form.reset();
}

/// Reads every named control the way the browser would submit it.
pub fn collect(form: &HtmlFormElement) -> Result<FormState, JsValue> {
    let data = FormData::new_with_form(form)?;
    let mut state = FormState::default();
    if let Some(entries) = js_sys::try_iter(&data)? {
        for entry in entries {
            let pair: Array = entry?.dyn_into()?;
            let key = pair.get(0).as_string().unwrap_or_default();
            let value = pair.get(1).as_string().unwrap_or_default();
            state.insert(key, value);
        }
    }
    Ok(state)
}

// The reset fires even if the user has picked an option in the meantime.
fn flag_choice_labels(document: &Document) {
    for label in dom::query_all(document, config::CHOICE_LABELS) {
        dom::set_style(&label, "color", config::ERROR_COLOR);
        Timeout::new(config::CHOICE_LABEL_RESET_MS, move || {
            if label.is_connected() {
                dom::clear_style(&label, "color");
            }
        })
        .forget();
    }
}

fn bind_field_check(
    bindings: &mut Bindings,
    input: HtmlInputElement,
    rule: fn(&str) -> bool,
    message: &'static str,
) -> Result<(), BindError> {
    let target = input.clone();
    bindings.listen(&target, format!("#{}", input.id()), "blur", move |_| {
        if validation::passes_on_blur(&input.value(), rule) {
            dom::set_style(&input, "border-color", config::DEFAULT_BORDER_COLOR);
        } else {
            dom::set_style(&input, "border-color", config::ERROR_COLOR);
            notification::show(message, Severity::Error);
        }
    })
}
