use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlTextAreaElement};

use crate::bindings::Bindings;
use crate::config;
use crate::dom;
use crate::error::BindError;

const COUNTER_STYLE: &str = "text-align: right; font-size: 0.8rem; color: #7F8C8D; margin-top: 5px;";

/// Characters left, counted in UTF-16 units like the browser's `maxlength`.
pub fn remaining(max_length: i64, value: &str) -> i64 {
    max_length - value.encode_utf16().count() as i64
}

pub fn label(remaining: i64) -> String {
    format!("{} characters remaining", remaining)
}

pub fn color(remaining: i64) -> &'static str {
    if remaining < config::COUNTER_WARNING_BELOW {
        config::ERROR_COLOR
    } else {
        config::MUTED_TEXT_COLOR
    }
}

pub fn bind(document: &Document, bindings: &mut Bindings) -> Result<(), BindError> {
    for element in dom::query_all(document, config::COUNTED_TEXTAREAS) {
        let Some(max_length) = element
            .get_attribute("maxlength")
            .and_then(|value| value.trim().parse::<i64>().ok())
        else {
            continue;
        };
        let Some(parent) = element.parent_node() else {
            continue;
        };
        let Ok(textarea) = element.clone().dyn_into::<HtmlTextAreaElement>() else {
            continue;
        };

        let counter = document
            .create_element("div")
            .map_err(BindError::js("createElement"))?;
        dom::set_css_text(&counter, COUNTER_STYLE);
        parent
            .append_child(&counter)
            .map_err(BindError::js("appendChild"))?;

        let refresh = move || {
            let left = remaining(max_length, &textarea.value());
            counter.set_text_content(Some(&label(left)));
            dom::set_style(&counter, "color", color(left));
        };
        refresh();
        bindings.listen(&element, "textarea[maxlength]", "input", move |_| refresh())?;
    }
    Ok(())
}
