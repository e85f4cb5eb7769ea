use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Reflect;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::BindError;

pub fn window() -> Result<Window, BindError> {
    web_sys::window().ok_or(BindError::NoWindow)
}

pub fn document() -> Result<Document, BindError> {
    window()?.document().ok_or(BindError::NoDocument)
}

/// Every element matching `selector`, in document order. A selector the
/// browser rejects matches nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn require_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| BindError::UnexpectedElement {
            selector: format!("#{}", id),
            expected: std::any::type_name::<T>(),
        })
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn clear_style(element: &Element, property: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().remove_property(property);
    }
}

pub fn set_css_text(element: &Element, css: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_css_text(css);
    }
}

/// Live `value` of a form control (input, select or textarea).
pub fn field_value(element: &Element) -> String {
    Reflect::get(element, &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}
