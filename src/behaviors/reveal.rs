use wasm_bindgen::JsValue;
use web_sys::{Document, IntersectionObserverInit};

use crate::bindings::Bindings;
use crate::config;
use crate::dom;
use crate::error::BindError;

pub fn bind(document: &Document, bindings: &mut Bindings) -> Result<(), BindError> {
    let candidates = dom::query_all(document, config::FADE_IN);
    if candidates.is_empty() {
        return Ok(());
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    // Stays observed after reveal; adding the class twice is harmless.
    bindings.observe(config::FADE_IN, Some(&options), &candidates, |entry, _| {
        if entry.is_intersecting() {
            let _ = entry.target().class_list().add_1(config::VISIBLE_CLASS);
        }
    })
}
