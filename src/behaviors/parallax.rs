use web_sys::{Document, Window};

use crate::bindings::Bindings;
use crate::config;
use crate::dom;
use crate::error::BindError;

pub fn speed(index: usize) -> f64 {
    config::PARALLAX_BASE_SPEED + index as f64 * config::PARALLAX_SPEED_STEP
}

pub fn transform_for(scroll_y: f64, index: usize) -> String {
    format!("translateY({}px)", scroll_y * speed(index))
}

pub fn bind(window: &Window, document: &Document, bindings: &mut Bindings) -> Result<(), BindError> {
    let scroller = window.clone();
    let document = document.clone();
    // Elements are looked up per event so late additions move too.
    bindings.listen(window, config::FLOATING_ELEMENT, "scroll", move |_| {
        let scroll_y = scroller.scroll_y().unwrap_or(0.0);
        for (index, element) in dom::query_all(&document, config::FLOATING_ELEMENT).iter().enumerate() {
            dom::set_style(element, "transform", &transform_for(scroll_y, index));
        }
    })
}
