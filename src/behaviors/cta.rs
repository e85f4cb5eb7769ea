use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::bindings::Bindings;
use crate::config;
use crate::dom;
use crate::error::BindError;

const PRESSED: &str = "scale(0.95)";
const RELEASED: &str = "scale(1)";

pub fn bind(document: &Document, bindings: &mut Bindings) -> Result<(), BindError> {
    let Some(button) = dom::query(document, config::CTA_BUTTON) else {
        return Ok(());
    };
    let pressed = button.clone();
    bindings.listen(&button, config::CTA_BUTTON, "click", move |_| {
        dom::set_style(&pressed, "transform", PRESSED);
        let button = pressed.clone();
        Timeout::new(config::CTA_RELEASE_MS, move || {
            if button.is_connected() {
                dom::set_style(&button, "transform", RELEASED);
            }
        })
        .forget();
    })
}
