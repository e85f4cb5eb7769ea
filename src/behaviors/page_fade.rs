use gloo_timers::callback::Timeout;
use log::info;
use web_sys::Document;

use crate::bindings::Bindings;
use crate::config;
use crate::dom;
use crate::error::BindError;

pub fn bind(document: &Document, bindings: &mut Bindings) -> Result<(), BindError> {
    if document.ready_state() != "loading" {
        fade_in(document);
        return Ok(());
    }
    let loaded = document.clone();
    bindings.listen(document, "document", "DOMContentLoaded", move |_| fade_in(&loaded))
}

fn fade_in(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    dom::set_style(&body, "opacity", "0");
    dom::set_style(&body, "transition", "opacity 0.5s ease");
    Timeout::new(config::PAGE_FADE_DELAY_MS, move || {
        if body.is_connected() {
            dom::set_style(&body, "opacity", "1");
        }
    })
    .forget();
    info!("booking page loaded");
}
