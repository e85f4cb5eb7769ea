use log::debug;
use web_sys::{Document, Window};

use crate::bindings::Bindings;
use crate::config;
use crate::dom;
use crate::error::BindError;

pub fn background_for(scroll_y: f64) -> &'static str {
    if scroll_y > config::NAVBAR_SCROLL_THRESHOLD {
        config::NAVBAR_BACKGROUND_SCROLLED
    } else {
        config::NAVBAR_BACKGROUND_TOP
    }
}

pub fn bind(window: &Window, document: &Document, bindings: &mut Bindings) -> Result<(), BindError> {
    let Some(navbar) = dom::query(document, config::NAVBAR) else {
        debug!("no {} on this page", config::NAVBAR);
        return Ok(());
    };
    let scroller = window.clone();
    bindings.listen(window, config::NAVBAR, "scroll", move |_| {
        let scroll_y = scroller.scroll_y().unwrap_or(0.0);
        dom::set_style(&navbar, "background", background_for(scroll_y));
    })
}
