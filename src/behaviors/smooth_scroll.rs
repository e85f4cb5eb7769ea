use log::debug;
use web_sys::{Document, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::bindings::Bindings;
use crate::config;
use crate::dom;
use crate::error::BindError;

pub fn bind(document: &Document, bindings: &mut Bindings) -> Result<(), BindError> {
    for anchor in dom::query_all(document, config::FRAGMENT_LINKS) {
        let selector = format!("a[href=\"{}\"]", anchor.get_attribute("href").unwrap_or_default());
        let document = document.clone();
        let link = anchor.clone();
        bindings.listen(&anchor, selector, "click", move |event: Event| {
            event.prevent_default();
            if let Some(href) = link.get_attribute("href") {
                scroll_to_fragment(&document, &href);
            }
        })?;
    }
    Ok(())
}

/// Smoothly scrolls the element named by `fragment` to the top of the
/// viewport. Returns whether a target was found.
pub fn scroll_to_fragment(document: &Document, fragment: &str) -> bool {
    let target = match document.query_selector(fragment) {
        Ok(Some(target)) => target,
        Ok(None) => return false,
        Err(_) => {
            debug!("`{}` is not a usable selector", fragment);
            return false;
        }
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
