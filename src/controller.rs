use log::{debug, info};
use web_sys::Document;

use crate::behaviors::{
    booking_form, char_counter, cta, hover, navbar, page_fade, parallax, reveal, smooth_scroll, typing, video,
};
use crate::bindings::Bindings;
use crate::dom;
use crate::error::BindError;

/// Owns every handler bound to the page. Dropping it detaches them all.
pub struct PageInteractionController {
    bindings: Bindings,
}

impl PageInteractionController {
    /// Binds against the current window's document.
    pub fn attach() -> Result<Self, BindError> {
        let document = dom::document()?;
        Self::bind(&document)
    }

    pub fn bind(document: &Document) -> Result<Self, BindError> {
        let window = dom::window()?;
        let mut bindings = Bindings::default();

        smooth_scroll::bind(document, &mut bindings)?;
        reveal::bind(document, &mut bindings)?;
        navbar::bind(&window, document, &mut bindings)?;
        booking_form::bind(document, &mut bindings)?;
        cta::bind(document, &mut bindings)?;
        video::bind(document, &mut bindings)?;
        hover::bind(document, &mut bindings)?;
        parallax::bind(&window, document, &mut bindings)?;
        page_fade::bind(document, &mut bindings)?;
        typing::bind(document, &mut bindings)?;
        char_counter::bind(document, &mut bindings)?;

        info!(
            "page interactions bound: {} listeners, {} observers",
            bindings.listener_count(),
            bindings.observer_count()
        );
        for (event, selector) in bindings.table() {
            debug!("  {} -> {}", event, selector);
        }
        Ok(Self { bindings })
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Keeps the handlers attached for the rest of the page's life.
    pub fn persist(self) {
        std::mem::forget(self);
    }
}
