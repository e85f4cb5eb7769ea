use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::bindings::Bindings;
use crate::config;
use crate::dom;
use crate::error::BindError;

/// Successively longer prefixes of a string, one character at a time.
pub struct TypingFrames<'a> {
    text: &'a str,
    shown: usize,
}

impl<'a> TypingFrames<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, shown: 0 }
    }
}

impl<'a> Iterator for TypingFrames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let next = self.text[self.shown..].chars().next()?;
        self.shown += next.len_utf8();
        Some(&self.text[..self.shown])
    }
}

pub fn bind(document: &Document, bindings: &mut Bindings) -> Result<(), BindError> {
    let Some(hero) = dom::query(document, config::HERO_SECTION) else {
        return Ok(());
    };
    let fired = Rc::new(Cell::new(false));
    bindings.observe(config::HERO_SECTION, None, &[hero], move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let hero = entry.target();
        observer.unobserve(&hero);
        if fired.replace(true) {
            return;
        }
        if let Ok(Some(subtitle)) = hero.query_selector(config::HERO_SUBTITLE) {
            type_out(subtitle);
        }
    })
}

fn type_out(subtitle: Element) {
    let text = subtitle.text_content().unwrap_or_default();
    subtitle.set_text_content(Some(""));
    spawn_local(async move {
        TimeoutFuture::new(config::TYPING_START_DELAY_MS).await;
        for frame in TypingFrames::new(&text) {
            if !subtitle.is_connected() {
                debug!("hero subtitle removed while typing");
                return;
            }
            subtitle.set_text_content(Some(frame));
            TimeoutFuture::new(config::TYPING_CHAR_MS).await;
        }
    });
}
