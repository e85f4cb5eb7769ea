//! The event-binding table.
//!
//! Every behavior registers its handlers here as `{event, selector, handler}`
//! entries. The table owns the JS closures, so they stay alive for as long as
//! the table does; dropping an entry detaches its listener (or disconnects its
//! observer).

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::BindError;

pub struct EventBinding {
    event: &'static str,
    selector: String,
    target: EventTarget,
    handler: Closure<dyn FnMut(Event)>,
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.handler.as_ref().unchecked_ref());
    }
}

pub struct ObserverBinding {
    selector: String,
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Default)]
pub struct Bindings {
    events: Vec<EventBinding>,
    observers: Vec<ObserverBinding>,
}

impl Bindings {
    pub fn listen<F>(
        &mut self,
        target: &EventTarget,
        selector: impl Into<String>,
        event: &'static str,
        handler: F,
    ) -> Result<(), BindError>
    where
        F: FnMut(Event) + 'static,
    {
        let handler = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .map_err(BindError::js("addEventListener"))?;
        self.events.push(EventBinding {
            event,
            selector: selector.into(),
            target: target.clone(),
            handler,
        });
        Ok(())
    }

    /// Observes `targets` with a single intersection observer. The handler is
    /// called once per entry, together with the observer so it can unobserve.
    pub fn observe<F>(
        &mut self,
        selector: impl Into<String>,
        options: Option<&IntersectionObserverInit>,
        targets: &[Element],
        mut handler: F,
    ) -> Result<(), BindError>
    where
        F: FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(entry, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = match options {
            Some(options) => IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options),
            None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
        }
        .map_err(BindError::js("IntersectionObserver"))?;

        for target in targets {
            observer.observe(target);
        }
        self.observers.push(ObserverBinding {
            selector: selector.into(),
            observer,
            _callback: callback,
        });
        Ok(())
    }

    pub fn listener_count(&self) -> usize {
        self.events.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// `(event, selector)` pairs in registration order; observers are listed
    /// under the pseudo-event `intersect`.
    pub fn table(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.events
            .iter()
            .map(|binding| (binding.event, binding.selector.as_str()))
            .chain(self.observers.iter().map(|binding| ("intersect", binding.selector.as_str())))
    }
}
