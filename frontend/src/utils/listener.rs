use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, EventTarget};

/// An event listener that is removed from its target when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to add {} listener: {:?}", event, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn on_window<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        Self::new(&window, event, handler)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
