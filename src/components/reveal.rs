use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Fraction of an element that must show before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pulls the bottom edge of the viewport in, so elements reveal once they
/// are properly on screen rather than at the first pixel.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Watches every `.fade-in` element and adds `visible` the first time it
/// intersects. The class is never removed, so re-observing an already
/// revealed element is harmless.
pub struct RevealWatcher {
    observer: IntersectionObserver,
    // keeps the callback alive for as long as the observer can fire
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealWatcher {
    /// `None` when the document or observer support is missing, in which
    /// case elements simply stay in their initial styling.
    pub fn start() -> Option<RevealWatcher> {
        let document = window()?.document()?;

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        if entry.is_intersecting() {
                            let _ = entry.target().class_list().add_1("visible");
                        }
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        if let Ok(nodes) = document.query_selector_all(".fade-in") {
            for i in 0..nodes.length() {
                if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    observer.observe(&element);
                }
            }
        }

        Some(RevealWatcher {
            observer,
            _callback: callback,
        })
    }

    pub fn stop(self) {
        self.observer.disconnect();
    }
}
