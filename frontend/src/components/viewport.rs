use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Owns an `IntersectionObserver` and its callback. Dropping it disconnects
/// the observer, so no notification arrives after the owner is gone.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// `on_enter` is called with every observed element that starts
    /// intersecting the viewport.
    pub fn new<F>(threshold: f64, root_margin: &str, mut on_enter: F) -> Result<Self, JsValue>
    where
        F: FnMut(Element) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_enter(entry.target());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Observes every element in the document matching `selector` and
    /// returns how many were found.
    pub fn observe_all(&self, selector: &str) -> Result<u32, JsValue> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let nodes = document.query_selector_all(selector)?;
        let mut observed = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                self.observer.observe(&element);
                observed += 1;
            }
        }
        Ok(observed)
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
