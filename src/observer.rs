use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::NodeRef;

/// Viewport-rooted observer settings.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl ObserverOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px".to_string(),
        }
    }

    pub fn root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    fn to_init(&self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        init.set_root_margin(&self.root_margin);
        init.set_threshold(&JsValue::from_f64(self.threshold));
        init
    }
}

/// Whether a target stays observed after its entry was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    Keep,
    Stop,
}

impl Watch {
    /// One-shot targets are dropped the first time they become visible.
    pub fn until_visible(is_intersecting: bool) -> Self {
        if is_intersecting {
            Watch::Stop
        } else {
            Watch::Keep
        }
    }
}

/// `IntersectionObserver` that owns its JS callback and disconnects on drop.
pub struct Observer {
    inner: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new<F>(options: &ObserverOptions, mut on_entry: F) -> Option<Self>
    where
        F: FnMut(&IntersectionObserverEntry) -> Watch + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if on_entry(&entry) == Watch::Stop {
                    observer.unobserve(&entry.target());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options.to_init()) {
            Ok(inner) => Some(Self {
                inner,
                _callback: callback,
            }),
            Err(err) => {
                warn!("intersection observer unavailable: {:?}", err);
                None
            }
        }
    }

    /// Observer watching the element behind `node`; `None` until it is mounted.
    pub fn on_node<F>(node: &NodeRef, options: &ObserverOptions, on_entry: F) -> Option<Self>
    where
        F: FnMut(&IntersectionObserverEntry) -> Watch + 'static,
    {
        let Some(element) = node.cast::<Element>() else {
            warn!("observed node is not mounted");
            return None;
        };
        let observer = Self::new(options, on_entry)?;
        observer.observe(&element);
        Some(observer)
    }

    pub fn observe(&self, target: &Element) {
        self.inner.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_no_margin() {
        let options = ObserverOptions::new(0.15);
        assert_eq!(options.threshold, 0.15);
        assert_eq!(options.root_margin, "0px");
    }

    #[test]
    fn root_margin_is_replaced() {
        let options = ObserverOptions::new(0.0).root_margin("200px");
        assert_eq!(options.root_margin, "200px");
    }

    #[test]
    fn one_shot_targets_stop_once_visible() {
        assert_eq!(Watch::until_visible(false), Watch::Keep);
        assert_eq!(Watch::until_visible(true), Watch::Stop);
    }
}
