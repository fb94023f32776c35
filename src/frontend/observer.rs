//! Viewport intersection and image preloading.

use js_sys::{Array, Function, Promise};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::media::{DEFAULT_ROOT_MARGIN, LAZY_ROOT_MARGIN, VISIBILITY_THRESHOLD};
use crate::error::{LoadError, ObserverError};

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: VISIBILITY_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

impl VisibilityOptions {
    pub fn lazy_media() -> Self {
        Self {
            root_margin: LAZY_ROOT_MARGIN.to_string(),
            ..Self::default()
        }
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Calls `on_visible` once per observed element, the first time it
/// intersects. Disconnects when dropped.
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilityWatcher {
    pub fn new(
        options: &VisibilityOptions,
        mut on_visible: impl FnMut(IntersectionObserverEntry) + 'static,
    ) -> Result<Self, ObserverError> {
        web_sys::window().ok_or(ObserverError::NoWindow)?;

        let callback = EntriesCallback::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    on_visible(entry);
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref::<Function>(),
            &init,
        )
        .map_err(|error| ObserverError::Rejected(describe(&error)))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// One attempt, no retry.
pub async fn preload_resource(url: &str) -> Result<(), LoadError> {
    let image = HtmlImageElement::new().map_err(|_| LoadError::ImageUnavailable)?;
    let loaded = Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);

    let outcome = JsFuture::from(loaded).await;
    image.set_onload(None);
    image.set_onerror(None);

    outcome.map(|_| ()).map_err(|_| LoadError::Failed {
        url: url.to_string(),
    })
}

fn describe(error: &JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{error:?}"))
}
