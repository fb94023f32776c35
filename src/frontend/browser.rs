use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, CssStyleDeclaration, Storage};

use crate::carousel::ScrollLock;
use crate::config::RuntimeConfig;
use crate::routes::Route;
use crate::schedule::{Scheduler, TaskHandle};

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn load_runtime_config() -> RuntimeConfig {
    RuntimeConfig::from_lookup(read_stored, prefers_reduced_motion())
}

pub fn location_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn current_route() -> Route {
    Route::from_hash(&location_hash()).unwrap_or(Route::Home)
}

/// `setTimeout`/`setInterval` behind the [`Scheduler`] seam.
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let timeout = Timeout::new(delay_ms, task);
        TaskHandle::new(move || drop(timeout))
    }

    fn schedule_repeating(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
        let interval = Interval::new(period_ms, task);
        TaskHandle::new(move || drop(interval))
    }
}

fn body_style() -> Option<CssStyleDeclaration> {
    Some(window()?.document()?.body()?.style())
}

/// Sets `overflow: hidden` on `<body>` and puts back whatever was there.
#[derive(Default)]
pub struct BodyScrollLock {
    previous: RefCell<Option<String>>,
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        let Some(style) = body_style() else {
            return;
        };
        let previous = style.get_property_value("overflow").unwrap_or_default();
        self.previous.replace(Some(previous));
        let _ = style.set_property("overflow", "hidden");
    }

    fn unlock(&self) {
        let Some(previous) = self.previous.take() else {
            return;
        };
        let Some(style) = body_style() else {
            return;
        };
        if previous.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", &previous);
        }
    }
}

/// `hashchange` subscription, removed on drop.
pub struct HashListener {
    callback: Closure<dyn FnMut()>,
}

impl HashListener {
    pub fn new(on_change: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut()>::new(on_change);
        window()?
            .add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { callback })
    }
}

impl Drop for HashListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                "hashchange",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}
