//! Debounce, throttle and memoize wrappers for callbacks.

use serde::Serialize;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::logging::{log_event, LogLevel};
use crate::schedule::{Scheduler, TaskHandle};

/// Trailing-edge debounce: runs the last call once `wait_ms` passes quietly.
pub struct Debounced<A> {
    run: Rc<dyn Fn(A)>,
    wait_ms: u32,
    scheduler: Rc<dyn Scheduler>,
    pending: RefCell<Option<TaskHandle>>,
}

pub fn debounce<A: 'static>(
    f: impl Fn(A) + 'static,
    wait_ms: u32,
    scheduler: Rc<dyn Scheduler>,
) -> Debounced<A> {
    Debounced {
        run: Rc::new(f),
        wait_ms,
        scheduler,
        pending: RefCell::new(None),
    }
}

impl<A: 'static> Debounced<A> {
    pub fn call(&self, args: A) {
        let run = Rc::clone(&self.run);
        let handle = self
            .scheduler
            .schedule(self.wait_ms, Box::new(move || run(args)));
        // The replaced handle drops here, cancelling the earlier call.
        self.pending.replace(Some(handle));
    }
}

/// Leading-edge throttle. Calls inside the window are dropped, not queued.
pub struct Throttled<A> {
    run: Box<dyn Fn(A)>,
    limit_ms: u32,
    scheduler: Rc<dyn Scheduler>,
    in_window: Rc<Cell<bool>>,
    reopen: RefCell<Option<TaskHandle>>,
}

pub fn throttle<A: 'static>(
    f: impl Fn(A) + 'static,
    limit_ms: u32,
    scheduler: Rc<dyn Scheduler>,
) -> Throttled<A> {
    Throttled {
        run: Box::new(f),
        limit_ms,
        scheduler,
        in_window: Rc::new(Cell::new(false)),
        reopen: RefCell::new(None),
    }
}

impl<A: 'static> Throttled<A> {
    /// Returns whether the wrapped function ran.
    pub fn call(&self, args: A) -> bool {
        if self.in_window.get() {
            return false;
        }

        (self.run)(args);
        self.in_window.set(true);

        let in_window = Rc::clone(&self.in_window);
        let handle = self
            .scheduler
            .schedule(self.limit_ms, Box::new(move || in_window.set(false)));
        self.reopen.replace(Some(handle));
        true
    }
}

/// Caches results by the JSON form of the argument. The cache never evicts.
pub struct Memoized<A, R> {
    run: Box<dyn Fn(&A) -> R>,
    cache: RefCell<HashMap<String, R>>,
}

pub fn memoize<A, R>(f: impl Fn(&A) -> R + 'static) -> Memoized<A, R>
where
    A: Serialize,
    R: Clone,
{
    Memoized {
        run: Box::new(f),
        cache: RefCell::new(HashMap::new()),
    }
}

impl<A, R> Memoized<A, R>
where
    A: Serialize,
    R: Clone,
{
    pub fn call(&self, args: &A) -> R {
        let key = match serde_json::to_string(args) {
            Ok(key) => key,
            Err(error) => {
                log_event(
                    LogLevel::Warn,
                    "memoize.unserializable_args",
                    json!({ "error": error.to_string() }),
                );
                return (self.run)(args);
            }
        };

        if let Some(hit) = self.cache.borrow().get(&key) {
            return hit.clone();
        }

        let value = (self.run)(args);
        self.cache.borrow_mut().insert(key, value.clone());
        value
    }

    #[cfg(test)]
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}
