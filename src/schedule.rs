//! Cancellable timers. Dropping a [`TaskHandle`] cancels its task.

use std::fmt;

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;

    fn schedule_repeating(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle;
}

#[must_use = "dropping a TaskHandle cancels its task"]
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;
