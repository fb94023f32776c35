//! Project carousel cursor and the detail modal's scroll lock.

use std::rc::Rc;

/// Index over a fixed, non-empty list. Navigation wraps at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    cursor: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    pub fn current(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn prev(&mut self) {
        self.cursor = if self.cursor == 0 {
            self.len - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn next(&mut self) {
        self.cursor = if self.cursor == self.len - 1 {
            0
        } else {
            self.cursor + 1
        };
    }

    /// Indicator buttons only pass indices below `len`.
    pub fn go_to(&mut self, index: usize) {
        self.cursor = index;
    }
}

pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Modal visibility. Holds the scroll lock while open and gives it back on
/// close or drop, whichever happens first.
pub struct Modal {
    lock: Rc<dyn ScrollLock>,
    open: bool,
}

impl Modal {
    pub fn new(lock: Rc<dyn ScrollLock>) -> Self {
        Self { lock, open: false }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.lock.lock();
        self.open = true;
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.lock.unlock();
        self.open = false;
    }
}

impl Drop for Modal {
    fn drop(&mut self) {
        self.close();
    }
}
