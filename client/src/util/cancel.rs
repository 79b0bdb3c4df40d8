//! Cancellation for timer-driven page loops.
//!
//! Typing and counter loops run until the page goes away. A cloned handle
//! is checked before every step, so `cancel()` stops them at the next tick.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    cancelled: Rc<Cell<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
