//! Numeric counter pacing.
//!
//! A counter climbs from zero to its target over roughly a fixed duration.
//! Steps never fire faster than [`MIN_STEP`]; when the target is too large
//! to reach one-by-one at that pace the increment grows instead, and the
//! final value is clamped so the display always lands exactly on target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::time::Duration;

pub const MIN_STEP: Duration = Duration::from_millis(20);
pub const COUNTER_DURATION: Duration = Duration::from_millis(900);

/// Stat counters on the page: element id and target value.
pub const COUNTERS: [(&str, u32); 4] = [("counterExp", 20), ("counterProjects", 12), ("years", 1), ("projectsCount", 12)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterPlan {
    pub target: u32,
    pub step: Duration,
    pub increment: u32,
}

impl CounterPlan {
    pub fn new(target: u32, duration: Duration) -> Self {
        if target == 0 {
            return Self { target, step: MIN_STEP, increment: 1 };
        }
        let max_steps = u32::try_from(duration.as_millis() / MIN_STEP.as_millis())
            .unwrap_or(u32::MAX)
            .max(1);
        let steps = target.min(max_steps);
        let increment = target.div_ceil(steps);
        let step = (duration / steps).max(MIN_STEP);
        Self { target, step, increment }
    }

    /// Values to display, one per step, ending at `target`.
    pub fn values(&self) -> impl Iterator<Item = u32> + use<> {
        let Self { target, increment, .. } = *self;
        let mut current = 0_u32;
        let mut done = false;
        std::iter::from_fn(move || {
            if done {
                return None;
            }
            current = current.saturating_add(increment).min(target);
            done = current >= target;
            Some(current)
        })
    }
}
