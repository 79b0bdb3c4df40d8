//! Load-time intro effects: preloader fade and staggered skill bars.

#[cfg(test)]
#[path = "intro_test.rs"]
mod intro_test;

use std::time::Duration;

pub const PRELOADER_DELAY: Duration = Duration::from_millis(650);

pub const SKILL_BAR_SELECTOR: &str = ".bar > i";
pub const DEFAULT_SKILL_WIDTH: &str = "70%";

const SKILL_BAR_BASE_DELAY_MS: u64 = 400;
const SKILL_BAR_STAGGER_MS: u64 = 220;

/// Delay before the `index`-th skill bar fills.
pub fn skill_bar_delay(index: usize) -> Duration {
    let index = u64::try_from(index).unwrap_or(u64::MAX);
    Duration::from_millis(SKILL_BAR_BASE_DELAY_MS.saturating_add(index.saturating_mul(SKILL_BAR_STAGGER_MS)))
}

/// Target width from a bar's `data-width`, falling back to the default.
pub fn skill_bar_width(data_width: Option<&str>) -> &str {
    data_width
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .unwrap_or(DEFAULT_SKILL_WIDTH)
}

/// Browser timers take whole milliseconds as `u32`.
pub fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
