//! Scrollspy and back-to-top arithmetic.
//!
//! The current section is the last one, in document order, whose top edge
//! sits at or above the scroll position plus a fixed header offset. Later
//! sections win ties because the scan keeps overwriting as it goes.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Added to the scroll position so a section counts as current slightly
/// before its top reaches the viewport edge.
pub const SCROLL_OFFSET: f64 = 120.0;

/// Scroll depth past which the back-to-top control shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    /// Empty when the section has no id attribute.
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Id of the current section, or `None` when no section has an id.
///
/// Sections without an id never become current. When nothing is above the
/// scroll position the first section with an id is used.
pub fn current_section(sections: &[SectionOffset], scroll_y: f64) -> Option<&str> {
    let pos = scroll_y + SCROLL_OFFSET;
    let mut current = sections.iter().find(|s| !s.id.is_empty()).map(|s| s.id.as_str());
    for section in sections {
        if section.top <= pos && !section.id.is_empty() {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Whether a nav link's `href` points at `current`.
pub fn link_is_active(href: Option<&str>, current: Option<&str>) -> bool {
    match (href.and_then(|h| h.strip_prefix('#')), current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Tracks the last computed section so callers can tell when it moved.
#[derive(Clone, Debug, Default)]
pub struct ScrollSpyController {
    current: Option<String>,
}

impl ScrollSpyController {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Recompute the current section. Returns `true` when it changed.
    pub fn update(&mut self, sections: &[SectionOffset], scroll_y: f64) -> bool {
        let next = current_section(sections, scroll_y).map(str::to_owned);
        let changed = next != self.current;
        self.current = next;
        changed
    }

    pub fn is_active(&self, href: Option<&str>) -> bool {
        link_is_active(href, self.current())
    }
}
