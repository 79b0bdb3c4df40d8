//! Smooth-scroll targets for navigation links and call-to-action buttons.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Elements whose clicks scroll to a section instead of jumping.
pub const SCROLL_TRIGGER_SELECTOR: &str = "a.navlink, #btnWork, #projectsTop, #contactTop";

/// Hash that is stripped on load so the page opens at the top.
pub const HOME_HASH: &str = "#home";

/// Section selector a trigger scrolls to.
///
/// Links use their own `#fragment`. The hero buttons carry no `href` and
/// map by id.
pub fn scroll_target(href: Option<&str>, element_id: &str) -> Option<String> {
    if let Some(href) = href.map(str::trim).filter(|h| h.len() > 1 && h.starts_with('#')) {
        return Some(href.to_owned());
    }
    match element_id {
        "btnWork" | "projectsTop" => Some("#projects".to_owned()),
        "contactTop" => Some("#contact".to_owned()),
        _ => None,
    }
}

pub fn should_clear_hash(hash: &str) -> bool {
    hash == HOME_HASH
}
