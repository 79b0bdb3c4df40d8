use super::*;

fn page() -> Vec<SectionOffset> {
    vec![
        SectionOffset::new("home", 0.0),
        SectionOffset::new("about", 600.0),
        SectionOffset::new("projects", 1400.0),
        SectionOffset::new("contact", 2200.0),
    ]
}

#[test]
fn top_of_page_is_first_section() {
    assert_eq!(current_section(&page(), 0.0), Some("home"));
}

#[test]
fn offset_applies_before_section_top() {
    let sections = page();
    assert_eq!(current_section(&sections, 479.0), Some("home"));
    assert_eq!(current_section(&sections, 480.0), Some("about"));
    assert_eq!(current_section(&sections, 5000.0), Some("contact"));
}

#[test]
fn current_is_last_section_at_or_above_position() {
    let sections = page();
    for scroll_y in [0.0, 100.0, 480.0, 900.0, 1280.0, 1500.0, 2080.0, 3000.0] {
        let pos = scroll_y + SCROLL_OFFSET;
        let expected = sections
            .iter()
            .filter(|s| s.top <= pos)
            .last()
            .map_or("home", |s| s.id.as_str());
        assert_eq!(current_section(&sections, scroll_y), Some(expected), "scroll {scroll_y}");
    }
}

#[test]
fn later_section_wins_tie() {
    let sections = vec![SectionOffset::new("a", 0.0), SectionOffset::new("b", 300.0), SectionOffset::new("c", 300.0)];
    assert_eq!(current_section(&sections, 200.0), Some("c"));
}

#[test]
fn sections_without_id_keep_previous() {
    let sections = vec![SectionOffset::new("home", 0.0), SectionOffset::new("", 200.0)];
    assert_eq!(current_section(&sections, 500.0), Some("home"));
}

#[test]
fn first_section_used_when_none_reached() {
    let sections = vec![SectionOffset::new("hero", 300.0), SectionOffset::new("more", 900.0)];
    assert_eq!(current_section(&sections, 0.0), Some("hero"));
}

#[test]
fn no_sections_means_no_current() {
    assert_eq!(current_section(&[], 0.0), None);
}

#[test]
fn link_activity_follows_hash_target() {
    assert!(link_is_active(Some("#about"), Some("about")));
    assert!(!link_is_active(Some("#about"), Some("home")));
    assert!(!link_is_active(Some("about"), Some("about")));
    assert!(!link_is_active(None, Some("about")));
    assert!(!link_is_active(Some("#about"), None));
}

#[test]
fn back_to_top_shows_past_threshold() {
    assert!(!back_to_top_visible(0.0));
    assert!(!back_to_top_visible(400.0));
    assert!(back_to_top_visible(400.5));
}

#[test]
fn controller_reports_changes_only() {
    let sections = page();
    let mut spy = ScrollSpyController::default();
    assert!(spy.update(&sections, 0.0));
    assert!(!spy.update(&sections, 50.0));
    assert!(spy.update(&sections, 1300.0));
    assert_eq!(spy.current(), Some("projects"));
    assert!(spy.is_active(Some("#projects")));
    assert!(!spy.is_active(Some("#home")));
}
