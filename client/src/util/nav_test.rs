use super::*;

#[test]
fn fragment_links_target_their_href() {
    assert_eq!(scroll_target(Some("#about"), ""), Some("#about".to_owned()));
}

#[test]
fn hero_buttons_map_by_id() {
    assert_eq!(scroll_target(None, "btnWork"), Some("#projects".to_owned()));
    assert_eq!(scroll_target(None, "projectsTop"), Some("#projects".to_owned()));
    assert_eq!(scroll_target(None, "contactTop"), Some("#contact".to_owned()));
}

#[test]
fn bare_hash_and_external_links_fall_back_to_id() {
    assert_eq!(scroll_target(Some("#"), "contactTop"), Some("#contact".to_owned()));
    assert_eq!(scroll_target(Some("https://example.test"), "elsewhere"), None);
}

#[test]
fn only_home_hash_is_cleared() {
    assert!(should_clear_hash("#home"));
    assert!(!should_clear_hash("#about"));
    assert!(!should_clear_hash(""));
}
