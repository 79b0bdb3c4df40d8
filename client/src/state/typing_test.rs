use super::*;

fn texts(animator: &mut TypingAnimator, ticks: usize) -> Vec<String> {
    (0..ticks)
        .filter_map(|_| animator.tick())
        .map(|frame| frame.text)
        .collect()
}

#[test]
fn single_phrase_types_then_deletes_then_retypes() {
    let mut animator = TypingAnimator::new(["AB"]);

    assert_eq!(animator.tick(), Some(Frame { text: "A".into(), delay: TYPE_DELAY }));
    assert_eq!(animator.tick(), Some(Frame { text: "AB".into(), delay: HOLD_DELAY }));
    assert_eq!(animator.tick(), Some(Frame { text: "A".into(), delay: DELETE_DELAY }));
    assert_eq!(animator.tick(), Some(Frame { text: String::new(), delay: TYPE_DELAY }));
    assert_eq!(animator.phrase_index(), 0);
    assert_eq!(animator.tick(), Some(Frame { text: "A".into(), delay: TYPE_DELAY }));
    assert_eq!(animator.tick(), Some(Frame { text: "AB".into(), delay: HOLD_DELAY }));
}

#[test]
fn advances_and_wraps_between_phrases() {
    let mut animator = TypingAnimator::new(["ab", "c"]);
    assert_eq!(texts(&mut animator, 4), vec!["a", "ab", "a", ""]);
    assert_eq!(animator.phrase_index(), 1);
    assert_eq!(texts(&mut animator, 2), vec!["c", ""]);
    assert_eq!(animator.phrase_index(), 0);
}

#[test]
fn empty_list_never_yields() {
    let mut animator = TypingAnimator::new(Vec::<String>::new());
    assert!(animator.is_empty());
    assert_eq!(animator.tick(), None);
    assert_eq!(animator.tick(), None);
}

#[test]
fn empty_phrases_are_skipped() {
    let mut animator = TypingAnimator::new(["", "x", ""]);
    assert!(!animator.is_empty());
    assert_eq!(texts(&mut animator, 3), vec!["x", "", "x"]);
}

#[test]
fn cursor_counts_chars_not_bytes() {
    let mut animator = TypingAnimator::new(["é⚡"]);
    assert_eq!(texts(&mut animator, 3), vec!["é", "é⚡", "é"]);
}

#[test]
fn direction_flips_at_phrase_end() {
    let mut animator = TypingAnimator::new(["a"]);
    assert_eq!(animator.direction(), Direction::Forward);
    let _ = animator.tick();
    assert_eq!(animator.direction(), Direction::Backward);
    let _ = animator.tick();
    assert_eq!(animator.direction(), Direction::Forward);
}

#[test]
fn default_phrases_are_all_non_empty() {
    let animator = TypingAnimator::new(DEFAULT_PHRASES);
    assert_eq!(animator.phrases.len(), DEFAULT_PHRASES.len());
}
