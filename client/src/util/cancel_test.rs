use super::*;
use crate::state::typing::TypingAnimator;

#[test]
fn new_handle_is_live() {
    assert!(!CancelHandle::default().is_cancelled());
}

#[test]
fn cancel_is_visible_through_clones() {
    let handle = CancelHandle::default();
    let loop_copy = handle.clone();
    handle.cancel();
    assert!(loop_copy.is_cancelled());
}

#[test]
fn cancelled_loop_stops_before_next_step() {
    let handle = CancelHandle::default();
    let mut animator = TypingAnimator::new(["abc"]);
    let mut frames = Vec::new();

    while !handle.is_cancelled() {
        let Some(frame) = animator.tick() else { break };
        frames.push(frame.text);
        if frames.len() == 2 {
            handle.cancel();
        }
    }

    assert_eq!(frames, vec!["a", "ab"]);
}
