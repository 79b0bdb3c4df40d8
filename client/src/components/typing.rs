//! Typing effect loop.

use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use super::DomError;
use crate::state::typing::{DEFAULT_PHRASES, TypingAnimator};
use crate::util::cancel::CancelHandle;

pub fn mount(document: &Document, cancel: CancelHandle) -> Result<(), DomError> {
    let target = document
        .query_selector(".typing")?
        .ok_or(DomError::MissingElement(".typing"))?;
    init(target, TypingAnimator::new(DEFAULT_PHRASES), cancel);
    Ok(())
}

/// Drive `animator` into `target` until `cancel` fires.
pub fn init(target: Element, mut animator: TypingAnimator, cancel: CancelHandle) {
    if animator.is_empty() {
        log::info!("typing effect has no phrases; skipped");
        return;
    }
    spawn_local(async move {
        while !cancel.is_cancelled() {
            let Some(frame) = animator.tick() else {
                break;
            };
            target.set_text_content(Some(&frame.text));
            sleep(frame.delay).await;
        }
        log::debug!("typing loop stopped");
    });
}
