//! Stat counters that count up after load.

use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::state::counter::{COUNTER_DURATION, COUNTERS, CounterPlan};
use crate::util::cancel::CancelHandle;

/// Start every page counter that exists. Missing counters are skipped.
pub fn start_all(document: &Document, cancel: &CancelHandle) {
    for (id, target) in COUNTERS {
        match document.get_element_by_id(id) {
            Some(el) => start(el, CounterPlan::new(target, COUNTER_DURATION), cancel.clone()),
            None => log::debug!("counter #{id} not on page"),
        }
    }
}

pub fn start(el: Element, plan: CounterPlan, cancel: CancelHandle) {
    spawn_local(async move {
        for value in plan.values() {
            if plan.target > 0 {
                sleep(plan.step).await;
            }
            if cancel.is_cancelled() {
                return;
            }
            el.set_text_content(Some(&value.to_string()));
        }
    });
}
