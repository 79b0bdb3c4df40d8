//! Load-time effects: preloader, skill bars, counters, footer year.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use super::{DomError, counters, listen, query_html, set_style};
use crate::util::cancel::CancelHandle;
use crate::util::intro::{PRELOADER_DELAY, SKILL_BAR_SELECTOR, skill_bar_delay, skill_bar_width, timer_millis};

pub fn mount(window: &Window, document: &Document, cancel: CancelHandle) -> Result<(), DomError> {
    set_year(document);

    if document.ready_state() == "complete" {
        on_load(document, &cancel);
        return Ok(());
    }
    let document = document.clone();
    listen(window, "load", move |_| on_load(&document, &cancel))
}

fn on_load(document: &Document, cancel: &CancelHandle) {
    if let Some(preloader) = document
        .get_element_by_id("preloader")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Timeout::new(timer_millis(PRELOADER_DELAY), move || {
            set_style(&preloader, "opacity", "0");
            set_style(&preloader, "pointer-events", "none");
            preloader.remove();
        })
        .forget();
    }

    match query_html(document, SKILL_BAR_SELECTOR) {
        Ok(bars) => {
            for (index, bar) in bars.into_iter().enumerate() {
                Timeout::new(timer_millis(skill_bar_delay(index)), move || {
                    let width = bar.get_attribute("data-width");
                    set_style(&bar, "width", skill_bar_width(width.as_deref()));
                })
                .forget();
            }
        }
        Err(e) => log::warn!("skill bars skipped: {e}"),
    }

    counters::start_all(document, cancel);
}

fn set_year(document: &Document) {
    match document.get_element_by_id("year") {
        Some(el) => el.set_text_content(Some(&js_sys::Date::new_0().get_full_year().to_string())),
        None => log::debug!("no #year in footer"),
    }
}
