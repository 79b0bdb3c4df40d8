//! Smooth scrolling for nav links and hero buttons.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use super::{DomError, listen, query_all};
use crate::util::nav::{SCROLL_TRIGGER_SELECTOR, scroll_target, should_clear_hash};

pub fn mount(window: &Window, document: &Document) -> Result<(), DomError> {
    init(document, query_all(document, SCROLL_TRIGGER_SELECTOR)?)?;
    clear_home_hash(window)
}

pub fn init(document: &Document, triggers: Vec<Element>) -> Result<(), DomError> {
    for trigger in triggers {
        let document = document.clone();
        let el = trigger.clone();
        listen(&trigger, "click", move |event| {
            event.prevent_default();
            let Some(selector) = scroll_target(el.get_attribute("href").as_deref(), &el.id()) else {
                return;
            };
            match document.query_selector(&selector) {
                Ok(Some(section)) => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    section.scroll_into_view_with_scroll_into_view_options(&options);
                }
                Ok(None) => log::debug!("scroll target {selector} not on page"),
                Err(e) => log::debug!("bad scroll target {selector}: {e:?}"),
            }
        })?;
    }
    Ok(())
}

/// Drop a `#home` hash so a reload starts at the top.
fn clear_home_hash(window: &Window) -> Result<(), DomError> {
    let location = window.location();
    if !should_clear_hash(&location.hash()?) {
        return Ok(());
    }
    let url = format!("{}{}", location.pathname()?, location.search()?);
    window.history()?.replace_state_with_url(&JsValue::NULL, "", Some(&url))?;
    Ok(())
}
