//! Scrollspy nav highlighting and the back-to-top control.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{DomError, listen, query_all, set_style};
use crate::util::scroll::{ScrollSpyController, SectionOffset, back_to_top_visible};

const SECTION_SELECTOR: &str = "section, footer";
const LINK_SELECTOR: &str = "nav a.navlink";

pub fn mount(window: &Window, document: &Document) -> Result<(), DomError> {
    let links = query_all(document, LINK_SELECTOR)?;
    let back_top = document
        .get_element_by_id("backTop")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if back_top.is_none() {
        log::info!("no #backTop control; scrollspy runs without it");
    }
    init(window, document, links, back_top)
}

pub fn init(
    window: &Window,
    document: &Document,
    links: Vec<Element>,
    back_top: Option<HtmlElement>,
) -> Result<(), DomError> {
    let spy = Rc::new(RefCell::new(ScrollSpyController::default()));
    let update = {
        let window = window.clone();
        let document = document.clone();
        let back_top = back_top.clone();
        Rc::new(move |force: bool| {
            let scroll_y = window.scroll_y().unwrap_or_default();
            let sections = section_offsets(&document);
            let mut spy = spy.borrow_mut();
            if spy.update(&sections, scroll_y) || force {
                for link in &links {
                    let active = spy.is_active(link.get_attribute("href").as_deref());
                    if let Err(e) = link.class_list().toggle_with_force("active", active) {
                        log::debug!("nav link class not updated: {e:?}");
                    }
                }
            }
            if let Some(back_top) = &back_top {
                set_style(back_top, "display", if back_to_top_visible(scroll_y) { "grid" } else { "none" });
            }
        })
    };

    // The markup may ship with its own active link; sync it once.
    update(true);
    for event in ["scroll", "resize"] {
        let update = Rc::clone(&update);
        listen(window, event, move |_| update(false))?;
    }

    if let Some(back_top) = back_top {
        let window = window.clone();
        listen(&back_top, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}

/// Re-read section offsets; layout can shift between ticks.
fn section_offsets(document: &Document) -> Vec<SectionOffset> {
    let Ok(sections) = query_all(document, SECTION_SELECTOR) else {
        return Vec::new();
    };
    sections
        .iter()
        .filter_map(|el| el.dyn_ref::<HtmlElement>())
        .map(|el| SectionOffset::new(el.id(), f64::from(el.offset_top())))
        .collect()
}
