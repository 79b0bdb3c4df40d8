//! Reveal-on-scroll via a single `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{DomError, query_html, set_style};
use crate::state::reveal::{
    HIDDEN_OPACITY, HIDDEN_TRANSFORM, Intersection, RevealSet, SHOWN_OPACITY, SHOWN_TRANSFORM, SHOWN_TRANSITION,
    THRESHOLD,
};

const TRACKED_SELECTOR: &str = ".card, .project-card, .timeline-item, .stat";
const INDEX_ATTR: &str = "data-reveal-index";

pub fn mount(document: &Document) -> Result<(), DomError> {
    init(query_html(document, TRACKED_SELECTOR)?)
}

/// Hide every item and reveal each one the first time it scrolls into view.
pub fn init(items: Vec<HtmlElement>) -> Result<(), DomError> {
    if items.is_empty() {
        return Ok(());
    }

    let set = Rc::new(RefCell::new(RevealSet::new(items.len())));
    for (index, item) in items.iter().enumerate() {
        set_style(item, "opacity", HIDDEN_OPACITY);
        set_style(item, "transform", HIDDEN_TRANSFORM);
        item.set_attribute(INDEX_ATTR, &index.to_string())?;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    let index = target.get_attribute(INDEX_ATTR)?.parse::<usize>().ok()?;
                    Some((Intersection { index, is_intersecting: entry.is_intersecting() }, target))
                })
                .collect::<Vec<(Intersection, Element)>>();

            let mut set = set.borrow_mut();
            let revealed = set.on_intersections(batch.iter().map(|(entry, _)| *entry));
            for (entry, target) in &batch {
                if !revealed.contains(&entry.index) {
                    continue;
                }
                if let Some(el) = target.dyn_ref::<HtmlElement>() {
                    set_style(el, "transition", SHOWN_TRANSITION);
                    set_style(el, "opacity", SHOWN_OPACITY);
                    set_style(el, "transform", SHOWN_TRANSFORM);
                }
                observer.unobserve(target);
            }
            if set.is_complete() {
                observer.disconnect();
                log::debug!("all {} reveal targets shown", set.len());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for item in &items {
        observer.observe(item);
    }
    callback.forget();
    log::debug!("reveal tracking {} elements", items.len());
    Ok(())
}
