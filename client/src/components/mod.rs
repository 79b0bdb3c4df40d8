//! Browser bindings for the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule exposes `mount`, which looks up the elements it needs, and
//! `init`, which takes those handles explicitly and wires listeners to the
//! pure models in `state`, `util` and `net`. A missing element fails only
//! that component; `app` logs the error and keeps booting the rest.

pub mod contact_form;
pub mod counters;
pub mod intro;
pub mod modal;
pub mod nav;
pub mod projects;
pub mod resume;
pub mod reveal;
pub mod scrollspy;
pub mod theme_toggle;
pub mod tilt;
pub mod typing;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("element `{0}` has an unexpected type")]
    WrongType(&'static str),
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Look up an element by id and cast it.
pub(crate) fn by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(id))
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Like [`query_all`], keeping only HTML elements.
pub(crate) fn query_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Attach a listener that lives for the rest of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Set an inline style property, logging rather than failing.
pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("style {property} not applied: {e:?}");
    }
}
