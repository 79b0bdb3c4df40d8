//! Pointer tilt on the avatar and project cards.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::{DomError, listen, query_html, set_style};
use crate::util::tilt::{AVATAR_INTENSITY, CARD_INTENSITY, Rect, tilt_transform};

pub fn mount(document: &Document) -> Result<(), DomError> {
    match document.get_element_by_id("avatarWrap").and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        Some(avatar) => init(&avatar, AVATAR_INTENSITY)?,
        None => log::debug!("no #avatarWrap to tilt"),
    }
    for card in query_html(document, ".project-card")? {
        init(&card, CARD_INTENSITY)?;
    }
    Ok(())
}

pub fn init(el: &HtmlElement, intensity: f64) -> Result<(), DomError> {
    {
        let target = el.clone();
        listen(el, "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let bounds = target.get_bounding_client_rect();
            let rect = Rect { left: bounds.left(), top: bounds.top(), width: bounds.width(), height: bounds.height() };
            if let Some(transform) =
                tilt_transform(rect, f64::from(mouse.client_x()), f64::from(mouse.client_y()), intensity)
            {
                set_style(&target, "transform", &transform);
            }
        })?;
    }
    let target = el.clone();
    listen(el, "mouseleave", move |_| set_style(&target, "transform", ""))
}
