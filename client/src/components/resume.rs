//! Resume download button.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlElement, Url};

use super::{DomError, by_id, listen};
use crate::util::resume::{RESUME_FILE_NAME, RESUME_MIME, RESUME_PDF};

pub fn mount(document: &Document) -> Result<(), DomError> {
    let button = by_id::<HtmlElement>(document, "resumeDownload")?;
    let document = document.clone();
    listen(&button, "click", move |_| {
        if let Err(e) = download(&document) {
            log::error!("resume download failed: {e}");
        }
    })
}

/// Hand the placeholder PDF to the browser through a temporary anchor.
pub fn download(document: &Document) -> Result<(), DomError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(RESUME_PDF).into());
    let options = BlobPropertyBag::new();
    options.set_type(RESUME_MIME);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| DomError::WrongType("a"))?;
    anchor.set_href(&url);
    anchor.set_download(RESUME_FILE_NAME);

    let body = document.body().ok_or(DomError::MissingElement("body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url)?;
    Ok(())
}
