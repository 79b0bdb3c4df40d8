//! Contact form bound to the spreadsheet endpoint.

use std::rc::Rc;

use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, UrlSearchParams};

use super::{DomError, by_id, listen, set_style};
use crate::net::contact::{
    ContactError, ContactForm, ContactSubmitter, ContactTransport, DEFAULT_ENDPOINT, FormStatus, StatusGeneration,
};

/// `fetch`-backed transport posting URL-encoded fields.
pub struct FetchTransport;

impl ContactTransport for FetchTransport {
    async fn post_form(&self, endpoint: &str, fields: &[(String, String)]) -> Result<(), ContactError> {
        let params = UrlSearchParams::new().map_err(|e| ContactError::Transport(format!("{e:?}")))?;
        for (name, value) in fields {
            params.append(name, value);
        }
        gloo_net::http::Request::post(endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded;charset=UTF-8")
            .body(params)
            .map_err(|e| ContactError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        Ok(())
    }
}

pub fn mount(document: &Document) -> Result<(), DomError> {
    let form = by_id::<HtmlFormElement>(document, "contactForm")?;
    let status = by_id::<HtmlElement>(document, "formStatus")?;
    init(form, status)
}

/// Validate and submit on `submit`. The form's `data-endpoint` overrides
/// the default endpoint, which lets a deployment route through its relay.
pub fn init(form: HtmlFormElement, status: HtmlElement) -> Result<(), DomError> {
    let endpoint = form
        .get_attribute("data-endpoint")
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
    log::debug!("contact endpoint: {endpoint}");

    let submitter = Rc::new(ContactSubmitter::new(endpoint, FetchTransport));
    let generation = Rc::new(StatusGeneration::default());
    let target = form.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let fields = read_fields(&target);
        let submitter = Rc::clone(&submitter);
        let form = target.clone();
        let status = status.clone();
        let generation = Rc::clone(&generation);
        spawn_local(async move {
            let outcome = submitter
                .submit(&fields, |s| {
                    generation.bump();
                    render(&status, s);
                })
                .await;
            let shown = generation.bump();
            render(&status, outcome);
            if outcome == FormStatus::Sent {
                form.reset();
            }
            if let Some(delay) = outcome.clear_after() {
                sleep(delay).await;
                // A later submission owns the status line now.
                if generation.is_current(shown) {
                    status.set_text_content(Some(""));
                }
            }
        });
    })
}

fn render(status: &HtmlElement, state: FormStatus) {
    status.set_text_content(Some(state.message()));
    if let Some(color) = state.color() {
        set_style(status, "color", color);
    }
}

/// Every named input and textarea in the form, in document order.
fn read_fields(form: &HtmlFormElement) -> ContactForm {
    let Ok(controls) = form.query_selector_all("[name]") else {
        return ContactForm::default();
    };
    ContactForm::from_pairs((0..controls.length()).filter_map(|i| controls.item(i)).filter_map(|node| {
        let name = node.dyn_ref::<Element>()?.get_attribute("name")?;
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            return Some((name, input.value()));
        }
        node.dyn_ref::<HtmlTextAreaElement>().map(|area| (name, area.value()))
    }))
}
