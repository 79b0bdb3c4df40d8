//! Project detail modal.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlAnchorElement, HtmlElement, KeyboardEvent};

use super::{DomError, by_id, listen};
use crate::state::modal::{ModalChange, ModalController};
use crate::state::projects::ProjectCard;

const OPEN_CLASS: &str = "open";

/// The single modal on the page plus its state.
pub struct ModalView {
    state: RefCell<ModalController>,
    root: HtmlElement,
    title: HtmlElement,
    description: HtmlElement,
    visit: Option<HtmlAnchorElement>,
}

impl ModalView {
    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    /// Show `card`, replacing whatever was shown.
    pub fn open(&self, index: usize, card: &ProjectCard) {
        let change = self.state.borrow_mut().open(index);
        self.title.set_text_content(Some(&card.title));
        self.description.set_text_content(Some(&card.description));
        if let Some(visit) = &self.visit {
            match &card.visit_url {
                Some(url) => {
                    visit.set_href(url);
                    visit.set_hidden(false);
                }
                None => visit.set_hidden(true),
            }
        }
        self.render(change);
    }

    pub fn close(&self) {
        let change = self.state.borrow_mut().close();
        self.render(change);
    }

    fn handle_key(&self, key: &str) {
        let change = self.state.borrow_mut().on_key(key);
        self.render(change);
    }

    fn handle_click(&self, target: Option<EventTarget>) {
        let root: &EventTarget = self.root.as_ref();
        let on_backdrop = target.is_some_and(|t| &t == root);
        let change = self.state.borrow_mut().on_click(on_backdrop);
        self.render(change);
    }

    fn render(&self, change: ModalChange) {
        let (open, aria_hidden) = match change {
            ModalChange::Opened(_) => (true, "false"),
            ModalChange::Closed => (false, "true"),
            ModalChange::Unchanged => return,
        };
        let classes = self.root.class_list();
        let result = if open { classes.add_1(OPEN_CLASS) } else { classes.remove_1(OPEN_CLASS) };
        if let Err(e) = result.and_then(|()| self.root.set_attribute("aria-hidden", aria_hidden)) {
            log::warn!("modal state not rendered: {e:?}");
        }
    }
}

pub fn mount(document: &Document) -> Result<Rc<ModalView>, DomError> {
    let visit = document
        .get_element_by_id("modalVisit")
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok());
    let view = ModalView {
        state: RefCell::new(ModalController::default()),
        root: by_id(document, "projectModal")?,
        title: by_id(document, "modalTitle")?,
        description: by_id(document, "modalDesc")?,
        visit,
    };
    let close_button = by_id::<HtmlElement>(document, "closeModal")?;
    init(document, Rc::new(view), &close_button)
}

/// Wire the close button, backdrop clicks and the Escape key.
pub fn init(document: &Document, view: Rc<ModalView>, close_button: &HtmlElement) -> Result<Rc<ModalView>, DomError> {
    {
        let view = Rc::clone(&view);
        listen(close_button, "click", move |_| view.close())?;
    }
    {
        let view = Rc::clone(&view);
        let root = view.root.clone();
        listen(&root, "click", move |event| view.handle_click(event.target()))?;
    }
    {
        let view = Rc::clone(&view);
        listen(document, "keydown", move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                view.handle_key(&key);
            }
        })?;
    }
    Ok(view)
}
