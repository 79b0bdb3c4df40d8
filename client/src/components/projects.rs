//! Project grid: category filters, search box, and card activation.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, KeyboardEvent};

use super::modal::ModalView;
use super::{DomError, by_id, listen, query_html, set_style};
use crate::state::modal::ACTIVATE_KEY;
use crate::state::projects::{Category, FilterState, ProjectCard, ProjectFilterIndex};

const CARD_SELECTOR: &str = ".project-card";
const FILTER_SELECTOR: &str = "[data-filter]";
const ACTIVE_CLASS: &str = "active";

struct Grid {
    index: ProjectFilterIndex,
    /// Card elements aligned with `index`.
    elements: Vec<HtmlElement>,
    filter: RefCell<FilterState>,
}

impl Grid {
    fn refresh(&self) {
        let visibility = self.index.visibility(&self.filter.borrow());
        for (el, visible) in self.elements.iter().zip(visibility) {
            set_style(el, "display", if visible { "" } else { "none" });
        }
    }
}

pub fn mount(document: &Document, modal: Option<Rc<ModalView>>) -> Result<(), DomError> {
    let cards = query_html(document, CARD_SELECTOR)?;
    let buttons = query_html(document, FILTER_SELECTOR)?;
    let search = by_id::<HtmlInputElement>(document, "projectSearch")?;
    init(cards, buttons, search, modal)
}

pub fn init(
    card_elements: Vec<HtmlElement>,
    buttons: Vec<HtmlElement>,
    search: HtmlInputElement,
    modal: Option<Rc<ModalView>>,
) -> Result<(), DomError> {
    let mut cards = Vec::new();
    let mut elements = Vec::new();
    for el in card_elements {
        match read_card(&el) {
            Ok(card) => {
                cards.push(card);
                elements.push(el);
            }
            Err(e) => log::warn!("project card skipped: {e}"),
        }
    }
    log::debug!("indexed {} project cards", cards.len());

    let grid = Rc::new(Grid {
        index: ProjectFilterIndex::new(cards),
        elements,
        filter: RefCell::new(FilterState::default()),
    });

    let buttons = Rc::new(buttons);
    for button in buttons.iter() {
        let grid = Rc::clone(&grid);
        let buttons = Rc::clone(&buttons);
        let clicked = button.clone();
        listen(button, "click", move |_| {
            let token = clicked.get_attribute("data-filter").unwrap_or_default();
            for b in buttons.iter() {
                if let Err(e) = b.class_list().toggle_with_force(ACTIVE_CLASS, b == &clicked) {
                    log::debug!("filter button class not updated: {e:?}");
                }
            }
            grid.filter.borrow_mut().category = Category::from_token(&token);
            grid.refresh();
        })?;
    }

    {
        let grid = Rc::clone(&grid);
        let input = search.clone();
        listen(&search, "input", move |_| {
            grid.filter.borrow_mut().set_query(&input.value());
            grid.refresh();
        })?;
    }

    let Some(modal) = modal else {
        log::info!("no modal; project cards are not clickable");
        return Ok(());
    };
    for (index, el) in grid.elements.iter().enumerate() {
        {
            let grid = Rc::clone(&grid);
            let modal = Rc::clone(&modal);
            listen(el, "click", move |_| open_card(&grid, &modal, index))?;
        }
        {
            let grid = Rc::clone(&grid);
            let modal = Rc::clone(&modal);
            listen(el, "keypress", move |event| {
                if event.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == ACTIVATE_KEY) {
                    open_card(&grid, &modal, index);
                }
            })?;
        }
    }
    Ok(())
}

fn open_card(grid: &Grid, modal: &ModalView, index: usize) {
    if let Some(card) = grid.index.get(index) {
        modal.open(index, card);
    }
}

fn read_card(el: &HtmlElement) -> Result<ProjectCard, crate::state::projects::CardError> {
    ProjectCard::from_attributes(
        el.get_attribute("data-title"),
        el.get_attribute("data-desc"),
        el.get_attribute("data-tags"),
        el.get_attribute("data-url"),
    )
}
