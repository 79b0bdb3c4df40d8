//! Theme toggle button bound to `localStorage` and `<html data-theme>`.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, Storage, Window};

use super::{DomError, by_id, listen};
use crate::state::theme::{FallbackStore, STORAGE_KEY, Theme, ThemeManager, ThemeStore, ThemeSurface};

/// `localStorage` backend.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// `localStorage` when the browser exposes it, else an in-memory store.
    pub fn from_window(window: &Window) -> FallbackStore<Self> {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::debug!("localStorage unavailable: {e:?}");
                None
            }
        };
        let store = FallbackStore::new(storage.map(|storage| Self { storage }));
        if !store.is_persistent() {
            log::info!("theme choice kept for this visit only");
        }
        store
    }
}

impl ThemeStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        self.storage.get_item(STORAGE_KEY).unwrap_or_default()
    }

    fn save(&self, value: &str) {
        if let Err(e) = self.storage.set_item(STORAGE_KEY, value) {
            log::debug!("theme not persisted: {e:?}");
        }
    }
}

struct DocumentSurface {
    root: Element,
    toggle: HtmlElement,
}

impl ThemeSurface for DocumentSurface {
    fn set_document_theme(&self, theme: Theme) {
        if let Err(e) = self.root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("data-theme not set: {e:?}");
        }
    }

    fn set_toggle_icon(&self, icon_class: &str) {
        self.toggle.set_inner_html(&format!("<i class=\"{icon_class}\"></i>"));
    }
}

fn prefers_dark(window: &Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .unwrap_or_default()
        .is_some_and(|mq| mq.matches())
}

pub fn mount(window: &Window, document: &Document) -> Result<(), DomError> {
    let root = document.document_element().ok_or(DomError::MissingElement("html"))?;
    let toggle = by_id::<HtmlElement>(document, "themeToggle")?;
    init(window, root, toggle)
}

/// Apply the initial theme and flip it on every toggle click.
pub fn init(window: &Window, root: Element, toggle: HtmlElement) -> Result<(), DomError> {
    let surface = DocumentSurface { root, toggle: toggle.clone() };
    let manager = ThemeManager::new(LocalStorageStore::from_window(window), surface, prefers_dark(window));
    log::debug!("theme: {}", manager.current().as_str());

    let manager = Rc::new(RefCell::new(manager));
    listen(&toggle, "click", move |_| {
        let theme = manager.borrow_mut().toggle();
        log::debug!("theme toggled to {}", theme.as_str());
    })
}
