//! WASM entry point: boots every page component in isolation.
//!
//! Components are independent. Each one is mounted through [`run`], so a
//! missing element or failing browser API is logged and the rest of the
//! page keeps working.

use std::cell::RefCell;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::components::{
    DomError, contact_form, intro, modal, nav, projects, resume, reveal, scrollspy, theme_toggle, tilt, typing,
};
use crate::util::cancel::CancelHandle;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Handle to the running page effects.
#[derive(Debug, Default)]
pub struct Page {
    cancel: CancelHandle,
    mounted: Vec<&'static str>,
}

impl Page {
    /// Mount every component against the current document.
    pub fn boot() -> Self {
        let mut page = Self::default();
        let Some(window) = web_sys::window() else {
            log::error!("no window; page effects disabled");
            return page;
        };
        let Some(document) = window.document() else {
            log::error!("no document; page effects disabled");
            return page;
        };

        page.run("theme", theme_toggle::mount(&window, &document));
        page.run("intro", intro::mount(&window, &document, page.cancel.clone()));
        page.run("typing", typing::mount(&document, page.cancel.clone()));
        page.run("nav", nav::mount(&window, &document));
        page.run("scrollspy", scrollspy::mount(&window, &document));
        let modal = page.run("modal", modal::mount(&document));
        page.run("projects", projects::mount(&document, modal));
        page.run("contact", contact_form::mount(&document));
        page.run("resume", resume::mount(&document));
        page.run("tilt", tilt::mount(&document));
        page.run("reveal", reveal::mount(&document));

        log::info!("page ready: {}", page.mounted.join(", "));
        page
    }

    /// Stop timer loops. Event listeners stay attached to their elements.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    fn run<T>(&mut self, name: &'static str, result: Result<T, DomError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.mounted.push(name);
                Some(value)
            }
            Err(e) => {
                log::warn!("{name} not initialized: {e}");
                None
            }
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger not installed: {e}").into());
    }
    let page = Page::boot();
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

/// Cancel running animations, e.g. before the host swaps the page out.
#[wasm_bindgen]
pub fn teardown() {
    PAGE.with(|slot| {
        if let Some(page) = slot.borrow_mut().take() {
            page.teardown();
            log::info!("page effects torn down");
        }
    });
}
