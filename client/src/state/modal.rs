//! Project detail modal state.
//!
//! There is exactly one modal. Opening while open swaps the shown card;
//! closing while closed is a no-op. Callers render based on the returned
//! [`ModalChange`] so an unchanged state costs no DOM writes.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

pub const CLOSE_KEY: &str = "Escape";
pub const ACTIVATE_KEY: &str = "Enter";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalChange {
    Opened(usize),
    Closed,
    Unchanged,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalController {
    open: bool,
    current: Option<usize>,
}

impl ModalController {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the card currently shown, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn open(&mut self, card: usize) -> ModalChange {
        self.open = true;
        self.current = Some(card);
        ModalChange::Opened(card)
    }

    pub fn close(&mut self) -> ModalChange {
        if !self.open {
            return ModalChange::Unchanged;
        }
        self.open = false;
        self.current = None;
        ModalChange::Closed
    }

    /// Document-level key handler.
    pub fn on_key(&mut self, key: &str) -> ModalChange {
        if key == CLOSE_KEY { self.close() } else { ModalChange::Unchanged }
    }

    /// Clicks on the modal close only when they land on the backdrop itself.
    pub fn on_click(&mut self, target_is_backdrop: bool) -> ModalChange {
        if target_is_backdrop { self.close() } else { ModalChange::Unchanged }
    }
}
