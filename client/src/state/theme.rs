//! Theme preference and persistence.
//!
//! The page carries a `data-theme` attribute on `<html>` with either `light`
//! or `dark`. The last choice is stored under a single `localStorage` key and
//! re-read on load. When nothing usable is stored the system color-scheme
//! hint decides.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed write leaves the in-memory theme
//! authoritative for the rest of the session; the next load re-evaluates.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

/// `localStorage` key holding the persisted theme name.
pub const STORAGE_KEY: &str = "portfolio.theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored theme name. Anything unrecognized is treated as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle: the sun offers a way back to light.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa fa-moon",
            Self::Dark => "fa fa-sun",
        }
    }
}

/// Key-value backend for the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    /// Best-effort write; implementations swallow failures.
    fn save(&self, value: &str);
}

/// Where an applied theme becomes visible.
pub trait ThemeSurface {
    fn set_document_theme(&self, theme: Theme);
    fn set_toggle_icon(&self, icon_class: &str);
}

/// In-memory store. The page falls back to it when `localStorage` is
/// unavailable, so toggling still works for the visit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        Self { value: RefCell::new(Some(value.to_owned())) }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_owned());
    }
}

/// Persistent store when one exists, otherwise memory for this visit.
#[derive(Debug, Default)]
pub struct FallbackStore<P> {
    primary: Option<P>,
    memory: MemoryStore,
}

impl<P: ThemeStore> FallbackStore<P> {
    pub fn new(primary: Option<P>) -> Self {
        Self { primary, memory: MemoryStore::default() }
    }

    pub fn is_persistent(&self) -> bool {
        self.primary.is_some()
    }
}

impl<P: ThemeStore> ThemeStore for FallbackStore<P> {
    fn load(&self) -> Option<String> {
        match &self.primary {
            Some(primary) => primary.load(),
            None => self.memory.load(),
        }
    }

    fn save(&self, value: &str) {
        match &self.primary {
            Some(primary) => primary.save(value),
            None => self.memory.save(value),
        }
    }
}

/// Resolve the theme to use on load.
///
/// Persisted value first, then the system hint, then light.
pub fn initial_theme(store: &impl ThemeStore, prefers_dark: bool) -> Theme {
    store
        .load()
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

pub struct ThemeManager<S, V> {
    store: S,
    surface: V,
    current: Theme,
}

impl<S: ThemeStore, V: ThemeSurface> ThemeManager<S, V> {
    /// Resolve the initial theme and apply it immediately.
    pub fn new(store: S, surface: V, prefers_dark: bool) -> Self {
        let current = initial_theme(&store, prefers_dark);
        let manager = Self { store, surface, current };
        manager.render();
        manager
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn apply(&mut self, theme: Theme) {
        self.current = theme;
        self.render();
    }

    pub fn toggle(&mut self) -> Theme {
        self.apply(self.current.toggled());
        self.current
    }

    fn render(&self) {
        self.surface.set_document_theme(self.current);
        self.store.save(self.current.as_str());
        self.surface.set_toggle_icon(self.current.icon_class());
    }
}
