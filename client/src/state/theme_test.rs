use super::*;

#[derive(Default)]
struct RecordingSurface {
    themes: RefCell<Vec<Theme>>,
    icons: RefCell<Vec<String>>,
}

impl ThemeSurface for RecordingSurface {
    fn set_document_theme(&self, theme: Theme) {
        self.themes.borrow_mut().push(theme);
    }

    fn set_toggle_icon(&self, icon_class: &str) {
        self.icons.borrow_mut().push(icon_class.to_owned());
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn parse_accepts_known_names() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse(" dark "), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_names() {
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips_between_variants() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
}

// =============================================================
// initial_theme
// =============================================================

#[test]
fn initial_theme_prefers_persisted_value() {
    let store = MemoryStore::with_value("light");
    assert_eq!(initial_theme(&store, true), Theme::Light);
}

#[test]
fn initial_theme_falls_back_to_system_hint() {
    let store = MemoryStore::default();
    assert_eq!(initial_theme(&store, true), Theme::Dark);
    assert_eq!(initial_theme(&store, false), Theme::Light);
}

#[test]
fn initial_theme_ignores_garbage_value() {
    let store = MemoryStore::with_value("purple");
    assert_eq!(initial_theme(&store, true), Theme::Dark);
}

// =============================================================
// ThemeManager
// =============================================================

#[test]
fn new_applies_and_persists_initial_theme() {
    let manager = ThemeManager::new(MemoryStore::default(), RecordingSurface::default(), true);
    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(manager.store.value().as_deref(), Some("dark"));
    assert_eq!(*manager.surface().themes.borrow(), vec![Theme::Dark]);
    assert_eq!(*manager.surface().icons.borrow(), vec!["fa fa-sun".to_owned()]);
}

#[test]
fn toggle_flips_and_persists() {
    let mut manager = ThemeManager::new(MemoryStore::default(), RecordingSurface::default(), false);
    assert_eq!(manager.toggle(), Theme::Dark);
    assert_eq!(manager.store.value().as_deref(), Some("dark"));
    assert_eq!(manager.toggle(), Theme::Light);
    assert_eq!(manager.store.value().as_deref(), Some("light"));
    assert_eq!(manager.surface().icons.borrow().last().map(String::as_str), Some("fa fa-moon"));
}

#[test]
fn persisted_theme_survives_reload() {
    for theme in [Theme::Light, Theme::Dark] {
        let mut first = ThemeManager::new(MemoryStore::default(), RecordingSurface::default(), false);
        first.apply(theme);
        let stored = first.store.value().unwrap_or_default();

        let reloaded = ThemeManager::new(MemoryStore::with_value(&stored), RecordingSurface::default(), false);
        assert_eq!(reloaded.current(), theme);
    }
}

#[test]
fn fallback_store_keeps_theme_in_memory_without_storage() {
    let store = FallbackStore::<MemoryStore>::new(None);
    assert!(!store.is_persistent());
    let mut manager = ThemeManager::new(store, RecordingSurface::default(), false);
    assert_eq!(manager.toggle(), Theme::Dark);
    assert_eq!(manager.toggle(), Theme::Light);
    assert_eq!(manager.toggle(), Theme::Dark);
}

#[test]
fn fallback_store_prefers_persistent_backend() {
    let store = FallbackStore::new(Some(MemoryStore::with_value("dark")));
    assert!(store.is_persistent());
    assert_eq!(initial_theme(&store, false), Theme::Dark);
    store.save("light");
    assert_eq!(store.load().as_deref(), Some("light"));
}

#[test]
fn fallback_store_without_storage_starts_from_system_hint() {
    let store = FallbackStore::<MemoryStore>::new(None);
    assert_eq!(initial_theme(&store, true), Theme::Dark);
    store.save("light");
    assert_eq!(initial_theme(&store, true), Theme::Light);
}
