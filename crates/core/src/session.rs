use std::collections::HashMap;
use std::sync::Mutex;

use crate::theme::ThemeName;

/// Storage key for the persisted theme name.
pub const THEME_KEY: &str = "theme";

/// Storage key for the persisted layout flag (JSON-encoded boolean).
pub const HORIZONTAL_SCROLL_KEY: &str = "horizontalScroll";

/// Viewports narrower than this scroll card lists vertically by default.
const HORIZONTAL_SCROLL_MIN_WIDTH: u32 = 1200;

/// Key-value persistence for per-client page state.
///
/// Mirrors the browser localStorage surface: absent keys read as `None`,
/// writes overwrite silently and never fail.
pub trait SessionStore: Send + Sync {
    /// Gets the stored value for a key, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores a value under a key, replacing any previous value.
    fn set_item(&self, key: &str, value: &str);
}

/// An in-memory [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        let items = match self.items.lock() {
            Ok(items) => items,
            Err(poisoned) => poisoned.into_inner(),
        };
        items.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        let mut items = match self.items.lock() {
            Ok(items) => items,
            Err(poisoned) => poisoned.into_inner(),
        };
        items.insert(key.to_string(), value.to_string());
    }
}

/// Per-session page state.
///
/// Computed once when the session starts and mutated only by the two
/// toggle actions, each of which persists immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub theme: ThemeName,
    pub horizontal_scroll: bool,
}

impl Default for PageState {
    /// The server-side state: no persistence medium exists, so both
    /// fields take their documented defaults.
    fn default() -> Self {
        Self {
            theme: ThemeName::Primary,
            horizontal_scroll: true,
        }
    }
}

impl PageState {
    /// Restores state from client storage, falling back field by field.
    ///
    /// A missing or unparseable theme reads as the default theme. A
    /// missing or unparseable layout flag falls back to the viewport
    /// heuristic: viewports narrower than 1200px scroll vertically.
    /// Without a store the defaults apply unconditionally.
    pub fn restore(store: Option<&dyn SessionStore>, viewport_width: u32) -> Self {
        let Some(store) = store else {
            return Self::default();
        };

        let theme = store
            .get_item(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        let horizontal_scroll = store
            .get_item(HORIZONTAL_SCROLL_KEY)
            .and_then(|value| serde_json::from_str(&value).ok())
            .unwrap_or(viewport_width >= HORIZONTAL_SCROLL_MIN_WIDTH);

        Self {
            theme,
            horizontal_scroll,
        }
    }

    /// Switches to the other theme and persists the new name.
    pub fn toggle_theme(&mut self, store: &dyn SessionStore) {
        self.theme = self.theme.toggled();
        store.set_item(THEME_KEY, self.theme.as_str());
    }

    /// Flips the layout flag and persists it as a JSON boolean.
    pub fn toggle_layout(&mut self, store: &dyn SessionStore) {
        self.horizontal_scroll = !self.horizontal_scroll;
        store.set_item(HORIZONTAL_SCROLL_KEY, &self.horizontal_scroll.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_primary_and_horizontal() {
        let state = PageState::default();
        assert_eq!(state.theme, ThemeName::Primary);
        assert!(state.horizontal_scroll);
    }

    #[test]
    fn test_restore_without_store_uses_defaults() {
        // Viewport width must not matter when no store exists.
        assert_eq!(PageState::restore(None, 320), PageState::default());
        assert_eq!(PageState::restore(None, 1920), PageState::default());
    }

    #[test]
    fn test_restore_reads_persisted_values() {
        let store = MemoryStore::new();
        store.set_item(THEME_KEY, "secondary");
        store.set_item(HORIZONTAL_SCROLL_KEY, "false");

        let state = PageState::restore(Some(&store), 1920);
        assert_eq!(state.theme, ThemeName::Secondary);
        assert!(!state.horizontal_scroll);
    }

    #[test]
    fn test_restore_uses_viewport_when_flag_missing() {
        let store = MemoryStore::new();

        assert!(!PageState::restore(Some(&store), 1199).horizontal_scroll);
        assert!(PageState::restore(Some(&store), 1200).horizontal_scroll);
    }

    #[test]
    fn test_restore_treats_malformed_values_as_absent() {
        let store = MemoryStore::new();
        store.set_item(THEME_KEY, "sparkly");
        store.set_item(HORIZONTAL_SCROLL_KEY, "maybe");

        let narrow = PageState::restore(Some(&store), 800);
        assert_eq!(narrow.theme, ThemeName::Primary);
        assert!(!narrow.horizontal_scroll);

        let wide = PageState::restore(Some(&store), 1440);
        assert!(wide.horizontal_scroll);
    }

    #[test]
    fn test_toggle_theme_switches_and_persists() {
        let store = MemoryStore::new();
        let mut state = PageState::default();

        state.toggle_theme(&store);
        assert_eq!(state.theme, ThemeName::Secondary);
        assert_eq!(store.get_item(THEME_KEY).as_deref(), Some("secondary"));

        state.toggle_theme(&store);
        assert_eq!(state.theme, ThemeName::Primary);
        assert_eq!(store.get_item(THEME_KEY).as_deref(), Some("primary"));
    }

    #[test]
    fn test_toggle_layout_flips_and_persists() {
        let store = MemoryStore::new();
        let mut state = PageState::default();

        state.toggle_layout(&store);
        assert!(!state.horizontal_scroll);
        assert_eq!(
            store.get_item(HORIZONTAL_SCROLL_KEY).as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_toggled_state_survives_a_restore() {
        let store = MemoryStore::new();
        let mut state = PageState::restore(Some(&store), 1440);

        state.toggle_theme(&store);
        state.toggle_layout(&store);

        let restored = PageState::restore(Some(&store), 1440);
        assert_eq!(restored, state);
    }

    #[test]
    fn test_memory_store_overwrites_values() {
        let store = MemoryStore::new();
        store.set_item("k", "one");
        store.set_item("k", "two");
        assert_eq!(store.get_item("k").as_deref(), Some("two"));
        assert_eq!(store.get_item("missing"), None);
    }
}
