//! Theme context module for the light/dark preference
//!
//! Provides:
//! - ThemeContext for reactive theme state
//! - LocalStorage persistence behind the core ThemeStore interface
//! - Mirroring of the active theme onto the document's data-theme attribute

use leptos::prelude::*;

use crate::core::{THEME_STORAGE_KEY, Theme, ThemeStore, load_theme};

/// `ThemeStore` backed by the browser's localStorage. On the server (or
/// when storage is unavailable) it loads nothing and swallows writes, so
/// the in-memory default stays in effect.
pub struct BrowserThemeStore;

impl ThemeStore for BrowserThemeStore {
    fn load(&self) -> Option<String> {
        #[cfg(not(feature = "ssr"))]
        {
            let window = leptos::web_sys::window()?;
            let storage = window.local_storage().ok()??;
            storage.get_item(THEME_STORAGE_KEY).ok()?
        }
        #[cfg(feature = "ssr")]
        {
            None
        }
    }

    fn save(&self, value: &str) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = leptos::web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(THEME_STORAGE_KEY, value);
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = value;
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Current theme (reactive).
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Flip light/dark. Persistence and the document attribute follow via
    /// the effect installed in [`provide_theme_context`].
    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }
}

/// Mirror the theme onto the document element so styling reacts.
fn apply_theme_attribute(theme: Theme) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = leptos::web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(html) = document.document_element() {
                    let _ = html.set_attribute("data-theme", theme.as_str());
                }
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = theme;
    }
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let theme = RwSignal::new(load_theme(&BrowserThemeStore));
    let ctx = ThemeContext { theme };

    // Persist and mirror on every change, including the initial load.
    Effect::new(move |_| {
        let current = theme.get();
        BrowserThemeStore.save(current.as_str());
        apply_theme_attribute(current);
    });

    provide_context(ctx);
    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
