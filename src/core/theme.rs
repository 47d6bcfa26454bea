//! Display theme and its persistence adapter
//!
//! The theme is the only value that survives a reload. The rest of the app
//! depends on the small [`ThemeStore`] interface instead of `localStorage`
//! directly; the browser adapter lives in `ui::theme`.

/// localStorage key the theme is persisted under.
pub const THEME_STORAGE_KEY: &str = "campnou-theme";

/// Two-valued display preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything other than the two known values is
    /// rejected so a stray write from a future version cannot leak into the
    /// presentation layer.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button: names the theme a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}

/// Narrow persistence interface for the theme flag.
///
/// Both operations are infallible by contract: an unavailable backing store
/// reports `None` on load and swallows the write, leaving the in-memory
/// default in effect.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// Resolve the initial theme from a store, defaulting to light.
pub fn load_theme(store: &impl ThemeStore) -> Theme {
    store
        .load()
        .and_then(|value| Theme::from_str(&value))
        .unwrap_or_default()
}
