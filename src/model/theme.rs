//! Light/dark theme flag and its persistence.
//!
//! The flag is resolved once at startup from (in order) the persisted value,
//! the OS color-scheme preference, and finally `Light`. Only an explicit
//! toggle changes it afterwards, and every toggle is written back.

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a persisted value; anything other than "light"/"dark" is ignored.
    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    #[inline]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle button: the sun offers a way out of dark mode.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }

    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Theme {
        if let Some(theme) = saved.and_then(Theme::parse) {
            return theme;
        }
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Key/value backend holding the persisted flag.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

pub struct ThemeState<S: ThemeStore> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeState<S> {
    pub fn init(store: S, prefers_dark: bool) -> Self {
        let saved = store.load();
        let current = Theme::resolve(saved.as_deref(), prefers_dark);
        Self { store, current }
    }

    #[inline]
    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.save(self.current.as_str());
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
