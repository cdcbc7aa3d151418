use crate::constants::PREFERS_DARK_QUERY;
use crate::model::{ThemeStore, THEME_STORAGE_KEY};
use web_sys as web;

/// `window.localStorage`-backed theme flag. Storage can be unavailable
/// (privacy modes); reads then return `None` and writes are dropped.
pub struct LocalThemeStore {
    storage: Option<web::Storage>,
}

impl LocalThemeStore {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[theme] localStorage unavailable; preference will not persist");
        }
        Self { storage }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
    }

    fn save(&mut self, value: &str) {
        if let Some(s) = &self.storage {
            if let Err(e) = s.set_item(THEME_STORAGE_KEY, value) {
                log::error!("[theme] failed to persist: {:?}", e);
            }
        }
    }
}

pub fn prefers_dark() -> bool {
    web::window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}
