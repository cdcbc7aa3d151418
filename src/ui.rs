use crate::constants::*;
use crate::dom;
use crate::model::{SwipeDir, Theme, ThemeState};
use crate::storage::LocalThemeStore;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Writes `data-theme` on `<html>` and swaps the toggle icon.
pub fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute(THEME_ATTR, theme.as_str());
    }
    if let Some(icon) = document.get_element_by_id(THEME_ICON_ID) {
        icon.set_class_name(theme.icon_class());
    }
}

/// Resolves the initial theme, applies it and wires the toggle button.
/// Returns the cell the particle renderer reads its palette from.
pub fn wire_theme(document: &web::Document, prefers_dark: bool) -> Rc<Cell<Theme>> {
    let state = ThemeState::init(LocalThemeStore::open(), prefers_dark);
    let current = Rc::new(Cell::new(state.current()));
    apply_theme(document, state.current());
    log::info!("[theme] initial={}", state.current().as_str());

    let state = Rc::new(RefCell::new(state));
    let current_click = current.clone();
    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move |_ev| {
        let theme = state.borrow_mut().toggle();
        current_click.set(theme);
        apply_theme(&doc, theme);
        log::info!("[theme] toggled to {}", theme.as_str());
    });
    current
}

/// Mobile menu: the toggle button flips `active` on itself and the menu.
#[derive(Clone)]
pub struct MobileMenu {
    menu: Option<web::Element>,
    toggle: Option<web::Element>,
}

impl MobileMenu {
    pub fn find(document: &web::Document) -> Self {
        Self {
            menu: document.get_element_by_id(NAV_MENU_ID),
            toggle: document.get_element_by_id(MOBILE_TOGGLE_ID),
        }
    }

    pub fn close(&self) {
        for el in self.menu.iter().chain(self.toggle.iter()) {
            _ = el.class_list().remove_1(ACTIVE_CLASS);
        }
    }

    fn flip(&self) {
        for el in self.menu.iter().chain(self.toggle.iter()) {
            _ = el.class_list().toggle(ACTIVE_CLASS);
        }
    }

    fn contains(el: &Option<web::Element>, target: Option<&web::Node>) -> bool {
        match el {
            Some(el) => el.contains(target),
            None => false,
        }
    }

    /// Toggle clicks plus close-on-outside-click.
    pub fn wire(&self, document: &web::Document) {
        if let Some(toggle) = &self.toggle {
            let menu = self.clone();
            dom::listen(toggle, "click", move |_ev: web::MouseEvent| menu.flip());
        }
        let menu = self.clone();
        dom::listen(document, "click", move |ev: web::MouseEvent| {
            let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
            let target = target.as_ref();
            if menu.menu.is_some()
                && menu.toggle.is_some()
                && !Self::contains(&menu.menu, target)
                && !Self::contains(&menu.toggle, target)
            {
                menu.close();
            }
        });
    }
}

pub fn mark_loaded(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(BODY_LOADED_CLASS);
    }
}

/// Removes spawned bubbles, trail nodes and lingering swipe classes. Used on
/// teardown, after which nothing would remove them.
pub fn clear_decorations(document: &web::Document) {
    let spawned = format!(
        "#{} .{}, #{} .{}",
        BUBBLE_CONTAINER_ID, BUBBLE_CLASS, TRAIL_CONTAINER_ID, TRAIL_NODE_CLASS
    );
    let nodes = dom::query_all::<web::Element>(document, &spawned);
    for node in &nodes {
        node.remove();
    }
    for card in dom::query_all::<web::Element>(document, SWIPE_CARD_SELECTOR) {
        _ = card.class_list().remove_2(
            SwipeDir::Left.class_name(),
            SwipeDir::Right.class_name(),
        );
    }
    log::info!("[ui] removed {} decoration nodes", nodes.len());
}
