use crate::constants::*;
use crate::dom;
use crate::model::constants::NAV_PROBE_OFFSET;
use crate::model::{active_section, anchor_target, scroll_percentage, scroll_target, SectionBox};
use crate::ui::MobileMenu;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Measures every element matching `selector` that carries an id.
pub fn collect_sections(document: &web::Document, selector: &str) -> Vec<SectionBox> {
    dom::query_all::<web::HtmlElement>(document, selector)
        .into_iter()
        .filter(|el| !el.id().is_empty())
        .map(|el| SectionBox {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
        .collect()
}

fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn header_height(document: &web::Document) -> f64 {
    dom::query_one::<web::HtmlElement>(document, NAV_HEADER_SELECTOR)
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Highlights the nav link pointing at the section under scrollY + offset.
pub fn update_active_nav(document: &web::Document, links: &[web::HtmlElement]) {
    let sections = collect_sections(document, NAV_SECTION_SELECTOR);
    if let Some(id) = active_section(&sections, scroll_y() + NAV_PROBE_OFFSET) {
        let href = format!("#{}", id);
        dom::mark_exclusive(links, ACTIVE_CLASS, |el| {
            el.get_attribute("href").as_deref() == Some(href.as_str())
        });
    }
}

/// Progress bar height and the active section dot.
pub fn update_scroll_track(document: &web::Document, dots: &[web::HtmlElement]) {
    let Some(progress) = dom::element_by_id::<web::HtmlElement>(document, SCROLL_PROGRESS_ID) else {
        return;
    };
    let (_, window_height) = dom::viewport_size();
    let document_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let top = scroll_y();
    let pct = scroll_percentage(top, document_height, window_height);
    dom::set_style(&progress, "height", &format!("{}%", pct));

    let sections = collect_sections(document, TRACK_SECTION_SELECTOR);
    if let Some(id) = active_section(&sections, top + window_height / 2.0) {
        dom::mark_exclusive(dots, ACTIVE_CLASS, |el| {
            el.get_attribute(SCROLL_DOT_ATTR).as_deref() == Some(id)
        });
    }
}

/// Smooth-scrolls so the section with `id` sits just below the header.
pub fn scroll_to_section(document: &web::Document, id: &str) {
    if let Some(target) = dom::element_by_id::<web::HtmlElement>(document, id) {
        let top = scroll_target(target.offset_top() as f64, header_height(document));
        dom::smooth_scroll_to(top);
    }
}

pub fn wire_scroll(document: &web::Document, menu: MobileMenu) {
    let links: Rc<Vec<web::HtmlElement>> = Rc::new(dom::query_all(document, NAV_LINK_SELECTOR));
    let dots: Rc<Vec<web::HtmlElement>> = Rc::new(dom::query_all(document, SCROLL_DOT_SELECTOR));

    let (n_links, n_dots) = (links.len(), dots.len());

    wire_nav_links(document, &links, menu);
    wire_anchor_links(document);
    wire_dots(document, &dots);

    update_active_nav(document, &links);
    update_scroll_track(document, &dots);

    // one update per animation frame, however many scroll events arrive
    let ticking = Rc::new(Cell::new(false));
    let doc = document.clone();
    if let Some(window) = web::window() {
        dom::listen_passive(&window, "scroll", move |_ev: web::Event| {
            if ticking.replace(true) {
                return;
            }
            let (doc, links, dots, ticking) =
                (doc.clone(), links.clone(), dots.clone(), ticking.clone());
            let cb = Closure::once_into_js(move || {
                update_active_nav(&doc, &links);
                update_scroll_track(&doc, &dots);
                ticking.set(false);
            });
            if let Some(w) = web::window() {
                _ = w.request_animation_frame(cb.unchecked_ref());
            }
        });
    }
    log::info!("[scroll] wired {} nav links, {} dots", n_links, n_dots);
}

fn wire_nav_links(document: &web::Document, links: &[web::HtmlElement], menu: MobileMenu) {
    for link in links {
        let doc = document.clone();
        let menu = menu.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        dom::listen(link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            if let Some(id) = anchor_target(&href) {
                scroll_to_section(&doc, id);
            }
            menu.close();
        });
    }
}

fn wire_anchor_links(document: &web::Document) {
    for anchor in dom::query_all::<web::HtmlElement>(document, ANCHOR_SELECTOR) {
        if anchor.class_list().contains(NAV_LINK_CLASS) {
            continue;
        }
        let doc = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            if let Some(id) = anchor_target(&href) {
                ev.prevent_default();
                scroll_to_section(&doc, id);
            }
        });
    }
}

fn wire_dots(document: &web::Document, dots: &[web::HtmlElement]) {
    for dot in dots {
        let doc = document.clone();
        let Some(id) = dot.get_attribute(SCROLL_DOT_ATTR) else {
            continue;
        };
        dom::listen(dot, "click", move |_ev: web::MouseEvent| {
            scroll_to_section(&doc, &id);
        });
    }
}

/// Adds the reveal class to `.animate-on-scroll` elements as they come into
/// view.
pub fn wire_reveal(document: &web::Document) {
    let targets = dom::query_all::<web::Element>(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                _ = entry.target().class_list().add_1(REVEAL_CLASS);
            }
        }
    })
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts) {
        Ok(observer) => {
            for el in &targets {
                observer.observe(el);
            }
            log::info!("[scroll] observing {} reveal targets", targets.len());
        }
        Err(e) => log::error!("[scroll] IntersectionObserver unavailable: {:?}", e),
    }
    callback.forget();
}
