use crate::constants::{CONTROLS_DISPLAY, CONTROLS_SELECTOR, PAGE_LINKS_DISPLAY, PAGE_LINKS_SELECTOR};
use wasm_bindgen::JsCast;
use web_sys as web;

fn element(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    element(document, CONTROLS_SELECTOR)
        .and_then(|el| el.style().get_property_value("display").ok())
        .map(|d| d == "none")
        .unwrap_or(false)
}

fn set_display(document: &web::Document, selector: &str, value: &str) {
    if let Some(el) = element(document, selector) {
        _ = el.style().set_property("display", value);
    }
}

pub fn show(document: &web::Document) {
    set_display(document, CONTROLS_SELECTOR, CONTROLS_DISPLAY);
    set_display(document, PAGE_LINKS_SELECTOR, PAGE_LINKS_DISPLAY);
}

pub fn hide(document: &web::Document) {
    set_display(document, CONTROLS_SELECTOR, "none");
    set_display(document, PAGE_LINKS_SELECTOR, "none");
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}
