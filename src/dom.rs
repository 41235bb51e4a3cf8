use balls_core::{Viewport, WindowMetrics};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Logical window size and device pixel ratio.
pub fn viewport(window: &web::Window) -> Viewport {
    let dpr = window.device_pixel_ratio();
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(
        width as f32,
        height as f32,
        if dpr > 0.0 { dpr as f32 } else { 1.0 },
    )
}

/// Window position plus body width; zeros when unavailable.
pub fn window_metrics() -> WindowMetrics {
    let Some(window) = web::window() else {
        return WindowMetrics::default();
    };
    let client_width = window
        .document()
        .and_then(|d| d.body())
        .map(|b| b.client_width())
        .unwrap_or(0);
    WindowMetrics {
        screen_x: window.screen_x().unwrap_or(0) as f32,
        screen_y: window.screen_y().unwrap_or(0) as f32,
        client_width: client_width as f32,
    }
}

/// High-resolution page clock in milliseconds.
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn checkbox(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

#[inline]
pub fn is_checked(document: &web::Document, element_id: &str) -> bool {
    checkbox(document, element_id)
        .map(|c| c.checked())
        .unwrap_or(false)
}

/// Calls `handler` with the new checked state whenever the checkbox changes.
pub fn add_toggle_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(bool) + 'static,
) {
    let Some(input) = checkbox(document, element_id) else {
        log::warn!("[dom] missing #{}; toggle unavailable", element_id);
        return;
    };
    let input_in_closure = input.clone();
    let closure = Closure::wrap(Box::new(move || handler(input_in_closure.checked())) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
    }
}
