use crate::frame::LoopHandle;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse moves anywhere on the page plus touches on the canvas feed both simulations.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, handle: &LoopHandle) {
    wire_mousemove(canvas, handle);
    wire_touch(canvas, handle, "touchmove");
    wire_touch(canvas, handle, "touchstart");
}

fn canvas_local(canvas: &web::HtmlCanvasElement, client_x: f64, client_y: f64) -> glam::Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_local(client_x, client_y, rect.left(), rect.top())
}

fn wire_mousemove(canvas: &web::HtmlCanvasElement, handle: &LoopHandle) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let handle = handle.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let p = canvas_local(&canvas, ev.client_x() as f64, ev.client_y() as f64);
        handle.pointer_moved(p.x, p.y);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touch(canvas: &web::HtmlCanvasElement, handle: &LoopHandle, event_name: &str) {
    let canvas_in_closure = canvas.clone();
    let handle = handle.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // Keep the page from scrolling under a finger that is steering the balls.
        ev.prevent_default();
        let Some(touch) = ev.target_touches().get(0) else {
            return;
        };
        let p = canvas_local(
            &canvas_in_closure,
            touch.client_x() as f64,
            touch.client_y() as f64,
        );
        handle.pointer_moved(p.x, p.y);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    closure.forget();
}
