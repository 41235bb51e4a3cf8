#![cfg(target_arch = "wasm32")]
use balls_core::{Animator, Settings};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::*;
use frame::{FrameLoop, LoopHandle};
use render::{CanvasSurface, DomCircleLayer, Targets};

fn wire_resize(handle: &LoopHandle) {
    let handle = handle.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            handle.resize(dom::viewport(&window));
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn legacy_layer(document: &web::Document) -> Option<DomCircleLayer> {
    let container = document
        .get_element_by_id(LEGACY_CONTAINER_ID)?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    Some(DomCircleLayer::new(document.clone(), container))
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not a canvas", CANVAS_ID))?;

    let viewport = dom::viewport(&window);
    let mut surface = CanvasSurface::new(canvas.clone())?;
    surface.resize(viewport);

    let layer = legacy_layer(&document);
    if layer.is_none() {
        log::warn!("[init] missing #{}; legacy mode draws nothing", LEGACY_CONTAINER_ID);
    }

    let dark = dom::is_checked(&document, DARK_BG_TOGGLE_ID);
    let legacy = dom::is_checked(&document, LEGACY_TOGGLE_ID);
    dom::set_body_class(&document, DARK_BG_CLASS, dark);
    dom::set_body_class(&document, LEGACY_BODY_CLASS, legacy);

    let settings = Settings {
        frame_rate: events::controls::frame_rate_for(dom::is_checked(&document, FPS30_TOGGLE_ID)),
        mode: events::controls::mode_for(legacy),
        seed: rand::random(),
        ..Settings::default()
    };
    log::info!(
        "[init] {}x{} @{}x, {:?} at {:?}",
        viewport.width,
        viewport.height,
        viewport.device_pixel_ratio,
        settings.mode,
        settings.frame_rate
    );

    let targets = Targets {
        canvas: Some(surface),
        layer,
    };
    let handle = LoopHandle::new(FrameLoop::new(Animator::new(viewport, settings), targets));
    handle.start();

    wire_resize(&handle);
    events::pointer::wire_pointer_handlers(&canvas, &handle);
    events::controls::wire_controls(&document, &handle);
    events::keyboard::wire_overlay_toggle_h(&document);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("balls-web starting");
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}
